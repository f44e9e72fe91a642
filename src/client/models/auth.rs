//! Registration and login payloads

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Customer;

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<&RegisterRequest> for LoginRequest {
    fn from(request: &RegisterRequest) -> Self {
        Self {
            phone: request.phone.clone(),
            password: request.password.clone(),
        }
    }
}

/// Response to `/register` and `/login`.
///
/// Registration may succeed without issuing a token; the caller then logs in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub customer: Customer,

    #[serde(default)]
    pub access_token: Option<String>,
}
