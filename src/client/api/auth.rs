//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, Customer, LoginRequest, RegisterRequest};
use crate::error::Result;
use crate::session::Credential;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account. The response may or may not carry a token.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// Exchange phone and password for a token
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    /// Resolve the customer a credential belongs to
    async fn me(&self, credential: &Credential) -> Result<Customer>;
}
