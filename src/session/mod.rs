//! Session state for the signed-in customer
//!
//! The session is a [`Credential`] paired with the [`Principal`] it belongs
//! to. The pair only ever exists together: [`Session`] cannot be built from
//! one half, and [`SessionStore`] persists and clears both in a single
//! storage write.
//!
//! - [`store`] - in-memory state published over a watch channel, mirrored to storage
//! - [`storage`] - the key/value backends the store writes through
//! - [`bootstrap`] - one-time validation of a persisted credential at startup
//! - [`login`] - sign-in and registration
//! - [`logout`] - idempotent sign-out

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::models::Customer;

pub mod bootstrap;
pub mod login;
pub mod logout;
pub mod storage;
pub mod store;

pub use bootstrap::{BootstrapOutcome, bootstrap};
pub use login::{login, register};
pub use logout::logout;
#[cfg(test)]
pub use storage::MemoryStorage;
pub use storage::{FileStorage, SessionStorage};
pub use store::{PersistedSession, SessionStore};

/// Opaque bearer token issued at login.
///
/// Never empty. The client performs no expiry check; an invalid token is
/// only discovered when the server rejects it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token string, rejecting blank values.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// The authenticated customer's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl From<Customer> for Principal {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            is_admin: customer.is_admin,
        }
    }
}

/// A credential together with the principal it authenticates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credential: Credential,
    principal: Principal,
}

impl Session {
    pub fn new(credential: Credential, principal: Principal) -> Self {
        Self {
            credential,
            principal,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}

/// What route guards see when they consult the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Bootstrap has not finished validating a persisted credential
    Loading,
    /// Nobody is signed in
    Anonymous,
    /// A validated session
    Authenticated(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.session().map(Session::principal)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session().map(Session::credential)
    }
}
