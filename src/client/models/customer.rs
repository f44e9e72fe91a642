//! Customer models

use serde::{Deserialize, Serialize};

/// A customer account as returned by `/me`, `/login`, and `/admin/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Missing means a regular customer
    #[serde(default)]
    pub is_admin: bool,
}

/// `{"customer": {...}}` wrapper used by the identity endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerEnvelope {
    pub customer: Customer,
}
