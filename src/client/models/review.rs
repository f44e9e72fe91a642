//! Stylist review models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,

    /// 1 to 5 stars
    pub rating: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl Review {
    /// Reviewer name, falling back to the customer id
    pub fn author(&self) -> String {
        match (&self.customer_name, self.customer_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("Customer {}", id),
            _ => "Anonymous".to_string(),
        }
    }
}

/// Body for `POST /reviews`
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub stylist_id: u64,
    pub rating: u8,
    pub comment: String,
}
