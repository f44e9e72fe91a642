//! Customer display model

use serde::Serialize;
use tabled::Tabled;

use super::common::NONE;
use crate::client::models::Customer;

/// Row of the admin users table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CustomerDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ADMIN")]
    pub admin: String,
}

impl From<Customer> for CustomerDisplay {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone.unwrap_or_else(|| NONE.to_string()),
            admin: if customer.is_admin { "Yes" } else { "No" }.to_string(),
        }
    }
}
