//! Service display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{NONE, format_price, truncate_string};
use crate::client::models::Service;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ServiceDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Service> for ServiceDisplay {
    fn from(service: Service) -> Self {
        let description = service
            .description
            .filter(|d| !d.is_empty())
            .map(|d| truncate_string(&d, 50))
            .unwrap_or_else(|| NONE.to_string());

        Self {
            id: service.id,
            title: service.title,
            price: format_price(service.price),
            description,
        }
    }
}
