//! Dashboard breakdown rows

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{ServiceCount, StylistCount};

/// Bookings per service or per stylist
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BookingCountDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BOOKINGS")]
    pub count: u64,
}

impl From<ServiceCount> for BookingCountDisplay {
    fn from(row: ServiceCount) -> Self {
        Self {
            name: row.service_name,
            count: row.count,
        }
    }
}

impl From<StylistCount> for BookingCountDisplay {
    fn from(row: StylistCount) -> Self {
        Self {
            name: row.stylist_name,
            count: row.count,
        }
    }
}
