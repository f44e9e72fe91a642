//! Booking models

use serde::{Deserialize, Serialize};

use super::StylistRef;

/// An appointment booked by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,

    /// ISO-8601 appointment time
    #[serde(default, alias = "preferred_date")]
    pub appointment_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<BookedService>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylist: Option<StylistRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedService {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "base_price")]
    pub price: Option<f64>,
}

/// Body for `POST /bookings`
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub service_id: u64,
    pub stylist_id: u64,
    pub appointment_time: String,
}

/// `POST /bookings` answers `{"booking": {...}}`; older servers return the
/// booking bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookingEnvelope {
    Wrapped { booking: Booking },
    Bare(Booking),
}

impl BookingEnvelope {
    pub fn into_inner(self) -> Booking {
        match self {
            BookingEnvelope::Wrapped { booking } | BookingEnvelope::Bare(booking) => booking,
        }
    }
}

/// A row of `GET /admin/bookings`, flattened by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminBooking {
    pub id: u64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub stylist_name: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub service_price: f64,
    #[serde(default)]
    pub appointment_time: Option<String>,
}
