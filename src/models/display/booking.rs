//! Booking display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{NONE, format_datetime, format_price};
use crate::client::models::{AdminBooking, Booking};

/// Row of the customer's own bookings
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BookingDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "STYLIST")]
    pub stylist: String,

    #[tabled(rename = "APPOINTMENT")]
    pub appointment: String,
}

impl From<Booking> for BookingDisplay {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            service: booking
                .service
                .map(|s| s.title)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "No service".to_string()),
            stylist: booking
                .stylist
                .map(|s| s.name)
                .unwrap_or_else(|| NONE.to_string()),
            appointment: format_datetime(booking.appointment_time.as_deref()),
        }
    }
}

/// Row of the admin all-bookings table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AdminBookingDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "STYLIST")]
    pub stylist: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "DATE & TIME")]
    pub appointment: String,
}

impl From<AdminBooking> for AdminBookingDisplay {
    fn from(booking: AdminBooking) -> Self {
        Self {
            id: booking.id,
            customer: booking.customer_name,
            stylist: booking.stylist_name,
            service: booking.service_name,
            price: format_price(booking.service_price),
            appointment: format_datetime(booking.appointment_time.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{BookedService, StylistRef};

    #[test]
    fn test_booking_display_fills_gaps() {
        let booking = Booking {
            id: 3,
            appointment_time: None,
            service: None,
            stylist: None,
            notes: None,
            created_at: None,
        };
        let display = BookingDisplay::from(booking);
        assert_eq!(display.service, "No service");
        assert_eq!(display.stylist, "--");
        assert_eq!(display.appointment, "--");
    }

    #[test]
    fn test_booking_display_with_relations() {
        let booking = Booking {
            id: 3,
            appointment_time: Some("2025-03-01T10:00:00".to_string()),
            service: Some(BookedService {
                id: 1,
                title: "Braids".to_string(),
                price: Some(1500.0),
            }),
            stylist: Some(StylistRef {
                id: 2,
                name: "Wanjiru".to_string(),
            }),
            notes: None,
            created_at: None,
        };
        let display = BookingDisplay::from(booking);
        assert_eq!(display.service, "Braids");
        assert_eq!(display.stylist, "Wanjiru");
        assert_eq!(display.appointment, "2025-03-01 10:00");
    }
}
