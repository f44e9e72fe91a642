//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod analytics;
mod booking;
pub mod common;
mod customer;
mod review;
mod service;
mod stylist;

pub use analytics::BookingCountDisplay;
pub use booking::{AdminBookingDisplay, BookingDisplay};
pub use customer::CustomerDisplay;
pub use review::ReviewDisplay;
pub use service::ServiceDisplay;
pub use stylist::StylistDisplay;
