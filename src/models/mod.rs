//! Display models for CLI output

pub mod display;

pub use display::{
    AdminBookingDisplay, BookingCountDisplay, BookingDisplay, CustomerDisplay, ReviewDisplay,
    ServiceDisplay, StylistDisplay,
};
