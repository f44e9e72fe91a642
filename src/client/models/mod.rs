//! Booking API data models
//!
//! Types returned by and sent to the beauty-parlor API, organized by
//! resource. Deserialization is lenient: optional fields default and unknown
//! fields are ignored, since the server's serializers vary per endpoint.

mod analytics;
mod auth;
mod booking;
mod customer;
mod payment;
mod review;
mod service;
mod stylist;

pub use analytics::{AnalyticsSummary, ServiceCount, StylistCount, Totals};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use booking::{AdminBooking, BookedService, Booking, BookingEnvelope, BookingRequest};
pub use customer::{Customer, CustomerEnvelope};
pub use payment::{PaymentRequest, PaymentResponse};
pub use review::{Review, ReviewRequest};
pub use service::{Service, ServiceRequest, ServiceUpdate, StylistRef};
pub use stylist::{ServiceRef, Stylist, StylistRequest, StylistUpdate};
