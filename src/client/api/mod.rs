//! API trait definitions split by responsibility
//!
//! - [`AuthApi`]: registration, login, identity
//! - [`CatalogApi`]: services, stylists, reviews
//! - [`BookingApi`]: bookings and payments
//! - [`AdminApi`]: administrator reports
//!
//! The [`ParlorApi`](super::ParlorApi) super-trait combines all four. Every
//! authenticated method takes the caller's credential explicitly; clients
//! hold no session state.

mod admin;
mod auth;
mod booking;
mod catalog;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use booking::BookingApi;
pub use catalog::CatalogApi;
