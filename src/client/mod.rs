//! Beauty-parlor API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parlor;

pub use api::{AdminApi, AuthApi, BookingApi, CatalogApi};
#[cfg(test)]
pub use mock::MockParlorClient;
pub use parlor::ParlorClient;

/// The full API surface, for callers that need more than one area
pub trait ParlorApi: AuthApi + CatalogApi + BookingApi + AdminApi {}

impl<T> ParlorApi for T where T: AuthApi + CatalogApi + BookingApi + AdminApi {}
