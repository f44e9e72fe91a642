//! Bookings and payments

use async_trait::async_trait;

use crate::client::models::{Booking, BookingRequest, PaymentRequest, PaymentResponse};
use crate::error::Result;
use crate::session::Credential;

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Bookings belonging to `customer_id`
    async fn list_bookings(&self, credential: &Credential, customer_id: u64)
    -> Result<Vec<Booking>>;

    async fn create_booking(
        &self,
        credential: &Credential,
        request: &BookingRequest,
    ) -> Result<Booking>;

    /// Start an M-Pesa STK push for a booking
    async fn initiate_payment(
        &self,
        credential: &Credential,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse>;
}
