//! Administrator reports

use async_trait::async_trait;

use crate::client::models::{AdminBooking, AnalyticsSummary, Customer};
use crate::error::Result;
use crate::session::Credential;

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_users(&self, credential: &Credential) -> Result<Vec<Customer>>;

    async fn list_all_bookings(&self, credential: &Credential) -> Result<Vec<AdminBooking>>;

    async fn analytics_summary(&self, credential: &Credential) -> Result<AnalyticsSummary>;
}
