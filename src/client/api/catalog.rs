//! Services, stylists, and reviews

use async_trait::async_trait;

use crate::client::models::{
    Review, ReviewRequest, Service, ServiceRequest, ServiceUpdate, Stylist, StylistRequest,
    StylistUpdate,
};
use crate::error::Result;
use crate::session::Credential;

/// Catalog operations. Listing is public; writes need an admin credential.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_services(&self, credential: Option<&Credential>) -> Result<Vec<Service>>;

    async fn get_service(&self, credential: Option<&Credential>, id: u64) -> Result<Service>;

    async fn create_service(
        &self,
        credential: &Credential,
        request: &ServiceRequest,
    ) -> Result<Service>;

    async fn update_service(
        &self,
        credential: &Credential,
        id: u64,
        update: &ServiceUpdate,
    ) -> Result<Service>;

    async fn delete_service(&self, credential: &Credential, id: u64) -> Result<()>;

    async fn list_stylists(&self, credential: Option<&Credential>) -> Result<Vec<Stylist>>;

    async fn get_stylist(&self, credential: Option<&Credential>, id: u64) -> Result<Stylist>;

    async fn create_stylist(
        &self,
        credential: &Credential,
        request: &StylistRequest,
    ) -> Result<Stylist>;

    async fn update_stylist(
        &self,
        credential: &Credential,
        id: u64,
        update: &StylistUpdate,
    ) -> Result<Stylist>;

    async fn delete_stylist(&self, credential: &Credential, id: u64) -> Result<()>;

    async fn list_reviews(&self, stylist_id: u64) -> Result<Vec<Review>>;

    async fn create_review(&self, credential: &Credential, request: &ReviewRequest)
    -> Result<Review>;
}
