//! Mock API client for testing
//!
//! Implements every API trait from canned data so session and command logic
//! can be tested without a server. Call counters let tests assert that no
//! request was made.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AdminApi, AuthApi, BookingApi, CatalogApi};
use super::models::{
    AdminBooking, AnalyticsSummary, AuthResponse, Booking, BookingRequest, Customer, LoginRequest,
    PaymentRequest, PaymentResponse, RegisterRequest, Review, ReviewRequest, Service,
    ServiceRequest, ServiceUpdate, Stylist, StylistRequest, StylistUpdate,
};
use crate::error::{ApiError, Result};
use crate::session::Credential;

/// Mock API client.
///
/// # Example
/// ```ignore
/// let mock = MockParlorClient::new().with_me(customer).await;
/// bootstrap(&store, &mock).await;
/// assert_eq!(mock.call_counts().await.me, 1);
/// ```
#[derive(Default)]
pub struct MockParlorClient {
    /// Customer returned from `me`
    me: Arc<Mutex<Option<Customer>>>,
    /// Error returned from `me` instead of the customer
    me_error: Arc<Mutex<Option<ApiError>>>,
    /// Response to `login`; absent means the server rejects the password
    login: Arc<Mutex<Option<AuthResponse>>>,
    /// Response to `register`
    register: Arc<Mutex<Option<AuthResponse>>>,
    services: Arc<Mutex<Vec<Service>>>,
    stylists: Arc<Mutex<Vec<Stylist>>>,
    reviews: Arc<Mutex<Vec<Review>>>,
    bookings: Arc<Mutex<Vec<Booking>>>,
    users: Arc<Mutex<Vec<Customer>>>,
    admin_bookings: Arc<Mutex<Vec<AdminBooking>>>,
    analytics: Arc<Mutex<Option<AnalyticsSummary>>>,
    /// Error for the next call of any kind, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    last_credential: Arc<Mutex<Option<String>>>,
    booking_requests: Arc<Mutex<Vec<BookingRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub me: usize,
    pub catalog_reads: usize,
    pub catalog_writes: usize,
    pub reviews: usize,
    pub bookings: usize,
    pub payments: usize,
    pub admin: usize,
}

impl CallCounts {
    /// Total number of API calls made
    pub fn total(&self) -> usize {
        self.register
            + self.login
            + self.me
            + self.catalog_reads
            + self.catalog_writes
            + self.reviews
            + self.bookings
            + self.payments
            + self.admin
    }
}

impl MockParlorClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_me(self, customer: Customer) -> Self {
        *self.me.lock().await = Some(customer);
        self
    }

    /// Make `me` fail, simulating a rejected or unverifiable credential.
    pub async fn with_me_error(self, error: ApiError) -> Self {
        *self.me_error.lock().await = Some(error);
        self
    }

    pub async fn with_login(self, response: AuthResponse) -> Self {
        *self.login.lock().await = Some(response);
        self
    }

    pub async fn with_register(self, response: AuthResponse) -> Self {
        *self.register.lock().await = Some(response);
        self
    }

    pub async fn with_services(self, services: Vec<Service>) -> Self {
        *self.services.lock().await = services;
        self
    }

    pub async fn with_stylists(self, stylists: Vec<Stylist>) -> Self {
        *self.stylists.lock().await = stylists;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Token of the most recent authenticated call
    pub async fn last_credential(&self) -> Option<String> {
        self.last_credential.lock().await.clone()
    }

    pub async fn booking_requests(&self) -> Vec<BookingRequest> {
        self.booking_requests.lock().await.clone()
    }

    /// Count the call, remember its credential, and surface a pending error.
    async fn record(
        &self,
        counter: fn(&mut CallCounts) -> &mut usize,
        credential: Option<&Credential>,
    ) -> Result<()> {
        *counter(&mut *self.call_count.lock().await) += 1;
        if let Some(credential) = credential {
            *self.last_credential.lock().await = Some(credential.as_str().to_string());
        }
        match self.error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

fn not_found(what: &str, id: u64) -> crate::error::Error {
    ApiError::NotFound(format!("{} {} not found", what, id)).into()
}

#[async_trait]
impl AuthApi for MockParlorClient {
    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse> {
        self.record(|c| &mut c.register, None).await?;
        self.register
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::BadRequest("Phone already registered".to_string()).into())
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse> {
        self.record(|c| &mut c.login, None).await?;
        self.login
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()).into())
    }

    async fn me(&self, credential: &Credential) -> Result<Customer> {
        self.record(|c| &mut c.me, Some(credential)).await?;
        if let Some(e) = self.me_error.lock().await.take() {
            return Err(e.into());
        }
        self.me
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

#[async_trait]
impl CatalogApi for MockParlorClient {
    async fn list_services(&self, credential: Option<&Credential>) -> Result<Vec<Service>> {
        self.record(|c| &mut c.catalog_reads, credential).await?;
        Ok(self.services.lock().await.clone())
    }

    async fn get_service(&self, credential: Option<&Credential>, id: u64) -> Result<Service> {
        self.record(|c| &mut c.catalog_reads, credential).await?;
        let services = self.services.lock().await;
        services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("Service", id))
    }

    async fn create_service(
        &self,
        credential: &Credential,
        request: &ServiceRequest,
    ) -> Result<Service> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut services = self.services.lock().await;
        let service = Service {
            id: services.len() as u64 + 1,
            title: request.title.clone(),
            description: Some(request.description.clone()),
            price: request.price,
            image_url: request.image_url.clone(),
            stylists: Vec::new(),
        };
        services.push(service.clone());
        Ok(service)
    }

    async fn update_service(
        &self,
        credential: &Credential,
        id: u64,
        update: &ServiceUpdate,
    ) -> Result<Service> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut services = self.services.lock().await;
        let service = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("Service", id))?;
        if let Some(title) = &update.title {
            service.title = title.clone();
        }
        if let Some(description) = &update.description {
            service.description = Some(description.clone());
        }
        if let Some(price) = update.price {
            service.price = price;
        }
        Ok(service.clone())
    }

    async fn delete_service(&self, credential: &Credential, id: u64) -> Result<()> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut services = self.services.lock().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(not_found("Service", id));
        }
        Ok(())
    }

    async fn list_stylists(&self, credential: Option<&Credential>) -> Result<Vec<Stylist>> {
        self.record(|c| &mut c.catalog_reads, credential).await?;
        Ok(self.stylists.lock().await.clone())
    }

    async fn get_stylist(&self, credential: Option<&Credential>, id: u64) -> Result<Stylist> {
        self.record(|c| &mut c.catalog_reads, credential).await?;
        let stylists = self.stylists.lock().await;
        stylists
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("Stylist", id))
    }

    async fn create_stylist(
        &self,
        credential: &Credential,
        request: &StylistRequest,
    ) -> Result<Stylist> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut stylists = self.stylists.lock().await;
        let stylist = Stylist {
            id: stylists.len() as u64 + 1,
            name: request.name.clone(),
            bio: Some(request.bio.clone()),
            services: Vec::new(),
        };
        stylists.push(stylist.clone());
        Ok(stylist)
    }

    async fn update_stylist(
        &self,
        credential: &Credential,
        id: u64,
        update: &StylistUpdate,
    ) -> Result<Stylist> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut stylists = self.stylists.lock().await;
        let stylist = stylists
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("Stylist", id))?;
        if let Some(name) = &update.name {
            stylist.name = name.clone();
        }
        if let Some(bio) = &update.bio {
            stylist.bio = Some(bio.clone());
        }
        Ok(stylist.clone())
    }

    async fn delete_stylist(&self, credential: &Credential, id: u64) -> Result<()> {
        self.record(|c| &mut c.catalog_writes, Some(credential)).await?;
        let mut stylists = self.stylists.lock().await;
        let before = stylists.len();
        stylists.retain(|s| s.id != id);
        if stylists.len() == before {
            return Err(not_found("Stylist", id));
        }
        Ok(())
    }

    async fn list_reviews(&self, _stylist_id: u64) -> Result<Vec<Review>> {
        self.record(|c| &mut c.reviews, None).await?;
        Ok(self.reviews.lock().await.clone())
    }

    async fn create_review(
        &self,
        credential: &Credential,
        request: &ReviewRequest,
    ) -> Result<Review> {
        self.record(|c| &mut c.reviews, Some(credential)).await?;
        let mut reviews = self.reviews.lock().await;
        let review = Review {
            id: reviews.len() as u64 + 1,
            rating: request.rating,
            comment: Some(request.comment.clone()),
            created_at: None,
            customer_id: None,
            customer_name: None,
        };
        reviews.push(review.clone());
        Ok(review)
    }
}

#[async_trait]
impl BookingApi for MockParlorClient {
    async fn list_bookings(
        &self,
        credential: &Credential,
        _customer_id: u64,
    ) -> Result<Vec<Booking>> {
        self.record(|c| &mut c.bookings, Some(credential)).await?;
        Ok(self.bookings.lock().await.clone())
    }

    async fn create_booking(
        &self,
        credential: &Credential,
        request: &BookingRequest,
    ) -> Result<Booking> {
        self.record(|c| &mut c.bookings, Some(credential)).await?;
        self.booking_requests.lock().await.push(request.clone());
        let mut bookings = self.bookings.lock().await;
        let booking = Booking {
            id: bookings.len() as u64 + 1,
            appointment_time: Some(request.appointment_time.clone()),
            service: None,
            stylist: None,
            notes: None,
            created_at: None,
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn initiate_payment(
        &self,
        credential: &Credential,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse> {
        self.record(|c| &mut c.payments, Some(credential)).await?;
        Ok(PaymentResponse {
            message: Some("Success. Request accepted for processing".to_string()),
            checkout_request_id: Some(format!("ws_CO_{}", request.booking_id)),
        })
    }
}

#[async_trait]
impl AdminApi for MockParlorClient {
    async fn list_users(&self, credential: &Credential) -> Result<Vec<Customer>> {
        self.record(|c| &mut c.admin, Some(credential)).await?;
        Ok(self.users.lock().await.clone())
    }

    async fn list_all_bookings(&self, credential: &Credential) -> Result<Vec<AdminBooking>> {
        self.record(|c| &mut c.admin, Some(credential)).await?;
        Ok(self.admin_bookings.lock().await.clone())
    }

    async fn analytics_summary(&self, credential: &Credential) -> Result<AnalyticsSummary> {
        self.record(|c| &mut c.admin, Some(credential)).await?;
        self.analytics
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound("No analytics available".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_shot_error_is_consumed() {
        let mock = MockParlorClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(mock.list_services(None).await.is_err());
        assert!(mock.list_services(None).await.is_ok());
        assert_eq!(mock.call_counts().await.catalog_reads, 2);
    }

    #[tokio::test]
    async fn test_credential_is_recorded() {
        let mock = MockParlorClient::new();
        let credential = Credential::new("tok").unwrap();
        let _ = mock.list_bookings(&credential, 1).await;
        assert_eq!(mock.last_credential().await.as_deref(), Some("tok"));
    }
}
