//! Beauty-parlor API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AdminApi, AuthApi, BookingApi, CatalogApi};
use super::models::{
    AdminBooking, AnalyticsSummary, AuthResponse, Booking, BookingEnvelope, BookingRequest,
    Customer, CustomerEnvelope, LoginRequest, PaymentRequest, PaymentResponse, RegisterRequest,
    Review, ReviewRequest, Service, ServiceRequest, ServiceUpdate, Stylist, StylistRequest,
    StylistUpdate,
};
use crate::error::{ApiError, Result};
use crate::session::Credential;

/// Client-side throttle. The API has no documented limit; this keeps
/// scripted use from hammering the free-tier host.
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => NonZeroU32::MIN,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default wait when a 429 carries no `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTPS/JSON client for the booking API.
///
/// Holds no session: every authenticated call takes the credential from
/// the caller.
#[derive(Clone)]
pub struct ParlorClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
}

impl ParlorClient {
    /// Create a client for `base_url` (no trailing slash)
    pub fn with_host(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("parlor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            rate_limiter: Arc::new(RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND))),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn builder(&self, method: Method, path: &str, credential: Option<&Credential>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match credential {
            Some(credential) => builder.header("Authorization", credential.bearer()),
            None => builder,
        }
    }

    /// Send a request and map non-success statuses to [`ApiError`]
    async fn dispatch(&self, request: RequestBuilder, authenticated: bool) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();
        debug!("Request failed with {}: {}", status, body);

        Err(error_for_status(status, &body, authenticated, retry_after).into())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        credential: Option<&Credential>,
    ) -> Result<T> {
        let request = self.builder(Method::GET, path, credential);
        let response = self.dispatch(request, credential.is_some()).await?;
        parse_json(response).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.builder(method, path, credential).json(body);
        let response = self.dispatch(request, credential.is_some()).await?;
        parse_json(response).await
    }

    async fn delete(&self, path: &str, credential: &Credential) -> Result<()> {
        let request = self.builder(Method::DELETE, path, Some(credential));
        self.dispatch(request, true).await?;
        Ok(())
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
}

/// Pull the human-readable message out of an error body.
///
/// The server answers `{"error": ...}`; its JWT layer answers `{"msg": ...}`.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "msg", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Map an error status to an [`ApiError`].
///
/// A 401 only means "credential rejected" when one was sent. Without one it
/// is a failed login and carries the server's message.
fn error_for_status(
    status: StatusCode,
    body: &str,
    authenticated: bool,
    retry_after: Option<u64>,
) -> ApiError {
    let message = server_message(body);
    match status {
        StatusCode::UNAUTHORIZED if authenticated => ApiError::Unauthorized,
        StatusCode::UNAUTHORIZED => {
            ApiError::BadRequest(message.unwrap_or_else(|| "Invalid credentials".to_string()))
        }
        StatusCode::FORBIDDEN => {
            ApiError::Forbidden(message.unwrap_or_else(|| "Admin access required".to_string()))
        }
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(message.unwrap_or_else(|| "Resource not found".to_string()))
        }
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(
            retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        )),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(message.unwrap_or_else(|| "Bad request".to_string()))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(message.unwrap_or_else(|| format!("Server error: {}", status)))
        }
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

#[async_trait]
impl AuthApi for ParlorClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.send_json(Method::POST, "/register", None, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.send_json(Method::POST, "/login", None, request).await
    }

    async fn me(&self, credential: &Credential) -> Result<Customer> {
        let envelope: CustomerEnvelope = self.get("/me", Some(credential)).await?;
        Ok(envelope.customer)
    }
}

#[async_trait]
impl CatalogApi for ParlorClient {
    async fn list_services(&self, credential: Option<&Credential>) -> Result<Vec<Service>> {
        self.get("/services", credential).await
    }

    async fn get_service(&self, credential: Option<&Credential>, id: u64) -> Result<Service> {
        self.get(&format!("/services/{}", id), credential).await
    }

    async fn create_service(
        &self,
        credential: &Credential,
        request: &ServiceRequest,
    ) -> Result<Service> {
        self.send_json(Method::POST, "/services", Some(credential), request)
            .await
    }

    async fn update_service(
        &self,
        credential: &Credential,
        id: u64,
        update: &ServiceUpdate,
    ) -> Result<Service> {
        let path = format!("/services/{}", id);
        self.send_json(Method::PUT, &path, Some(credential), update)
            .await
    }

    async fn delete_service(&self, credential: &Credential, id: u64) -> Result<()> {
        self.delete(&format!("/services/{}", id), credential).await
    }

    async fn list_stylists(&self, credential: Option<&Credential>) -> Result<Vec<Stylist>> {
        self.get("/stylists", credential).await
    }

    async fn get_stylist(&self, credential: Option<&Credential>, id: u64) -> Result<Stylist> {
        self.get(&format!("/stylists/{}", id), credential).await
    }

    async fn create_stylist(
        &self,
        credential: &Credential,
        request: &StylistRequest,
    ) -> Result<Stylist> {
        self.send_json(Method::POST, "/stylists", Some(credential), request)
            .await
    }

    async fn update_stylist(
        &self,
        credential: &Credential,
        id: u64,
        update: &StylistUpdate,
    ) -> Result<Stylist> {
        let path = format!("/stylists/{}", id);
        self.send_json(Method::PUT, &path, Some(credential), update)
            .await
    }

    async fn delete_stylist(&self, credential: &Credential, id: u64) -> Result<()> {
        self.delete(&format!("/stylists/{}", id), credential).await
    }

    async fn list_reviews(&self, stylist_id: u64) -> Result<Vec<Review>> {
        self.get(&format!("/stylists/{}/reviews", stylist_id), None)
            .await
    }

    async fn create_review(
        &self,
        credential: &Credential,
        request: &ReviewRequest,
    ) -> Result<Review> {
        self.send_json(Method::POST, "/reviews", Some(credential), request)
            .await
    }
}

#[async_trait]
impl BookingApi for ParlorClient {
    async fn list_bookings(
        &self,
        credential: &Credential,
        customer_id: u64,
    ) -> Result<Vec<Booking>> {
        self.get(&format!("/bookings?customer_id={}", customer_id), Some(credential))
            .await
    }

    async fn create_booking(
        &self,
        credential: &Credential,
        request: &BookingRequest,
    ) -> Result<Booking> {
        let envelope: BookingEnvelope = self
            .send_json(Method::POST, "/bookings", Some(credential), request)
            .await?;
        Ok(envelope.into_inner())
    }

    async fn initiate_payment(
        &self,
        credential: &Credential,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse> {
        self.send_json(
            Method::POST,
            "/initiate-mpesa-payment",
            Some(credential),
            request,
        )
        .await
    }
}

#[async_trait]
impl AdminApi for ParlorClient {
    async fn list_users(&self, credential: &Credential) -> Result<Vec<Customer>> {
        self.get("/admin/users", Some(credential)).await
    }

    async fn list_all_bookings(&self, credential: &Credential) -> Result<Vec<AdminBooking>> {
        self.get("/admin/bookings", Some(credential)).await
    }

    async fn analytics_summary(&self, credential: &Credential) -> Result<AnalyticsSummary> {
        self.get("/admin/analytics/summary", Some(credential)).await
    }
}
