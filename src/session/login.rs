//! Sign-in and registration

use log::debug;

use super::{Credential, Principal, SessionStore};
use crate::client::AuthApi;
use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::{ApiError, Result};

/// Exchange a phone and password for a session.
///
/// The store is only written once the server has returned both a customer
/// and a usable token; a rejected login leaves any current session alone.
pub async fn login<A>(store: &SessionStore, api: &A, request: &LoginRequest) -> Result<Principal>
where
    A: AuthApi + ?Sized,
{
    let response = api.login(request).await?;
    start(store, response)
}

/// Create an account, then sign in with the same phone and password.
pub async fn register<A>(
    store: &SessionStore,
    api: &A,
    request: &RegisterRequest,
) -> Result<Principal>
where
    A: AuthApi + ?Sized,
{
    let created = api.register(request).await?;
    debug!("Registered customer {}", created.customer.id);
    login(store, api, &LoginRequest::from(request)).await
}

fn start(store: &SessionStore, response: AuthResponse) -> Result<Principal> {
    let credential = response
        .access_token
        .and_then(Credential::new)
        .ok_or_else(|| ApiError::InvalidResponse("login response has no access_token".to_string()))?;

    let principal = Principal::from(response.customer);
    store.set(principal.clone(), credential)?;
    Ok(principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockParlorClient;
    use crate::client::models::Customer;
    use crate::error::Error;
    use crate::session::test_support::{credential, principal};
    use crate::session::{MemoryStorage, SessionState};

    fn customer(is_admin: bool) -> Customer {
        Customer {
            id: 4,
            name: "Achieng".to_string(),
            phone: Some("0712345678".to_string()),
            is_admin,
        }
    }

    fn issued(token: Option<&str>) -> AuthResponse {
        AuthResponse {
            customer: customer(false),
            access_token: token.map(str::to_string),
        }
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            phone: "0712345678".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_sets_paired_session() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        let mock = MockParlorClient::new().with_login(issued(Some("tok"))).await;

        let signed_in = login(&store, &mock, &login_request()).await.unwrap();

        assert_eq!(signed_in.id, 4);
        assert_eq!(store.credential().unwrap().as_str(), "tok");
        assert_eq!(storage.get("access_token").as_deref(), Some("tok"));
        assert!(storage.get("customer").unwrap().contains("Achieng"));
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_existing_session() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set(principal(1, false), credential("old")).unwrap();
        let mock = MockParlorClient::new();

        let err = login(&store, &mock, &login_request()).await.unwrap_err();

        assert!(err.to_string().contains("Invalid credentials"));
        assert_eq!(store.credential().unwrap().as_str(), "old");
    }

    #[tokio::test]
    async fn test_login_without_token_is_invalid_response() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        let mock = MockParlorClient::new().with_login(issued(None)).await;

        let err = login(&store, &mock, &login_request()).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
        assert!(storage.is_empty());
        assert!(!matches!(store.state(), SessionState::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = SessionStore::new(MemoryStorage::new());
        let mock = MockParlorClient::new()
            .with_register(issued(None))
            .await
            .with_login(issued(Some("fresh")))
            .await;
        let request = RegisterRequest {
            name: "Achieng".to_string(),
            phone: "0712345678".to_string(),
            password: "secret".to_string(),
            is_admin: false,
        };

        register(&store, &mock, &request).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.register, 1);
        assert_eq!(counts.login, 1);
        assert_eq!(store.credential().unwrap().as_str(), "fresh");
    }

    #[tokio::test]
    async fn test_failed_registration_skips_login() {
        let store = SessionStore::new(MemoryStorage::new());
        let mock = MockParlorClient::new();
        let request = RegisterRequest {
            name: "Achieng".to_string(),
            phone: "0712345678".to_string(),
            password: "secret".to_string(),
            is_admin: false,
        };

        let err = register(&store, &mock, &request).await.unwrap_err();

        assert!(err.to_string().contains("Phone already registered"));
        assert_eq!(mock.call_counts().await.login, 0);
    }
}
