//! One-time validation of a persisted session at startup

use log::{debug, warn};

use super::{Principal, SessionStore};
use crate::client::AuthApi;

/// What bootstrap did with the stored session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Nothing was stored; no request was made
    NoSession,
    /// The stored credential was confirmed by the server
    Restored(Principal),
    /// The stored session was discarded, with the reason
    Cleared(String),
}

/// Settle the store from persistent storage.
///
/// With nothing stored this completes without a request. Otherwise the
/// stored credential is checked against `GET /me`: the confirmed principal
/// replaces the cached one, and any failure clears the session. Unreadable
/// storage is cleared without a request.
pub async fn bootstrap<A>(store: &SessionStore, api: &A) -> BootstrapOutcome
where
    A: AuthApi + ?Sized,
{
    let persisted = match store.persisted() {
        Ok(Some(persisted)) => persisted,
        Ok(None) => {
            debug!("No stored session");
            store.settle_anonymous();
            return BootstrapOutcome::NoSession;
        }
        Err(e) => return discard(store, e.to_string()),
    };

    debug!(
        "Validating stored session for customer {}",
        persisted.principal.id
    );

    match api.me(&persisted.credential).await {
        Ok(customer) => {
            let principal = Principal::from(customer);
            match store.set(principal.clone(), persisted.credential) {
                Ok(()) => BootstrapOutcome::Restored(principal),
                Err(e) => discard(store, format!("could not save confirmed session: {}", e)),
            }
        }
        Err(e) => discard(store, e.to_string()),
    }
}

fn discard(store: &SessionStore, reason: String) -> BootstrapOutcome {
    warn!("Discarding stored session: {}", reason);
    if let Err(e) = store.clear() {
        warn!("Failed to remove stored session: {}", e);
    }
    BootstrapOutcome::Cleared(reason)
}
