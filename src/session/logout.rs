//! Sign-out

use super::SessionStore;
use crate::error::Result;
use crate::routes::Route;

/// Where the client lands after signing out
pub const LANDING_ROUTE: Route = Route::Login;

/// Clear the session and return the public landing route.
///
/// Safe to call repeatedly; signing out with nothing stored succeeds.
pub fn logout(store: &SessionStore) -> Result<Route> {
    store.clear()?;
    Ok(LANDING_ROUTE)
}
