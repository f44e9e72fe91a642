//! Client routes and their access requirements
//!
//! Every command renders one [`Route`]. Before it runs, the route's
//! [`RouteRequirement`] is checked against the session by [`guard`].

use std::fmt;

pub mod guard;
pub mod navigator;

pub use guard::{Decision, Denial, guard};
pub use navigator::{Navigation, Navigator};

/// Who may render a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Anyone, signed in or not
    Public,
    /// Any signed-in customer
    Authenticated,
    /// Signed-in administrators only
    Admin,
}

/// Navigation targets of the booking client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, an alias for the services listing
    Home,
    Register,
    Login,
    Services,
    Stylists,
    StylistReviews(u64),
    /// The booking form
    NewBooking,
    MyBookings,
    Payment(u64),
    SubmitReview,
    Account,
    AdminDashboard,
    AdminUsers,
    AdminBookings,
    AdminStylists,
    AdminServices,
}

impl Route {
    /// Static access requirement for this route
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Route::Home
            | Route::Register
            | Route::Login
            | Route::Services
            | Route::Stylists
            | Route::StylistReviews(_) => RouteRequirement::Public,
            Route::NewBooking
            | Route::MyBookings
            | Route::Payment(_)
            | Route::SubmitReview
            | Route::Account => RouteRequirement::Authenticated,
            Route::AdminDashboard
            | Route::AdminUsers
            | Route::AdminBookings
            | Route::AdminStylists
            | Route::AdminServices => RouteRequirement::Admin,
        }
    }

    /// The route `self` immediately redirects to, if it is only an alias
    pub fn alias_of(&self) -> Option<Route> {
        match self {
            Route::Home => Some(Route::Services),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Login => "/login".to_string(),
            Route::Services => "/services".to_string(),
            Route::Stylists => "/stylists".to_string(),
            Route::StylistReviews(id) => format!("/stylists/{}/reviews", id),
            Route::NewBooking => "/bookings".to_string(),
            Route::MyBookings => "/my-bookings".to_string(),
            Route::Payment(id) => format!("/payment/{}", id),
            Route::SubmitReview => "/submit-review".to_string(),
            Route::Account => "/me".to_string(),
            Route::AdminDashboard => "/admin".to_string(),
            Route::AdminUsers => "/admin/users".to_string(),
            Route::AdminBookings => "/admin/bookings".to_string(),
            Route::AdminStylists => "/admin/stylists".to_string(),
            Route::AdminServices => "/admin/services".to_string(),
        }
    }

    /// Parse a path such as `/payment/12?amount=500`. Query strings,
    /// fragments, and trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["register"] => Route::Register,
            ["login"] => Route::Login,
            ["services"] => Route::Services,
            ["stylists"] => Route::Stylists,
            ["stylists", id, "reviews"] => Route::StylistReviews(id.parse().ok()?),
            ["bookings"] => Route::NewBooking,
            ["my-bookings"] => Route::MyBookings,
            ["payment", id] => Route::Payment(id.parse().ok()?),
            ["submit-review"] => Route::SubmitReview,
            ["me"] => Route::Account,
            ["admin"] => Route::AdminDashboard,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "bookings"] => Route::AdminBookings,
            ["admin", "stylists"] => Route::AdminStylists,
            ["admin", "services"] => Route::AdminServices,
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
