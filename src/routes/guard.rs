//! Route guard

use super::{Route, RouteRequirement};
use crate::error::AccessError;
use crate::session::SessionState;

/// Why a navigation was redirected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotSignedIn,
    NotAdmin,
}

impl Denial {
    /// The user-facing error for a denied route
    pub fn into_error(self, route: &Route) -> AccessError {
        match self {
            Denial::NotSignedIn => AccessError::LoginRequired {
                route: route.path(),
            },
            Denial::NotAdmin => AccessError::AdminRequired {
                route: route.path(),
            },
        }
    }
}

/// Outcome of evaluating a route against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render,
    /// Session is still loading; show a placeholder and decide again later
    Placeholder,
    /// Replace the navigation with `to`
    Redirect { to: Route, reason: Denial },
}

/// Decide whether a route with `requirement` may render for `state`.
///
/// Pure: reads the state snapshot and nothing else.
pub fn guard(requirement: RouteRequirement, state: &SessionState) -> Decision {
    if requirement == RouteRequirement::Public {
        return Decision::Render;
    }

    let principal = match state {
        SessionState::Loading => return Decision::Placeholder,
        SessionState::Anonymous => {
            return Decision::Redirect {
                to: Route::Login,
                reason: Denial::NotSignedIn,
            };
        }
        SessionState::Authenticated(session) => session.principal(),
    };

    match requirement {
        RouteRequirement::Admin if !principal.is_admin => Decision::Redirect {
            to: Route::Services,
            reason: Denial::NotAdmin,
        },
        _ => Decision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::authenticated;

    const ALL_REQUIREMENTS: [RouteRequirement; 3] = [
        RouteRequirement::Public,
        RouteRequirement::Authenticated,
        RouteRequirement::Admin,
    ];

    #[test]
    fn test_public_routes_always_render() {
        for state in [
            SessionState::Loading,
            SessionState::Anonymous,
            authenticated("abc", false),
            authenticated("abc", true),
        ] {
            assert_eq!(guard(RouteRequirement::Public, &state), Decision::Render);
        }
    }

    #[test]
    fn test_loading_shows_placeholder_for_protected_routes() {
        assert_eq!(
            guard(RouteRequirement::Authenticated, &SessionState::Loading),
            Decision::Placeholder
        );
        assert_eq!(
            guard(RouteRequirement::Admin, &SessionState::Loading),
            Decision::Placeholder
        );
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        for requirement in [RouteRequirement::Authenticated, RouteRequirement::Admin] {
            assert_eq!(
                guard(requirement, &SessionState::Anonymous),
                Decision::Redirect {
                    to: Route::Login,
                    reason: Denial::NotSignedIn,
                }
            );
        }
    }

    #[test]
    fn test_customer_cannot_render_admin_routes() {
        let state = authenticated("abc", false);
        assert_eq!(
            guard(RouteRequirement::Authenticated, &state),
            Decision::Render
        );
        assert_eq!(
            guard(RouteRequirement::Admin, &state),
            Decision::Redirect {
                to: Route::Services,
                reason: Denial::NotAdmin,
            }
        );
    }

    #[test]
    fn test_admin_renders_everything() {
        let state = authenticated("abc", true);
        for requirement in ALL_REQUIREMENTS {
            assert_eq!(guard(requirement, &state), Decision::Render);
        }
    }

    #[test]
    fn test_decision_follows_current_state_only() {
        // An earlier admin session grants nothing once the state changes
        assert_eq!(
            guard(RouteRequirement::Admin, &authenticated("abc", true)),
            Decision::Render
        );
        assert_ne!(
            guard(RouteRequirement::Admin, &authenticated("def", false)),
            Decision::Render
        );
        assert_ne!(
            guard(RouteRequirement::Admin, &SessionState::Anonymous),
            Decision::Render
        );
    }

    #[test]
    fn test_denial_errors() {
        let err = Denial::NotSignedIn.into_error(&Route::MyBookings);
        assert_eq!(
            err,
            AccessError::LoginRequired {
                route: "/my-bookings".to_string()
            }
        );

        let err = Denial::NotAdmin.into_error(&Route::AdminDashboard);
        assert_eq!(
            err,
            AccessError::AdminRequired {
                route: "/admin".to_string()
            }
        );
    }
}
