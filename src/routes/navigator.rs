//! Navigation history with guard enforcement

use super::{Decision, Denial, Route, guard};
use crate::session::{SessionState, SessionStore};

/// Result of a single navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The route is current and may render
    Rendered(Route),
    /// The route is current but waits for the session to settle
    Pending(Route),
    /// The requested route was replaced by another
    Redirected { from: Route, to: Route, reason: Denial },
    /// No such route
    NotFound(String),
}

impl Navigation {
    /// The route left on top of the history stack, if any
    pub fn current(&self) -> Option<&Route> {
        match self {
            Navigation::Rendered(route) | Navigation::Pending(route) => Some(route),
            Navigation::Redirected { to, .. } => Some(to),
            Navigation::NotFound(_) => None,
        }
    }
}

/// History stack where guard redirects replace the current entry.
///
/// A guarded route is never left in history, so going back cannot return
/// to a page the guard refused.
#[derive(Debug, Default)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a path string
    pub fn navigate(&mut self, path: &str, state: &SessionState) -> Navigation {
        match Route::parse(path) {
            Some(route) => self.navigate_to(route, state),
            None => Navigation::NotFound(path.to_string()),
        }
    }

    /// Push `route` and evaluate the guard against `state`
    pub fn navigate_to(&mut self, route: Route, state: &SessionState) -> Navigation {
        self.history.push(route);
        self.evaluate(state)
    }

    /// Wait for the store to leave `Loading`, then decide the pending entry
    pub async fn settle(&mut self, store: &SessionStore) -> Navigation {
        let state = store.settled().await;
        self.evaluate(&state)
    }

    /// Re-evaluate the current entry, following redirects until one renders
    fn evaluate(&mut self, state: &SessionState) -> Navigation {
        let Some(requested) = self.history.last().cloned() else {
            return Navigation::NotFound(String::new());
        };

        let mut current = requested.clone();
        let mut last_redirect = None;
        loop {
            if let Some(target) = current.alias_of() {
                self.replace(target.clone());
                current = target;
                continue;
            }

            match guard(current.requirement(), state) {
                Decision::Render => break,
                Decision::Placeholder => {
                    return Navigation::Pending(current);
                }
                Decision::Redirect { to, reason } => {
                    // Redirect targets are public, so this settles in one step
                    if to == current {
                        break;
                    }
                    self.replace(to.clone());
                    last_redirect = Some(reason);
                    current = to;
                }
            }
        }

        match last_redirect {
            Some(reason) => Navigation::Redirected {
                from: requested,
                to: current,
                reason,
            },
            None => Navigation::Rendered(current),
        }
    }

    fn replace(&mut self, route: Route) {
        self.history.pop();
        self.history.push(route);
    }

    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    /// Pop the current entry and return the one beneath it
    pub fn back(&mut self) -> Option<&Route> {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.history.last()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}
