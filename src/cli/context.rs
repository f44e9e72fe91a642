//! Command execution context
//!
//! Loads config, opens the session store, validates the stored session, and
//! enforces the route guard before a command handler runs.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::ParlorClient;
use crate::config::Config;
use crate::error::{AccessError, Error, Result};
use crate::routes::{Navigation, Navigator, Route};
use crate::session::{
    BootstrapOutcome, Credential, FileStorage, Principal, SessionStore, bootstrap,
};

/// Context for command execution containing config, client, and session.
pub struct CommandContext {
    pub config: Config,
    /// Where the config file lives; the session document sits beside it
    pub config_path: PathBuf,
    pub client: ParlorClient,
    pub store: SessionStore,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Open the context and enter `route`.
    ///
    /// Bootstrap runs once. The guard decision for a protected route waits
    /// for it, showing a spinner meanwhile. A redirect is returned as an
    /// [`AccessError`].
    pub async fn new(opts: &GlobalOptions, route: Route) -> Result<Self> {
        let ctx = Self::open(opts)?;
        let (_, navigation) = ctx.visit(&route.path()).await;
        enforce(navigation)?;
        Ok(ctx)
    }

    /// Load config and open the store without validating the session.
    ///
    /// The store stays `Loading` until [`visit`](Self::visit) settles it.
    pub fn open(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        };

        let format = opts.resolve_format(&config);
        let host = config.api_host(opts.api_host_ref());
        debug!("Using API host {}", host);
        let client = ParlorClient::with_host(host)?;
        let store = SessionStore::new(FileStorage::new(Config::session_path(&config_path)));

        Ok(Self {
            config,
            config_path,
            client,
            store,
            format,
        })
    }

    /// Bootstrap the session and navigate to `path` concurrently.
    ///
    /// The navigation is decided as soon as the route allows it; protected
    /// routes stay pending until bootstrap settles the store.
    pub async fn visit(&self, path: &str) -> (BootstrapOutcome, Navigation) {
        let mut navigator = Navigator::new();
        let first = navigator.navigate(path, &self.store.state());

        let spinner = match first {
            Navigation::Pending(_) => Some(self.spinner("Checking your session...")),
            _ => None,
        };

        let (outcome, navigation) = tokio::join!(bootstrap(&self.store, &self.client), async {
            match first {
                Navigation::Pending(_) => navigator.settle(&self.store).await,
                decided => decided,
            }
        });

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        debug!("Bootstrap: {:?}; navigation: {:?}", outcome, navigation);
        (outcome, navigation)
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        if self.format == OutputFormat::Json {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Credential of the signed-in customer
    pub fn credential(&self) -> Result<Credential> {
        self.store.credential().ok_or_else(|| self.login_required())
    }

    pub fn principal(&self) -> Result<Principal> {
        self.store.principal().ok_or_else(|| self.login_required())
    }

    fn login_required(&self) -> Error {
        AccessError::LoginRequired {
            route: "this page".to_string(),
        }
        .into()
    }

    /// Await an authenticated request. A rejected credential ends the
    /// session so the next protected navigation goes to the login page.
    pub async fn call<T>(&self, request: impl Future<Output = Result<T>>) -> Result<T> {
        let result = request.await;
        if let Err(e) = &result {
            if e.is_unauthorized() {
                warn!("Credential rejected by server; signing out");
                if let Err(clear_err) = self.store.clear() {
                    warn!("Failed to remove stored session: {}", clear_err);
                }
            }
        }
        result
    }
}

/// Turn a guard outcome into the command's result.
pub fn enforce(navigation: Navigation) -> Result<()> {
    match navigation {
        Navigation::Rendered(_) => Ok(()),
        Navigation::Redirected { from, reason, .. } => Err(reason.into_error(&from).into()),
        Navigation::Pending(route) => Err(Error::Other(format!(
            "Session did not settle before opening {}",
            route
        ))),
        Navigation::NotFound(path) => Err(AccessError::UnknownRoute(path).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::routes::Denial;
    use crate::session::test_support::{credential, principal};
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            config: Some(dir.path().join("config.yaml").display().to_string()),
            // Nothing listens here; bootstrap must not need the network
            api_host: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_public_route_without_session_makes_no_request() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::open(&options(&dir)).unwrap();

        let (outcome, navigation) = ctx.visit("/services").await;

        assert_eq!(outcome, BootstrapOutcome::NoSession);
        assert_eq!(navigation, Navigation::Rendered(Route::Services));
    }

    #[tokio::test]
    async fn test_protected_route_without_session_requires_login() {
        let dir = TempDir::new().unwrap();
        let err = CommandContext::new(&options(&dir), Route::MyBookings)
            .await
            .err()
            .unwrap();

        assert!(matches!(
            err,
            Error::Access(AccessError::LoginRequired { ref route }) if route == "/my-bookings"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_clears_stored_session() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir);
        {
            let ctx = CommandContext::open(&opts).unwrap();
            ctx.store.set(principal(1, false), credential("abc")).unwrap();
        }

        let ctx = CommandContext::open(&opts).unwrap();
        let (outcome, navigation) = ctx.visit("/my-bookings").await;

        assert!(matches!(outcome, BootstrapOutcome::Cleared(_)));
        assert_eq!(navigation.current(), Some(&Route::Login));
        assert!(!dir.path().join("session.yaml").exists());
    }

    #[tokio::test]
    async fn test_call_clears_session_on_unauthorized() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::open(&options(&dir)).unwrap();
        ctx.store.set(principal(1, false), credential("abc")).unwrap();

        let result: Result<()> = ctx.call(async { Err(ApiError::Unauthorized.into()) }).await;

        assert!(result.unwrap_err().is_unauthorized());
        assert!(ctx.store.credential().is_none());
        assert!(ctx.principal().is_err());
    }

    #[tokio::test]
    async fn test_call_keeps_session_on_validation_error() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::open(&options(&dir)).unwrap();
        ctx.store.set(principal(1, false), credential("abc")).unwrap();

        let result: Result<()> = ctx
            .call(async { Err(ApiError::BadRequest("Invalid datetime format".to_string()).into()) })
            .await;

        assert!(result.is_err());
        assert_eq!(ctx.credential().unwrap(), credential("abc"));
    }

    #[test]
    fn test_enforce_maps_denials() {
        let denied = Navigation::Redirected {
            from: Route::AdminUsers,
            to: Route::Services,
            reason: Denial::NotAdmin,
        };
        assert!(matches!(
            enforce(denied),
            Err(Error::Access(AccessError::AdminRequired { .. }))
        ));
        assert!(matches!(
            enforce(Navigation::NotFound("/nope".to_string())),
            Err(Error::Access(AccessError::UnknownRoute(_)))
        ));
        assert!(enforce(Navigation::Rendered(Route::Login)).is_ok());
    }
}
