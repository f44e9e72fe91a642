//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Enter the command's route (bootstrap + guard)
//! 2. Fetch the rows with the current credential, if any
//! 3. Convert to display type
//! 4. Print output, or a hint when there is nothing to show

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::ParlorClient;
use crate::error::Result;
use crate::output::Formattable;
use crate::routes::Route;
use crate::session::Credential;

/// Run a list command for `route`.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Service`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Service, ServiceDisplay, _, _>(
///     opts,
///     Route::Services,
///     "services",
///     "No services available yet.",
///     |client, credential| async move { client.list_services(credential.as_ref()).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    route: Route,
    resource_name: &str,
    empty_hint: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(ParlorClient, Option<Credential>) -> Fut,
{
    let ctx = CommandContext::new(opts, route).await?;

    debug!("Fetching {}", resource_name);
    let items = ctx
        .call(fetcher(ctx.client.clone(), ctx.store.credential()))
        .await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    if items.is_empty() && ctx.format != OutputFormat::Json {
        println!("{}", empty_hint);
        return Ok(());
    }

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)
}
