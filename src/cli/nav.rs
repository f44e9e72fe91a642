//! Route inspection: open a path the way the browser client would

use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::context::enforce;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::routes::{Denial, Navigation};

/// Bootstrap, navigate to `path`, and report what the guard decided.
///
/// A redirect is an outcome here, not a failure; an unknown path is.
pub async fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::open(opts)?;
    let (_, navigation) = ctx.visit(path).await;

    if let Navigation::NotFound(_) | Navigation::Pending(_) = navigation {
        return enforce(navigation);
    }

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&describe(path, &navigation))?);
        return Ok(());
    }

    match &navigation {
        Navigation::Rendered(route) => {
            println!("{} {}", "✓".green(), route.to_string().bold());
            if route.path() != path {
                println!("  {}", format!("({} is an alias)", path).dimmed());
            }
        }
        Navigation::Redirected { from, to, reason } => {
            println!(
                "{} {} → {}",
                "↪".yellow(),
                from.to_string().dimmed(),
                to.to_string().bold()
            );
            println!("  {}", reason_text(*reason));
        }
        Navigation::Pending(_) | Navigation::NotFound(_) => {}
    }
    Ok(())
}

fn reason_text(reason: Denial) -> &'static str {
    match reason {
        Denial::NotSignedIn => "Sign in required",
        Denial::NotAdmin => "Administrator account required",
    }
}

fn describe(path: &str, navigation: &Navigation) -> serde_json::Value {
    match navigation {
        Navigation::Redirected { from, to, reason } => json!({
            "requested": path,
            "decision": "redirect",
            "from": from.path(),
            "route": to.path(),
            "reason": reason_text(*reason),
        }),
        other => json!({
            "requested": path,
            "decision": "render",
            "route": other.current().map(|r| r.path()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn test_describe_redirect() {
        let nav = Navigation::Redirected {
            from: Route::AdminBookings,
            to: Route::Services,
            reason: Denial::NotAdmin,
        };
        let value = describe("/admin/bookings", &nav);
        assert_eq!(value["decision"], "redirect");
        assert_eq!(value["route"], "/services");
        assert_eq!(value["from"], "/admin/bookings");
    }

    #[test]
    fn test_describe_alias_render() {
        let value = describe("/", &Navigation::Rendered(Route::Services));
        assert_eq!(value["decision"], "render");
        assert_eq!(value["route"], "/services");
    }
}
