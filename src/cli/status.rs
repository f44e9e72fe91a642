//! Status command implementation

use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;

/// Show configuration and the stored session without contacting the server.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::open(opts)?;
    let host = ctx.client.base_url().to_string();
    let stored = ctx.store.persisted();

    if ctx.format == OutputFormat::Json {
        let session = match &stored {
            Ok(Some(persisted)) => json!({ "state": "stored", "customer": persisted.principal }),
            Ok(None) => json!({ "state": "none" }),
            Err(e) => json!({ "state": "unreadable", "error": e.to_string() }),
        };
        let status = json!({
            "config_file": ctx.config_path.display().to_string(),
            "session_file": ctx.store.location(),
            "api_host": host,
            "session": session,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}\n", "Parlor Status".bold());
    let config_note = if ctx.config_path.exists() {
        String::new()
    } else {
        format!(" {}", "(not created yet)".dimmed())
    };
    println!(
        "Config file: {}{}",
        ctx.config_path.display().to_string().cyan(),
        config_note
    );
    println!("Session file: {}", ctx.store.location().cyan());
    println!("API host: {}", host.cyan());
    println!();

    match stored {
        Ok(Some(persisted)) => {
            let principal = persisted.principal;
            let role = if principal.is_admin { "admin" } else { "customer" };
            println!(
                "{} Session stored for {} ({} #{})",
                "✓".green(),
                principal.name.bold(),
                role,
                principal.id
            );
            println!(
                "  {}",
                "Verified with the server on the next command".dimmed()
            );
        }
        Ok(None) => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run 'parlor login' to sign in");
        }
        Err(e) => {
            println!("{} {}", "⚠".yellow(), e);
            println!("  → It will be cleared on the next command; run 'parlor login' afterwards");
        }
    }

    Ok(())
}
