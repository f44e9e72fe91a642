//! Shared command handler patterns

use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::error::Result;

mod list;

pub use list::run_list_command;

/// Ask before a destructive action unless `--yes` was given
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}
