//! Account commands: register, login, logout, whoami

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};
use log::debug;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, forms};
use crate::client::models::{LoginRequest, RegisterRequest};
use crate::error::Result;
use crate::output::detail::{Detail, print_detail};
use crate::routes::Route;
use crate::session::{self, Principal};

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: &str,
    phone: &str,
    password: Option<String>,
    admin: bool,
) -> Result<()> {
    let name = forms::name(name)?;
    let phone = forms::phone(phone)?;
    let password = match password {
        Some(password) => password,
        None => prompt_password(true)?,
    };
    let password = forms::new_password(&password)?;

    let ctx = CommandContext::new(opts, Route::Register).await?;
    let request = RegisterRequest {
        name,
        phone,
        password,
        is_admin: admin,
    };
    debug!("Registering {:?}", request);

    let principal = session::register(&ctx.store, &ctx.client, &request).await?;
    signed_in(&principal, ctx.format, "Account created")
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, phone: &str, password: Option<String>) -> Result<()> {
    let phone = forms::phone(phone)?;
    let password = match password {
        Some(password) => password,
        None => prompt_password(false)?,
    };
    let password = forms::password(&password)?;

    let ctx = CommandContext::new(opts, Route::Login).await?;
    let principal = session::login(&ctx.store, &ctx.client, &LoginRequest { phone, password }).await?;
    signed_in(&principal, ctx.format, "Signed in")
}

/// Run the logout command. Never contacts the server.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::open(opts)?;
    let landing = session::logout(&ctx.store)?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json!({ "signed_out": true, "route": landing.path() }));
    } else {
        println!("{} Signed out", "✓".green());
        println!("  → Run 'parlor login' to sign in again");
    }
    Ok(())
}

/// Run the whoami command (the `/me` page)
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::Account).await?;
    let principal = ctx.principal()?;
    print_detail(&principal, &profile_detail(&principal), ctx.format)
}

fn profile_detail(principal: &Principal) -> Detail {
    Detail::new("Your profile")
        .field("ID", principal.id)
        .field("Name", &principal.name)
        .optional("Phone", principal.phone.as_ref())
        .field("Role", if principal.is_admin { "Administrator" } else { "Customer" })
}

fn signed_in(principal: &Principal, format: OutputFormat, action: &str) -> Result<()> {
    if format == OutputFormat::Json {
        return print_detail(principal, &profile_detail(principal), format);
    }
    println!("{} {} as {}", "✓".green(), action, principal.name.bold());
    if principal.is_admin {
        println!("  → Run 'parlor admin dashboard' for the admin views");
    }
    Ok(())
}

fn prompt_password(confirm: bool) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::principal;

    #[test]
    fn test_profile_detail_names_role() {
        let rendered = profile_detail(&principal(1, true)).render_plain();
        assert!(rendered.contains("Administrator"));
        assert!(rendered.contains("0712345678"));

        let rendered = profile_detail(&principal(2, false)).render_plain();
        assert!(rendered.contains("Customer"));
    }
}
