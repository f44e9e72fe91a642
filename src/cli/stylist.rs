//! Stylist commands, including the public reviews page

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, run_list_command};
use crate::cli::{CommandContext, OutputFormat, forms};
use crate::client::CatalogApi;
use crate::client::models::{Review, Stylist, StylistRequest, StylistUpdate};
use crate::error::{Result, ValidationError};
use crate::models::display::common::{NONE, stars};
use crate::models::{ReviewDisplay, StylistDisplay};
use crate::output::Formattable;
use crate::output::detail::{Detail, print_detail};
use crate::routes::Route;

/// Run the stylist list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Stylist, StylistDisplay, _, _>(
        opts,
        Route::Stylists,
        "stylists",
        "No stylists yet.",
        |client, credential| async move { client.list_stylists(credential.as_ref()).await },
    )
    .await
}

/// Run the stylist get command
pub async fn get(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::Stylists).await?;
    let credential = ctx.store.credential();
    let stylist = ctx.call(ctx.client.get_stylist(credential.as_ref(), id)).await?;
    print_detail(&stylist, &stylist_detail(&stylist), ctx.format)
}

/// Run the stylist reviews command (`/stylists/:id/reviews`)
pub async fn reviews(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::StylistReviews(id)).await?;
    let reviews = ctx.call(ctx.client.list_reviews(id)).await?;
    let summary = rating_summary(&reviews);

    if ctx.format == OutputFormat::Json {
        let rows: Vec<ReviewDisplay> = reviews.into_iter().map(ReviewDisplay::from).collect();
        return rows.print(ctx.format);
    }
    let Some(summary) = summary else {
        println!("No reviews yet for this stylist.");
        return Ok(());
    };

    let rows: Vec<ReviewDisplay> = reviews.into_iter().map(ReviewDisplay::from).collect();
    rows.print(ctx.format)?;
    println!("\n{}", summary.bold());
    Ok(())
}

/// Run the stylist create command
pub async fn create(opts: &GlobalOptions, name: &str, bio: &str, services: Vec<u64>) -> Result<()> {
    let request = StylistRequest {
        name: forms::name(name)?,
        bio: bio.trim().to_string(),
        service_ids: services,
    };

    let ctx = CommandContext::new(opts, Route::AdminStylists).await?;
    let credential = ctx.credential()?;
    let stylist = ctx.call(ctx.client.create_stylist(&credential, &request)).await?;

    println!(
        "{} Added stylist {} (ID {})",
        "✓".green(),
        stylist.name.bold(),
        stylist.id
    );
    Ok(())
}

/// Run the stylist update command
pub async fn update(
    opts: &GlobalOptions,
    id: u64,
    name: Option<String>,
    bio: Option<String>,
    services: Option<Vec<u64>>,
) -> Result<()> {
    let update = StylistUpdate {
        name: name.as_deref().map(forms::name).transpose()?,
        bio,
        service_ids: services,
    };
    if update.is_empty() {
        return Err(ValidationError::Invalid {
            field: "Update",
            message: "pass at least one of --name, --bio, --service".to_string(),
        }
        .into());
    }

    let ctx = CommandContext::new(opts, Route::AdminStylists).await?;
    let credential = ctx.credential()?;
    let stylist = ctx
        .call(ctx.client.update_stylist(&credential, id, &update))
        .await?;

    println!("{} Updated stylist {}", "✓".green(), stylist.name.bold());
    Ok(())
}

/// Run the stylist delete command
pub async fn delete(opts: &GlobalOptions, id: u64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::AdminStylists).await?;
    let credential = ctx.credential()?;

    if !confirm(&format!("Delete stylist {}?", id), yes)? {
        return Ok(());
    }
    ctx.call(ctx.client.delete_stylist(&credential, id)).await?;

    println!("{} Deleted stylist {}", "✓".green(), id);
    Ok(())
}

fn stylist_detail(stylist: &Stylist) -> Detail {
    let titles = stylist.service_titles();
    let services = if titles.is_empty() {
        NONE.to_string()
    } else {
        titles.join(", ")
    };

    Detail::new(&stylist.name)
        .field("ID", stylist.id)
        .optional("Bio", stylist.bio.as_ref().filter(|b| !b.is_empty()))
        .field("Services", services)
}

/// Average rating line for a review listing, e.g. `★★★★☆ 4.2 (5 reviews)`
fn rating_summary(reviews: &[Review]) -> Option<String> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let average = f64::from(total) / reviews.len() as f64;
    Some(format!(
        "{} {:.1} ({} review{})",
        stars(average.round() as u8),
        average,
        reviews.len(),
        if reviews.len() == 1 { "" } else { "s" }
    ))
}
