//! Review commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, forms};
use crate::client::CatalogApi;
use crate::client::models::ReviewRequest;
use crate::error::Result;
use crate::models::ReviewDisplay;
use crate::models::display::common::stars;
use crate::output::json::format_json;
use crate::routes::Route;

/// Run the review create command (`/submit-review`)
pub async fn create(opts: &GlobalOptions, stylist_id: u64, rating: u8, comment: &str) -> Result<()> {
    let request = ReviewRequest {
        stylist_id,
        rating: forms::rating(rating)?,
        comment: comment.trim().to_string(),
    };

    let ctx = CommandContext::new(opts, Route::SubmitReview).await?;
    let credential = ctx.credential()?;
    let review = ctx.call(ctx.client.create_review(&credential, &request)).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&ReviewDisplay::from(review))?);
        return Ok(());
    }
    println!(
        "{} Review submitted: {}",
        "✓".green(),
        stars(request.rating).yellow()
    );
    println!("  → See it with 'parlor stylist reviews {}'", stylist_id);
    Ok(())
}
