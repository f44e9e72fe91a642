//! Administrator views

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AdminApi;
use crate::client::models::{AdminBooking, AnalyticsSummary, Customer};
use crate::error::{ApiError, Result};
use crate::models::display::common::format_price;
use crate::models::{AdminBookingDisplay, BookingCountDisplay, CustomerDisplay};
use crate::output::Formattable;
use crate::output::detail::Detail;
use crate::output::json::format_json;
use crate::routes::Route;

/// Run the admin dashboard command (`/admin`)
pub async fn dashboard(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::AdminDashboard).await?;
    let credential = ctx.credential()?;
    let analytics = ctx.call(ctx.client.analytics_summary(&credential)).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&analytics)?);
        return Ok(());
    }

    let totals = totals_detail(&analytics);
    let rendered = match ctx.format {
        OutputFormat::Pretty => totals.render_pretty(),
        _ => totals.render_plain(),
    };
    println!("{}\n", rendered);

    let per_service: Vec<BookingCountDisplay> = analytics
        .bookings_per_service
        .into_iter()
        .map(BookingCountDisplay::from)
        .collect();
    println!("{}", "Bookings per service".bold());
    per_service.print(ctx.format)?;

    let per_stylist: Vec<BookingCountDisplay> = analytics
        .bookings_per_stylist
        .into_iter()
        .map(BookingCountDisplay::from)
        .collect();
    println!("\n{}", "Bookings per stylist".bold());
    per_stylist.print(ctx.format)
}

/// Run the admin users command (`/admin/users`)
pub async fn users(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Customer, CustomerDisplay, _, _>(
        opts,
        Route::AdminUsers,
        "users",
        "No registered users.",
        |client, credential| async move {
            let credential = credential.ok_or(ApiError::Unauthorized)?;
            client.list_users(&credential).await
        },
    )
    .await
}

/// Run the admin bookings command (`/admin/bookings`)
pub async fn bookings(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<AdminBooking, AdminBookingDisplay, _, _>(
        opts,
        Route::AdminBookings,
        "bookings",
        "No bookings found.",
        |client, credential| async move {
            let credential = credential.ok_or(ApiError::Unauthorized)?;
            client.list_all_bookings(&credential).await
        },
    )
    .await
}

fn totals_detail(analytics: &AnalyticsSummary) -> Detail {
    let totals = &analytics.summary;
    Detail::new("Admin dashboard")
        .field("Users", totals.total_users)
        .field("Bookings", totals.total_bookings)
        .field("Revenue", format_price(totals.total_revenue))
        .field("Stylists", totals.total_stylists)
}
