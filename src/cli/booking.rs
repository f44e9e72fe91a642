//! Booking and payment commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, forms};
use crate::client::models::{Booking, BookingRequest, PaymentRequest, Service, Stylist};
use crate::client::{BookingApi, CatalogApi, ParlorApi};
use crate::error::{Result, ValidationError};
use crate::models::BookingDisplay;
use crate::models::display::common::{format_datetime, format_price};
use crate::output::Formattable;
use crate::output::detail::{Detail, print_detail};
use crate::routes::Route;
use crate::session::{Credential, Principal};

/// Run the booking list command (`/my-bookings`)
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::MyBookings).await?;
    let credential = ctx.credential()?;
    let principal = ctx.principal()?;

    debug!("Fetching bookings for customer {}", principal.id);
    let bookings = ctx
        .call(ctx.client.list_bookings(&credential, principal.id))
        .await?;

    if bookings.is_empty() && ctx.format != OutputFormat::Json {
        println!("You have no bookings yet.");
        println!("  → Run 'parlor booking create' to book an appointment");
        return Ok(());
    }

    let rows: Vec<BookingDisplay> = bookings.into_iter().map(BookingDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the booking create command (`/bookings`)
pub async fn create(
    opts: &GlobalOptions,
    service_id: u64,
    stylist_id: u64,
    appointment_time: &str,
) -> Result<()> {
    let appointment_time = forms::appointment_time(appointment_time)?;

    let ctx = CommandContext::new(opts, Route::NewBooking).await?;
    let credential = ctx.credential()?;

    let request = BookingRequest {
        service_id,
        stylist_id,
        appointment_time,
    };
    let (booking, service, stylist) = ctx.call(book(&ctx.client, &credential, &request)).await?;

    let detail = booking_detail(&booking, &service, &stylist);
    if ctx.format == OutputFormat::Json {
        return print_detail(&booking, &detail, ctx.format);
    }
    println!("{} Booking confirmed\n", "✓".green());
    print_detail(&booking, &detail, ctx.format)?;
    println!(
        "\n  → Pay with 'parlor pay {} --amount {}'",
        booking.id, service.price
    );
    Ok(())
}

/// Fetch the service and stylist together, then create the booking.
///
/// An unknown service or stylist fails before anything is booked.
pub async fn book<A>(
    api: &A,
    credential: &Credential,
    request: &BookingRequest,
) -> Result<(Booking, Service, Stylist)>
where
    A: ParlorApi + ?Sized,
{
    let (service, stylist) = futures::try_join!(
        api.get_service(Some(credential), request.service_id),
        api.get_stylist(Some(credential), request.stylist_id),
    )?;
    debug!("Booking {} with {}", service.title, stylist.name);
    let booking = api.create_booking(credential, request).await?;
    Ok((booking, service, stylist))
}

/// Run the pay command (`/payment/:booking_id`)
pub async fn pay(
    opts: &GlobalOptions,
    booking_id: u64,
    amount: f64,
    phone: Option<String>,
) -> Result<()> {
    let amount = forms::payment_amount(amount)?;

    let ctx = CommandContext::new(opts, Route::Payment(booking_id)).await?;
    let credential = ctx.credential()?;
    let principal = ctx.principal()?;

    let request = payment_request(&principal, booking_id, amount, phone)?;
    let response = ctx.call(ctx.client.initiate_payment(&credential, &request)).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", crate::output::json::format_json(&response)?);
        return Ok(());
    }
    println!(
        "{} Payment of {} requested for booking {}",
        "✓".green(),
        format_price(amount as f64).bold(),
        booking_id
    );
    if let Some(message) = response.message {
        println!("  {}", message);
    }
    println!("  → Approve the M-Pesa prompt on {}", request.phone_number);
    Ok(())
}

/// Payment body; the phone defaults to the signed-in customer's.
fn payment_request(
    principal: &Principal,
    booking_id: u64,
    amount: u64,
    phone: Option<String>,
) -> Result<PaymentRequest> {
    let phone_number = phone
        .or_else(|| principal.phone.clone())
        .ok_or(ValidationError::Required {
            field: "Phone number",
        })?;
    Ok(PaymentRequest {
        amount,
        phone_number: forms::phone(&phone_number)?,
        booking_id,
    })
}

fn booking_detail(booking: &Booking, service: &Service, stylist: &Stylist) -> Detail {
    Detail::new(format!("Booking #{}", booking.id))
        .field("Service", &service.title)
        .field("Stylist", &stylist.name)
        .field("Price", format_price(service.price))
        .field(
            "Appointment",
            format_datetime(booking.appointment_time.as_deref()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockParlorClient;
    use crate::error::{ApiError, Error};
    use crate::session::test_support::{credential, principal};

    fn braids() -> Service {
        Service {
            id: 1,
            title: "Braids".to_string(),
            description: None,
            price: 1500.0,
            image_url: None,
            stylists: Vec::new(),
        }
    }

    fn wanjiru() -> Stylist {
        Stylist {
            id: 2,
            name: "Wanjiru".to_string(),
            bio: None,
            services: Vec::new(),
        }
    }

    fn request(stylist_id: u64) -> BookingRequest {
        BookingRequest {
            service_id: 1,
            stylist_id,
            appointment_time: "2025-03-01T10:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_book_fetches_both_then_creates() {
        let mock = MockParlorClient::new()
            .with_services(vec![braids()])
            .await
            .with_stylists(vec![wanjiru()])
            .await;

        let (booking, service, stylist) =
            book(&mock, &credential("tok"), &request(2)).await.unwrap();

        assert_eq!(service.title, "Braids");
        assert_eq!(stylist.name, "Wanjiru");
        assert_eq!(booking.appointment_time.as_deref(), Some("2025-03-01T10:00:00"));
        assert_eq!(mock.call_counts().await.catalog_reads, 2);
        assert_eq!(mock.booking_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_book_unknown_stylist_books_nothing() {
        let mock = MockParlorClient::new()
            .with_services(vec![braids()])
            .await
            .with_stylists(vec![wanjiru()])
            .await;

        let err = book(&mock, &credential("tok"), &request(99)).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
        assert!(mock.booking_requests().await.is_empty());
        assert_eq!(mock.call_counts().await.bookings, 0);
    }

    #[test]
    fn test_payment_phone_defaults_to_account() {
        let request = payment_request(&principal(1, false), 3, 1500, None).unwrap();
        assert_eq!(request.phone_number, "0712345678");

        let request =
            payment_request(&principal(1, false), 3, 1500, Some("254700000001".to_string()))
                .unwrap();
        assert_eq!(request.phone_number, "254700000001");

        let mut no_phone = principal(1, false);
        no_phone.phone = None;
        assert!(payment_request(&no_phone, 3, 1500, None).is_err());
        assert!(payment_request(&no_phone, 3, 1500, Some("12".to_string())).is_err());
    }

    #[test]
    fn test_booking_detail_names_service_and_stylist() {
        let booking = Booking {
            id: 9,
            appointment_time: Some("2025-03-01T10:00:00".to_string()),
            service: None,
            stylist: None,
            notes: None,
            created_at: None,
        };
        let service = Service {
            id: 1,
            title: "Braids".to_string(),
            description: None,
            price: 1500.0,
            image_url: None,
            stylists: Vec::new(),
        };
        let stylist = Stylist {
            id: 2,
            name: "Wanjiru".to_string(),
            bio: None,
            services: Vec::new(),
        };

        let rendered = booking_detail(&booking, &service, &stylist).render_plain();
        assert!(rendered.starts_with("Booking #9"));
        assert!(rendered.contains("Braids"));
        assert!(rendered.contains("Wanjiru"));
        assert!(rendered.contains("2025-03-01 10:00"));
    }
}
