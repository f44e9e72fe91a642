//! Service commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, run_list_command};
use crate::cli::{CommandContext, forms};
use crate::client::CatalogApi;
use crate::client::models::{Service, ServiceRequest, ServiceUpdate};
use crate::error::{Result, ValidationError};
use crate::models::ServiceDisplay;
use crate::models::display::common::{NONE, format_price};
use crate::output::detail::{Detail, print_detail};
use crate::routes::Route;

/// Run the service list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Service, ServiceDisplay, _, _>(
        opts,
        Route::Services,
        "services",
        "No services available yet.",
        |client, credential| async move { client.list_services(credential.as_ref()).await },
    )
    .await
}

/// Run the service get command
pub async fn get(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::Services).await?;
    let credential = ctx.store.credential();
    let service = ctx.call(ctx.client.get_service(credential.as_ref(), id)).await?;
    print_detail(&service, &service_detail(&service), ctx.format)
}

/// Run the service create command
pub async fn create(
    opts: &GlobalOptions,
    title: &str,
    description: &str,
    price: f64,
    image_url: Option<String>,
) -> Result<()> {
    let request = ServiceRequest {
        title: forms::title(title)?,
        description: description.trim().to_string(),
        price: forms::price(price)?,
        image_url: image_url.filter(|url| !url.trim().is_empty()),
    };

    let ctx = CommandContext::new(opts, Route::AdminServices).await?;
    let credential = ctx.credential()?;
    let service = ctx.call(ctx.client.create_service(&credential, &request)).await?;

    println!(
        "{} Created service {} (ID {})",
        "✓".green(),
        service.title.bold(),
        service.id
    );
    Ok(())
}

/// Run the service update command
pub async fn update(
    opts: &GlobalOptions,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    price: Option<f64>,
) -> Result<()> {
    let update = ServiceUpdate {
        title: title.as_deref().map(forms::title).transpose()?,
        description,
        price: price.map(forms::price).transpose()?,
    };
    if update.is_empty() {
        return Err(ValidationError::Invalid {
            field: "Update",
            message: "pass at least one of --title, --description, --price".to_string(),
        }
        .into());
    }

    let ctx = CommandContext::new(opts, Route::AdminServices).await?;
    let credential = ctx.credential()?;
    debug!("Updating service {}: {:?}", id, update);
    let service = ctx
        .call(ctx.client.update_service(&credential, id, &update))
        .await?;

    println!("{} Updated service {}", "✓".green(), service.title.bold());
    Ok(())
}

/// Run the service delete command
pub async fn delete(opts: &GlobalOptions, id: u64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, Route::AdminServices).await?;
    let credential = ctx.credential()?;

    if !confirm(&format!("Delete service {}?", id), yes)? {
        return Ok(());
    }
    ctx.call(ctx.client.delete_service(&credential, id)).await?;

    println!("{} Deleted service {}", "✓".green(), id);
    Ok(())
}

fn service_detail(service: &Service) -> Detail {
    let stylists = if service.stylists.is_empty() {
        NONE.to_string()
    } else {
        service
            .stylists
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    Detail::new(&service.title)
        .field("ID", service.id)
        .field("Price", format_price(service.price))
        .optional(
            "Description",
            service.description.as_ref().filter(|d| !d.is_empty()),
        )
        .field("Stylists", stylists)
        .optional("Image", service.image_url.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::StylistRef;

    #[test]
    fn test_service_detail_lists_stylists() {
        let service = Service {
            id: 2,
            title: "Cornrows".to_string(),
            description: None,
            price: 800.0,
            image_url: None,
            stylists: vec![
                StylistRef {
                    id: 1,
                    name: "Wanjiru".to_string(),
                },
                StylistRef {
                    id: 3,
                    name: "Amina".to_string(),
                },
            ],
        };

        let rendered = service_detail(&service).render_plain();
        assert!(rendered.starts_with("Cornrows"));
        assert!(rendered.contains("Kshs 800.00"));
        assert!(rendered.contains("Wanjiru, Amina"));
        assert!(!rendered.contains("Description"));
    }
}
