use anyhow::{Context, Result};
use clap::Parser;
use property_catalog::catalog::detail_path;
use property_catalog::config::CliConfig;
use property_catalog::format::{format_area, format_price, rent_suffix, transaction_label};
use property_catalog::{CatalogSource, HttpSource, JsonFileSource, Locale};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::parse();

    // Initialize logging
    let default_filter = if config.verbose {
        "property_catalog=debug,info"
    } else {
        "property_catalog=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let source: Box<dyn CatalogSource> = match &config.catalog_url {
        Some(url) => Box::new(HttpSource::new(url.as_str()).context("Failed to create HTTP client")?),
        None => Box::new(JsonFileSource::new(&config.catalog)),
    };

    // A catalog that fails validation stops the process here
    let catalog = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalog from {} source", source.source_name()))?;
    info!(
        "Loaded {} properties from {} source at {}",
        catalog.len(),
        source.source_name(),
        catalog.loaded_at().to_rfc3339()
    );

    let locale = config.locale();
    let criteria = config.criteria();
    info!("Listing {} with {:?}", criteria.listing_path(locale), criteria);

    let properties = catalog.query(&criteria);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    if properties.is_empty() {
        match locale {
            Locale::El => println!("Δεν βρέθηκαν ακίνητα με αυτά τα κριτήρια"),
            Locale::En => println!("No properties found with these criteria"),
        }
        return Ok(());
    }

    for (i, property) in properties.iter().enumerate() {
        let featured = if property.featured { " ★" } else { "" };
        println!("{}. {}{}", i + 1, property.title.get(locale), featured);
        println!(
            "   {} {}{}",
            transaction_label(property.transaction_type, locale),
            format_price(property.price, locale),
            rent_suffix(property.transaction_type, locale)
        );
        println!("   {}", property.location.get(locale));
        println!(
            "   {} / {} / {}",
            property.specifications.bedrooms,
            property.specifications.bathrooms,
            format_area(property.specifications.area, locale)
        );
        println!("   {}", detail_path(locale, &property.slug));
        println!();
    }

    info!("{} of {} properties shown", properties.len(), catalog.len());

    Ok(())
}
