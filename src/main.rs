use listing_filter::config::{AppConfig, SourceKind};
use listing_filter::filter::ListingFilterEngine;
use listing_filter::services::{HttpListingService, JsonFileListingService, ListingService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    let service: Box<dyn ListingService> = match config.source.kind {
        SourceKind::Http => Box::new(HttpListingService::new(&config.api)?),
        SourceKind::File => Box::new(JsonFileListingService::new(&config.source.path)),
    };

    info!("Loading listings from {}...", service.source_name());
    let listings = service.fetch_listings().await?;

    let mut engine = ListingFilterEngine::new(listings);
    let range = engine.range();
    info!("Price range: {} - {}", range.min, range.max);

    config.filter.stage(engine.pending_mut())?;
    let active = engine.criteria().pending().active_filter_count(range.max);
    info!("Applying {} active filters", active);

    let total = engine.listings().len();
    let matched = engine.apply();
    info!("{} of {} listings match", matched.len(), total);

    for (i, listing) in matched.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.price);
        println!("   {} bed, {} bath", listing.bed_count, listing.bath_count);
        if let Some(location) = &listing.location {
            println!("   Location: {}", location);
        }
        println!(
            "   Available: {} to {}",
            listing.availability.from, listing.availability.to
        );
        let amenities: Vec<String> = listing.amenities.iter().map(|a| format!("{:?}", a)).collect();
        println!("   Amenities: {}", amenities.join(", "));
        println!("   ID: {}", listing.id);
        println!();
    }

    let json = serde_json::to_string_pretty(&matched)?;
    tokio::fs::write(&config.output.path, json).await?;
    info!("Saved filtered listings to {}", config.output.path.display());

    Ok(())
}
