use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Source of listings for the filter engine.
/// Implementations are handed to the host explicitly rather than shared globally.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Fetch the full listing set
    async fn fetch_listings(&self) -> Result<Vec<Listing>>;

    /// Fetch one listing, `None` if the source has no such id
    async fn fetch_listing_by_id(&self, id: &str) -> Result<Option<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
