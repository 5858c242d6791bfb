use crate::models::Listing;
use crate::services::traits::ListingService;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Listing service reading a JSON array of listings from disk
pub struct JsonFileListingService {
    path: PathBuf,
}

impl JsonFileListingService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingService for JsonFileListingService {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    async fn fetch_listing_by_id(&self, id: &str) -> Result<Option<Listing>> {
        let listings = self.fetch_listings().await?;
        Ok(listings.into_iter().find(|l| l.id == id))
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {
            "id": "loft-1", "title": "Loft", "price": 1000,
            "bedCount": 2, "bathCount": 1, "amenities": ["WIFI", "PARKING"],
            "availability": { "from": "2026-03-01", "to": "2026-08-31" }
        },
        {
            "id": "villa-2", "title": "Villa", "price": 2000,
            "bedCount": 3, "bathCount": 2, "amenities": ["WIFI", "GYM", "POOL"],
            "availability": { "from": "2026-03-01", "to": "2026-08-31" }
        }
    ]"#;

    fn fixture_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_fetch_listings_preserves_order() {
        let file = fixture_file();
        let service = JsonFileListingService::new(file.path());

        let listings = service.fetch_listings().await.unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["loft-1", "villa-2"]);
    }

    #[tokio::test]
    async fn test_fetch_listing_by_id() {
        let file = fixture_file();
        let service = JsonFileListingService::new(file.path());

        let found = service.fetch_listing_by_id("villa-2").await.unwrap();
        assert_eq!(found.map(|l| l.price), Some(2000));
        assert!(service.fetch_listing_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonFileListingService::new(dir.path().join("nope.json"));
        assert!(service.fetch_listings().await.is_err());
    }
}
