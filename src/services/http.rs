use crate::config::ApiConfig;
use crate::models::Listing;
use crate::services::traits::ListingService;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listing service backed by the marketplace REST API
pub struct HttpListingService {
    client: Client,
    base_url: Url,
}

impl HttpListingService {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot hold a path: {}", config.base_url);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn listings_url(&self) -> Result<Url> {
        self.endpoint(&["listings"])
    }

    fn listing_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&["listings", id])
    }

    // Segments are percent-encoded, so an id can never escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot hold a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl ListingService for HttpListingService {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let url = self.listings_url()?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let listings: Vec<Listing> = response
            .json()
            .await
            .context("Failed to decode listings response")?;

        info!("Fetched {} listings from {}", listings.len(), self.base_url);
        Ok(listings)
    }

    async fn fetch_listing_by_id(&self, id: &str) -> Result<Option<Listing>> {
        let url = self.listing_url(id)?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch listing {}", id))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listing {}: {}", id, response.status());
        }

        let listing = response
            .json()
            .await
            .with_context(|| format!("Failed to decode listing {}", id))?;
        Ok(Some(listing))
    }

    fn source_name(&self) -> &'static str {
        "HTTP API"
    }
}
