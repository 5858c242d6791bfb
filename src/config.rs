//! Runtime configuration.
//!
//! Layered with figment: built-in defaults, then `listing-filter.toml`, then
//! `LISTING_FILTER_`-prefixed environment variables (`__` separates nested
//! keys, e.g. `LISTING_FILTER_API__BASE_URL`).

use anyhow::Result;
use chrono::NaiveDate;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::filter::{CriteriaBuilder, DateRange, FilterError};
use crate::models::Amenity;

pub const CONFIG_FILE: &str = "listing-filter.toml";
const ENV_PREFIX: &str = "LISTING_FILTER_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }
}

/// Listings REST API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
            user_agent: concat!("listing-filter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    File,
}

/// Where listings come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// JSON file to read when `kind = "file"`
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Http,
            path: PathBuf::from("listings.json"),
        }
    }
}

/// Initial filter selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Price ceiling, clamped into the derived range. Defaults to the ceiling.
    pub max_price: Option<i64>,
    pub bed_count: Option<u32>,
    pub bath_count: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
}

impl FilterConfig {
    /// Stage this selection on `builder`. Nothing is applied.
    pub fn stage(&self, builder: &mut CriteriaBuilder) -> Result<(), FilterError> {
        if let Some(price) = self.max_price {
            let range = builder.range();
            if !range.contains(price) {
                warn!(
                    "Configured max price {} is outside {} - {}, clamping",
                    price, range.min, range.max
                );
            }
            builder.set_max_price(price);
        }
        builder
            .set_bed_count(self.bed_count)
            .set_bath_count(self.bath_count)
            .set_date_range(self.date_range()?);
        for amenity in &self.amenities {
            if !builder.pending().amenities.contains(amenity) {
                builder.toggle_amenity(*amenity);
            }
        }
        Ok(())
    }

    fn date_range(&self) -> Result<Option<DateRange>, FilterError> {
        match (self.available_from, self.available_to) {
            (Some(from), Some(to)) => DateRange::new(from, to).map(Some),
            (Some(day), None) | (None, Some(day)) => DateRange::new(day, day).map(Some),
            (None, None) => Ok(None),
        }
    }
}

/// Where filtered results are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("filtered_listings.json"),
        }
    }
}
