use tracing::{debug, warn};

use super::builder::CriteriaBuilder;
use super::predicate::filter_all;
use super::range::{derive_range, PriceRange};
use crate::models::Listing;

/// Listing set plus the filter state a listings view keeps for it
#[derive(Debug, Clone)]
pub struct ListingFilterEngine {
    listings: Vec<Listing>,
    criteria: CriteriaBuilder,
}

impl ListingFilterEngine {
    pub fn new(listings: Vec<Listing>) -> Self {
        let range = range_or_fallback(&listings);
        Self {
            listings,
            criteria: CriteriaBuilder::new(range),
        }
    }

    /// Swap in a new listing set. Both pending and applied criteria go back
    /// to defaults for the new price range.
    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        let range = range_or_fallback(&listings);
        self.listings = listings;
        self.criteria = CriteriaBuilder::new(range);
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn range(&self) -> PriceRange {
        self.criteria.range()
    }

    pub fn criteria(&self) -> &CriteriaBuilder {
        &self.criteria
    }

    pub fn pending_mut(&mut self) -> &mut CriteriaBuilder {
        &mut self.criteria
    }

    /// Commit pending criteria and return the matching listings
    pub fn apply(&mut self) -> Vec<&Listing> {
        self.criteria.apply();
        let found = self.results();
        debug!("{} of {} listings match", found.len(), self.listings.len());
        found
    }

    /// Reset pending criteria without touching the applied ones
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Listings matching the applied criteria, in input order
    pub fn results(&self) -> Vec<&Listing> {
        filter_all(&self.listings, self.criteria.applied())
    }
}

fn range_or_fallback(listings: &[Listing]) -> PriceRange {
    derive_range(listings).unwrap_or_else(|err| {
        warn!("{}, using fallback price range", err);
        PriceRange::FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amenity, Availability};
    use chrono::NaiveDate;

    fn listing(id: &str, price: i64, beds: u32, baths: u32, amenities: &[Amenity]) -> Listing {
        let day = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        Listing {
            id: id.to_string(),
            title: String::new(),
            location: Some("Riverside".to_string()),
            price,
            bed_count: beds,
            bath_count: baths,
            amenities: amenities.iter().copied().collect(),
            availability: Availability { from: day, to: day },
            images: vec![],
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("first", 1000, 2, 1, &[Amenity::Wifi, Amenity::Parking]),
            listing("second", 2000, 3, 2, &[Amenity::Wifi, Amenity::Gym, Amenity::Pool]),
        ]
    }

    fn ids(found: Vec<&Listing>) -> Vec<&str> {
        found.into_iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_defaults_match_everything() {
        let engine = ListingFilterEngine::new(sample());
        assert_eq!(engine.range(), PriceRange { min: 1000, max: 2000 });
        assert_eq!(ids(engine.results()), ["first", "second"]);
    }

    #[test]
    fn test_clear_then_apply_returns_all() {
        let mut engine = ListingFilterEngine::new(sample());
        engine.pending_mut().toggle_amenity(Amenity::Pool);
        assert_eq!(ids(engine.apply()), ["second"]);

        engine.clear();
        assert_eq!(ids(engine.results()), ["second"]);
        assert_eq!(ids(engine.apply()), ["first", "second"]);
    }

    #[test]
    fn test_replace_listings_resets_criteria() {
        let mut engine = ListingFilterEngine::new(sample());
        engine.pending_mut().set_bed_count(Some(3));
        engine.apply();
        engine.pending_mut().set_bath_count(Some(2));

        engine.replace_listings(vec![listing("third", 4200, 1, 1, &[])]);

        assert_eq!(engine.range(), PriceRange { min: 4200, max: 5000 });
        assert!(engine.criteria().applied().bed_count.is_none());
        assert!(engine.criteria().pending().bath_count.is_none());
        assert_eq!(ids(engine.results()), ["third"]);
    }

    #[test]
    fn test_empty_set_uses_fallback_range() {
        let engine = ListingFilterEngine::new(Vec::new());
        assert_eq!(engine.range(), PriceRange::FALLBACK);
        assert!(engine.results().is_empty());
    }
}
