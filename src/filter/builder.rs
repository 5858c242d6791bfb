use tracing::debug;

use super::criteria::{Criteria, DateRange};
use super::range::PriceRange;
use crate::models::Amenity;

/// Staged criteria editing: `pending` follows the controls, `applied` is what
/// the listing view is filtered by. Only [`CriteriaBuilder::apply`] moves one
/// into the other.
#[derive(Debug, Clone)]
pub struct CriteriaBuilder {
    range: PriceRange,
    pending: Criteria,
    applied: Criteria,
}

impl CriteriaBuilder {
    pub fn new(range: PriceRange) -> Self {
        let defaults = Criteria::with_ceiling(range.max);
        Self {
            range,
            pending: defaults.clone(),
            applied: defaults,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn pending(&self) -> &Criteria {
        &self.pending
    }

    pub fn applied(&self) -> &Criteria {
        &self.applied
    }

    /// Set the price ceiling, clamped into the derived range
    pub fn set_max_price(&mut self, price: i64) -> &mut Self {
        self.pending.max_price = self.range.clamp(price);
        self
    }

    pub fn set_bed_count(&mut self, beds: Option<u32>) -> &mut Self {
        self.pending.bed_count = beds;
        self
    }

    pub fn set_bath_count(&mut self, baths: Option<u32>) -> &mut Self {
        self.pending.bath_count = baths;
        self
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) -> &mut Self {
        self.pending.date_range = range;
        self
    }

    /// Add the amenity if absent, remove it if present
    pub fn toggle_amenity(&mut self, amenity: Amenity) -> &mut Self {
        if !self.pending.amenities.remove(&amenity) {
            self.pending.amenities.insert(amenity);
        }
        self
    }

    /// Commit pending edits
    pub fn apply(&mut self) -> &Criteria {
        self.applied = self.pending.clone();
        debug!(
            "Applied criteria with {} active filters",
            self.applied.active_filter_count(self.range.max)
        );
        &self.applied
    }

    /// Reset pending edits to defaults. The applied criteria stay in effect
    /// until the next apply.
    pub fn clear(&mut self) {
        self.pending = Criteria::with_ceiling(self.range.max);
    }
}
