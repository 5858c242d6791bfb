use super::error::FilterError;
use crate::models::Listing;

const LOWER_STEP: i64 = 100;
const UPPER_STEP: i64 = 1000;

/// Inclusive price bounds for the price ceiling control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// Range to show when there are no listings to derive one from
    pub const FALLBACK: PriceRange = PriceRange { min: 0, max: 10_000 };

    pub fn contains(&self, price: i64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn clamp(&self, price: i64) -> i64 {
        price.clamp(self.min, self.max)
    }
}

/// Derive display-friendly price bounds from a listing set.
///
/// The lower bound is rounded down to the nearest 100 and the upper bound up
/// to the nearest 1000, so every listing price stays inside the range.
pub fn derive_range(listings: &[Listing]) -> Result<PriceRange, FilterError> {
    let mut prices = listings.iter().map(|l| l.price);
    let first = prices
        .next()
        .ok_or(FilterError::InvalidInput("cannot derive a price range from no listings"))?;

    let (lowest, highest) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    let mut min = floor_to(lowest, LOWER_STEP);
    let mut max = ceil_to(highest, UPPER_STEP);

    // Identical bounds leave the slider nothing to move over.
    if min == max {
        match max.checked_add(UPPER_STEP) {
            Some(widened) => max = widened,
            None => min -= UPPER_STEP,
        }
    }

    Ok(PriceRange { min, max })
}

// Both roundings saturate at the i64 limits, which still contain the price.
fn floor_to(value: i64, step: i64) -> i64 {
    value.div_euclid(step).saturating_mul(step)
}

fn ceil_to(value: i64, step: i64) -> i64 {
    let floor = floor_to(value, step);
    if floor == value {
        value
    } else {
        floor.saturating_add(step)
    }
}
