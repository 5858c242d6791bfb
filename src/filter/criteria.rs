use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::FilterError;
use crate::models::Amenity;

/// Requested occupancy window, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, FilterError> {
        if from > to {
            return Err(FilterError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }
}

/// Active filter selection
///
/// `None` and an empty amenity set mean "any" for their dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Inclusive upper bound on price
    pub max_price: i64,
    /// Exact bedroom count
    pub bed_count: Option<u32>,
    /// Exact bathroom count
    pub bath_count: Option<u32>,
    /// Amenities a listing must all have
    pub amenities: BTreeSet<Amenity>,
    pub date_range: Option<DateRange>,
}

impl Criteria {
    /// Fresh criteria: price capped at `ceiling`, every other dimension unset
    pub fn with_ceiling(ceiling: i64) -> Self {
        Self {
            max_price: ceiling,
            bed_count: None,
            bath_count: None,
            amenities: BTreeSet::new(),
            date_range: None,
        }
    }

    /// Number of dimensions that can exclude a listing.
    /// Price only counts once it sits below `ceiling`.
    pub fn active_filter_count(&self, ceiling: i64) -> usize {
        [
            self.max_price < ceiling,
            self.bed_count.is_some(),
            self.bath_count.is_some(),
            !self.amenities.is_empty(),
            self.date_range.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_are_unset() {
        let criteria = Criteria::with_ceiling(3000);
        assert_eq!(criteria.max_price, 3000);
        assert!(criteria.bed_count.is_none());
        assert!(criteria.bath_count.is_none());
        assert!(criteria.amenities.is_empty());
        assert!(criteria.date_range.is_none());
        assert_eq!(criteria.active_filter_count(3000), 0);
    }

    #[test]
    fn test_active_filter_count() {
        let mut criteria = Criteria::with_ceiling(3000);
        criteria.max_price = 2500;
        criteria.bed_count = Some(2);
        criteria.amenities.insert(Amenity::Pool);
        assert_eq!(criteria.active_filter_count(3000), 3);
    }

    #[test]
    fn test_date_range_rejects_inverted_window() {
        let err = DateRange::new(date(2026, 5, 2), date(2026, 5, 1)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDateRange { .. }));
    }
}
