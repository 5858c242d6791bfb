use super::criteria::{Criteria, DateRange};
use crate::models::{Availability, Listing};

/// Whether `listing` satisfies every active dimension of `criteria`.
pub fn matches(listing: &Listing, criteria: &Criteria) -> bool {
    price_matches(listing, criteria)
        && count_matches(listing.bed_count, criteria.bed_count)
        && count_matches(listing.bath_count, criteria.bath_count)
        && amenities_match(listing, criteria)
        && dates_match(&listing.availability, criteria.date_range.as_ref())
}

/// Listings matching `criteria`, in input order.
pub fn filter_all<'a>(listings: &'a [Listing], criteria: &Criteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(l, criteria)).collect()
}

fn price_matches(listing: &Listing, criteria: &Criteria) -> bool {
    listing.price <= criteria.max_price
}

// Exact match, not "at least".
fn count_matches(actual: u32, wanted: Option<u32>) -> bool {
    wanted.map_or(true, |n| actual == n)
}

fn amenities_match(listing: &Listing, criteria: &Criteria) -> bool {
    criteria.amenities.is_subset(&listing.amenities)
}

// The requested stay must fit entirely inside the availability window.
fn dates_match(availability: &Availability, wanted: Option<&DateRange>) -> bool {
    wanted.map_or(true, |range| {
        availability.from <= range.from && range.to <= availability.to
    })
}
