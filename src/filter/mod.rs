//! Client-side listing filter engine.
//!
//! Criteria are plain values; evaluation is a pure subset selection over the
//! caller-held listing set and never reorders it.

pub mod builder;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod predicate;
pub mod range;

pub use builder::CriteriaBuilder;
pub use criteria::{Criteria, DateRange};
pub use engine::ListingFilterEngine;
pub use error::FilterError;
pub use predicate::{filter_all, matches};
pub use range::{derive_range, PriceRange};
