//! Error types for the filter engine.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Input the engine cannot work with, e.g. an empty listing set.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Date window whose start is after its end.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
