use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Amenity tags a listing can advertise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    Wifi,
    Parking,
    Gym,
    Pool,
    Kitchen,
    Laundry,
    AirConditioning,
    Heating,
    PetsAllowed,
    Furnished,
    Balcony,
    Elevator,
}

/// Inclusive window of dates a listing can be rented
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Core rental listing data model, as served by the listings API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub price: i64,
    pub bed_count: u32,
    pub bath_count: u32,
    #[serde(default)]
    pub amenities: BTreeSet<Amenity>,
    pub availability: Availability,
    #[serde(default)]
    pub images: Vec<String>,
}
