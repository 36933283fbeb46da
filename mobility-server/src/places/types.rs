//! Wire types for the nearby-search API.

use serde::Deserialize;

use crate::domain::LocationKind;

/// A place category that is searched for on every nearby query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    BikeShop,
    Parking,
}

impl PlaceCategory {
    /// Value of the `type` query parameter.
    pub fn api_type(&self) -> &'static str {
        match self {
            PlaceCategory::BikeShop => "bicycle_store",
            PlaceCategory::Parking => "parking",
        }
    }

    /// Kind given to locations found under this category.
    pub fn kind(&self) -> LocationKind {
        match self {
            PlaceCategory::BikeShop => LocationKind::BikeShop,
            PlaceCategory::Parking => LocationKind::Parking,
        }
    }
}

/// Response body of a nearby search.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,

    /// `OK`, `ZERO_RESULTS`, or an error code such as `REQUEST_DENIED`.
    pub status: String,

    /// Human-readable explanation, present on some error statuses.
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
