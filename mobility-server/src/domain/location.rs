//! Mobility location types.

use serde::Serialize;

/// What kind of place a location represents.
///
/// Serialised with the labels the map UI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocationKind {
    /// A bike-share dock from the station feed.
    #[serde(rename = "bixi")]
    TransitDock,

    /// A parking lot from the places search.
    #[serde(rename = "parking")]
    Parking,

    /// A bike shop from the places search.
    ///
    /// Filtered out of the regional overview, but returned by nearby queries.
    #[serde(rename = "bike")]
    BikeShop,
}

/// A point on the map, merged from either upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilityLocation {
    /// Stable identifier from the source system (station id or place id).
    #[serde(rename = "placeId")]
    pub id: String,

    /// Display label.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: LocationKind,

    pub latitude: f64,

    pub longitude: f64,

    /// Dock capacity for stations, street vicinity for places.
    #[serde(rename = "vicinity", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Synthetic free-spot count, parking only.
    #[serde(rename = "availableSpots", skip_serializing_if = "Option::is_none")]
    pub available_units: Option<u8>,
}

impl MobilityLocation {
    /// Create a location with no description or availability.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: LocationKind,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            latitude,
            longitude,
            description: None,
            available_units: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the available unit count.
    pub fn with_available_units(mut self, units: u8) -> Self {
        self.available_units = Some(units);
        self
    }

    pub fn is_parking(&self) -> bool {
        self.kind == LocationKind::Parking
    }
}
