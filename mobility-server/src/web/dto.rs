//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::MobilityLocation;
use crate::mobility::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_RADIUS_METERS, RegionalOverview,
};

/// Query string for a nearby search.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyQuery {
    /// Centre latitude (defaults to the city centre)
    pub lat: Option<f64>,

    /// Centre longitude (defaults to the city centre)
    pub lng: Option<f64>,

    /// Search radius in metres
    pub radius: Option<u32>,
}

impl NearbyQuery {
    pub fn latitude(&self) -> f64 {
        self.lat.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn longitude(&self) -> f64 {
        self.lng.unwrap_or(DEFAULT_LONGITUDE)
    }

    pub fn radius_meters(&self) -> u32 {
        self.radius.unwrap_or(DEFAULT_RADIUS_METERS)
    }
}

/// Response for the regional overview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub success: bool,
    pub count: usize,
    /// Number of bike-share stations
    pub bixi_count: usize,
    pub parking_count: usize,
    pub locations: Vec<MobilityLocation>,
}

impl From<RegionalOverview> for OverviewResponse {
    fn from(overview: RegionalOverview) -> Self {
        Self {
            success: true,
            count: overview.total(),
            bixi_count: overview.station_count(),
            parking_count: overview.parking_count(),
            locations: overview.into_locations(),
        }
    }
}

/// Response for a nearby search.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub success: bool,
    pub count: usize,
    pub locations: Vec<MobilityLocation>,
}

impl From<Vec<MobilityLocation>> for NearbyResponse {
    fn from(locations: Vec<MobilityLocation>) -> Self {
        Self {
            success: true,
            count: locations.len(),
            locations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MapsKeyResponse {
    pub key: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
