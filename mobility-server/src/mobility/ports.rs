//! Sources the aggregation layer reads from.
//!
//! The handler only sees these traits, so tests can swap in fakes for the
//! real HTTP clients.

use async_trait::async_trait;

use crate::domain::MobilityLocation;
use crate::places::PlacesClient;
use crate::stations::StationFeedClient;

use super::error::MobilityError;

/// Something that can list bike-share docks.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Fetch every dock as a transit-dock location.
    ///
    /// # Errors
    ///
    /// Returns a [`MobilityError`] when the source cannot be read.
    async fn fetch_stations(&self) -> Result<Vec<MobilityLocation>, MobilityError>;
}

/// Something that can search for places around a point.
#[async_trait]
pub trait PlacesSource: Send + Sync {
    /// Fetch every place category around a point.
    ///
    /// # Errors
    ///
    /// Returns a [`MobilityError`] when the search fails or is rejected.
    async fn fetch_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<MobilityLocation>, MobilityError>;
}

#[async_trait]
impl StationSource for StationFeedClient {
    async fn fetch_stations(&self) -> Result<Vec<MobilityLocation>, MobilityError> {
        StationFeedClient::fetch_stations(self)
            .await
            .map_err(MobilityError::from)
    }
}

#[async_trait]
impl PlacesSource for PlacesClient {
    async fn fetch_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<MobilityLocation>, MobilityError> {
        PlacesClient::fetch_nearby(self, latitude, longitude, radius_meters)
            .await
            .map_err(MobilityError::from)
    }
}
