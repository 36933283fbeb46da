//! The aggregation handler.
//!
//! Combines the station feed with parking from two fixed regions into a
//! single list for the map, or passes a single nearby search straight
//! through.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::MobilityLocation;

use super::config::OverviewConfig;
use super::error::MobilityError;
use super::ports::{PlacesSource, StationSource};

/// Result of the regional overview.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalOverview {
    /// Every station from the feed, in feed order.
    pub stations: Vec<MobilityLocation>,

    /// Capped, deduplicated parking, primary region first.
    pub parking: Vec<MobilityLocation>,
}

impl RegionalOverview {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn parking_count(&self) -> usize {
        self.parking.len()
    }

    pub fn total(&self) -> usize {
        self.stations.len() + self.parking.len()
    }

    /// Stations followed by parking.
    pub fn into_locations(self) -> Vec<MobilityLocation> {
        let mut all = self.stations;
        all.extend(self.parking);
        all
    }
}

/// Merge fetched lists into an overview.
///
/// Keeps only parking from each places list, takes at most `cap` per region,
/// then drops repeated ids keeping the first seen. Ids are compared exactly.
pub fn merge_overview(
    stations: Vec<MobilityLocation>,
    primary: Vec<MobilityLocation>,
    secondary: Vec<MobilityLocation>,
    cap: usize,
) -> RegionalOverview {
    let mut seen = HashSet::new();

    let parking = primary
        .into_iter()
        .filter(MobilityLocation::is_parking)
        .take(cap)
        .chain(
            secondary
                .into_iter()
                .filter(MobilityLocation::is_parking)
                .take(cap),
        )
        .filter(|loc| seen.insert(loc.id.clone()))
        .collect();

    RegionalOverview { stations, parking }
}

/// Aggregates the station feed and places search.
///
/// Holds no per-request state; every call issues fresh upstream requests.
pub struct MobilityService {
    stations: Arc<dyn StationSource>,
    places: Arc<dyn PlacesSource>,
    config: OverviewConfig,
}

impl MobilityService {
    pub fn new(
        stations: Arc<dyn StationSource>,
        places: Arc<dyn PlacesSource>,
        config: OverviewConfig,
    ) -> Self {
        Self {
            stations,
            places,
            config,
        }
    }

    /// Stations plus capped, deduplicated parking for both regions.
    ///
    /// The three upstream fetches run concurrently. If any fails the whole
    /// operation fails; no partial overview is ever returned.
    pub async fn regional_overview(&self) -> Result<RegionalOverview, MobilityError> {
        let primary = &self.config.primary;
        let secondary = &self.config.secondary;

        let fetched = tokio::try_join!(
            self.stations.fetch_stations(),
            self.places
                .fetch_nearby(primary.latitude, primary.longitude, primary.radius_meters),
            self.places.fetch_nearby(
                secondary.latitude,
                secondary.longitude,
                secondary.radius_meters
            )
        );

        let (stations, primary_places, secondary_places) = match fetched {
            Ok(lists) => lists,
            Err(e) => {
                error!(error = %e, "Regional overview failed");
                return Err(e);
            }
        };

        let overview = merge_overview(
            stations,
            primary_places,
            secondary_places,
            self.config.parking_cap,
        );

        info!(
            primary = %primary.name,
            secondary = %secondary.name,
            stations = overview.station_count(),
            parking = overview.parking_count(),
            "Built regional overview"
        );

        Ok(overview)
    }

    /// Every place category around a point, unfiltered and uncapped.
    ///
    /// Unlike the overview, bike shops are included.
    pub async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<MobilityLocation>, MobilityError> {
        let locations = self
            .places
            .fetch_nearby(latitude, longitude, radius_meters)
            .await
            .inspect_err(|e| error!(error = %e, "Nearby search failed"))?;

        info!(
            latitude,
            longitude,
            radius_meters,
            count = locations.len(),
            "Nearby search complete"
        );

        Ok(locations)
    }
}
