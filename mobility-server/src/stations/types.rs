//! Wire types for the GBFS `station_information` feed.
//!
//! Only the fields the map needs are decoded; everything else is ignored.

use serde::Deserialize;

/// Top-level feed document.
#[derive(Debug, Deserialize)]
pub struct StationFeed {
    /// POSIX timestamp of the last feed update.
    #[serde(default)]
    pub last_updated: Option<u64>,

    /// Seconds before the feed should be refreshed.
    #[serde(default)]
    pub ttl: Option<u64>,

    #[serde(default)]
    pub data: Option<StationFeedData>,
}

impl StationFeed {
    /// The station list, if the feed carried one.
    pub fn stations(&self) -> Option<&[StationInfo]> {
        self.data.as_ref()?.stations.as_deref()
    }
}

/// The `data` object of the feed.
#[derive(Debug, Deserialize)]
pub struct StationFeedData {
    #[serde(default)]
    pub stations: Option<Vec<StationInfo>>,
}

/// A single dock station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInfo {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Total number of docks; zero when the feed omits it.
    #[serde(default)]
    pub capacity: u32,
}
