//! Conversion from feed records to mobility locations.

use crate::domain::{LocationKind, MobilityLocation};

use super::types::{StationFeed, StationInfo};

/// Convert one station record.
pub fn convert_station(station: &StationInfo) -> MobilityLocation {
    MobilityLocation::new(
        station.station_id.clone(),
        station.name.clone(),
        LocationKind::TransitDock,
        station.lat,
        station.lon,
    )
    .with_description(format!("Capacity: {} docks", station.capacity))
}

/// Convert a whole feed document.
///
/// Returns `None` when the document has no station list (missing `data` or
/// `stations`). Callers treat that as an empty result, not a failure.
pub fn convert_feed(feed: &StationFeed) -> Option<Vec<MobilityLocation>> {
    feed.stations()
        .map(|stations| stations.iter().map(convert_station).collect())
}
