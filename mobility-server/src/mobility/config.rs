//! Regions and limits for the aggregation operations.

/// Fallback centre latitude for nearby queries (Montréal city centre).
pub const DEFAULT_LATITUDE: f64 = 45.5017;

/// Fallback centre longitude for nearby queries (Montréal city centre).
pub const DEFAULT_LONGITUDE: f64 = -73.5673;

/// Fallback radius for nearby queries.
pub const DEFAULT_RADIUS_METERS: u32 = 8000;

/// Maximum parking entries taken from each region before deduplication.
pub const DEFAULT_PARKING_CAP: usize = 15;

/// A circular search area.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Label used in logs.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
}

impl Region {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, radius_meters: u32) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            radius_meters,
        }
    }
}

/// Configuration for the regional overview.
#[derive(Debug, Clone)]
pub struct OverviewConfig {
    /// Region whose parking wins on id collisions.
    pub primary: Region,

    pub secondary: Region,

    /// Per-region parking cap, applied before deduplication.
    pub parking_cap: usize,
}

impl OverviewConfig {
    pub fn new(primary: Region, secondary: Region, parking_cap: usize) -> Self {
        Self {
            primary,
            secondary,
            parking_cap,
        }
    }
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            primary: Region::new("montreal", 45.5017, -73.5673, 10_000),
            secondary: Region::new("laval", 45.6066, -73.7124, 8_000),
            parking_cap: DEFAULT_PARKING_CAP,
        }
    }
}
