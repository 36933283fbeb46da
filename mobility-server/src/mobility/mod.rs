//! Aggregation of the station feed and places search.
//!
//! [`MobilityService`] depends only on the [`StationSource`] and
//! [`PlacesSource`] traits; the HTTP clients implement them.

mod config;
mod error;
#[cfg(test)]
pub(crate) mod fakes;
mod ports;
mod service;

pub use config::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PARKING_CAP, DEFAULT_RADIUS_METERS,
    OverviewConfig, Region,
};
pub use error::{MobilityError, Upstream};
pub use ports::{PlacesSource, StationSource};
pub use service::{MobilityService, RegionalOverview, merge_overview};
