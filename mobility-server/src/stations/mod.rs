//! Bike-share station feed.
//!
//! Reads the public GBFS `station_information` document and turns each
//! station into a transit-dock [`MobilityLocation`](crate::domain::MobilityLocation).

mod client;
mod convert;
mod error;
mod types;

pub use client::{StationFeedClient, StationFeedConfig};
pub use convert::{convert_feed, convert_station};
pub use error::StationFeedError;
pub use types::{StationFeed, StationFeedData, StationInfo};
