//! Places nearby-search client.
//!
//! Queries a keyed, categorised nearby-search API for bike shops and parking
//! and turns each result into a [`MobilityLocation`](crate::domain::MobilityLocation).
//! Parking results carry a synthetic availability count.

mod client;
mod convert;
mod error;
mod types;

pub use client::{PlacesClient, PlacesConfig};
pub use convert::{SearchOutcome, classify, convert_place};
pub use error::PlacesError;
pub use types::{Geometry, LatLng, NearbySearchResponse, PlaceCategory, PlaceResult};
