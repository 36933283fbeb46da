//! Domain types shared by both upstream clients.
//!
//! Every location, whether a bike-share dock or a parking lot, is reshaped
//! into a [`MobilityLocation`] before it reaches the aggregation layer.

mod availability;
mod location;

pub use availability::{
    MAX_AVAILABLE, MIN_AVAILABLE, SeededRng, seed_for, synthetic_availability,
};
pub use location::{LocationKind, MobilityLocation};
