//! Mobility map server.
//!
//! Aggregates a bike-share station feed and a places search into a single
//! list of mobility locations, served as JSON to a browser map.

pub mod config;
pub mod domain;
pub mod mobility;
pub mod places;
pub mod stations;
pub mod telemetry;
pub mod web;
