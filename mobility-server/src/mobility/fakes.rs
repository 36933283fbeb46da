//! In-memory sources for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::domain::MobilityLocation;

use super::error::{MobilityError, Upstream};
use super::ports::{PlacesSource, StationSource};

/// Station source returning a fixed list, or failing when `result` is `None`.
pub(crate) struct FakeStations {
    pub(crate) result: Option<Vec<MobilityLocation>>,
    pub(crate) barrier: Option<Arc<Barrier>>,
}

impl FakeStations {
    pub(crate) fn ok(list: Vec<MobilityLocation>) -> Self {
        Self {
            result: Some(list),
            barrier: None,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            result: None,
            barrier: None,
        }
    }
}

#[async_trait]
impl StationSource for FakeStations {
    async fn fetch_stations(&self) -> Result<Vec<MobilityLocation>, MobilityError> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        self.result.clone().ok_or_else(|| MobilityError::Unavailable {
            upstream: Upstream::StationFeed,
            message: "connection refused".into(),
        })
    }
}

/// Places source keyed by radius; an unknown radius fails as unavailable.
pub(crate) struct FakePlaces {
    pub(crate) by_radius: HashMap<u32, Vec<MobilityLocation>>,
    pub(crate) rejected: bool,
    pub(crate) unexpected: bool,
    pub(crate) barrier: Option<Arc<Barrier>>,
    pub(crate) calls: Mutex<Vec<(f64, f64, u32)>>,
}

impl FakePlaces {
    pub(crate) fn new(by_radius: HashMap<u32, Vec<MobilityLocation>>) -> Self {
        Self {
            by_radius,
            rejected: false,
            unexpected: false,
            barrier: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlacesSource for FakePlaces {
    async fn fetch_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<MobilityLocation>, MobilityError> {
        self.calls
            .lock()
            .unwrap()
            .push((latitude, longitude, radius_meters));
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.rejected {
            return Err(MobilityError::Rejected {
                upstream: Upstream::PlacesSearch,
                status: "REQUEST_DENIED".into(),
            });
        }
        if self.unexpected {
            return Err(MobilityError::Unexpected("places key vanished".into()));
        }
        self.by_radius
            .get(&radius_meters)
            .cloned()
            .ok_or_else(|| MobilityError::Unavailable {
                upstream: Upstream::PlacesSearch,
                message: "timed out".into(),
            })
    }
}
