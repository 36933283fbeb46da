//! Application state for the web layer.

use std::sync::Arc;

use crate::mobility::MobilityService;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Aggregation handler
    pub mobility: Arc<MobilityService>,

    /// Maps display key passed through to the browser
    pub maps_key: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(mobility: MobilityService, maps_key: impl Into<Arc<str>>) -> Self {
        Self {
            mobility: Arc::new(mobility),
            maps_key: maps_key.into(),
        }
    }
}
