//! Web layer.
//!
//! Provides the JSON endpoints consumed by the map UI.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, cors_layer, create_router};
pub use state::AppState;
