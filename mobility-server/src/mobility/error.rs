//! Aggregation error types.

use std::fmt;

use crate::places::PlacesError;
use crate::stations::StationFeedError;

/// The upstream system an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    StationFeed,
    PlacesSearch,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::StationFeed => write!(f, "station feed"),
            Upstream::PlacesSearch => write!(f, "places search"),
        }
    }
}

/// Errors surfaced by the aggregation operations.
#[derive(Debug, thiserror::Error)]
pub enum MobilityError {
    /// Upstream could not be reached, or answered with something unusable.
    #[error("{upstream} unavailable: {message}")]
    Unavailable { upstream: Upstream, message: String },

    /// Upstream was reached but reported a failure status.
    #[error("{upstream} rejected the request with status {status}")]
    Rejected { upstream: Upstream, status: String },

    /// Anything else.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<StationFeedError> for MobilityError {
    fn from(e: StationFeedError) -> Self {
        MobilityError::Unavailable {
            upstream: Upstream::StationFeed,
            message: e.to_string(),
        }
    }
}

impl From<PlacesError> for MobilityError {
    fn from(e: PlacesError) -> Self {
        match e {
            PlacesError::Rejected { status, .. } => MobilityError::Rejected {
                upstream: Upstream::PlacesSearch,
                status,
            },
            PlacesError::MissingApiKey => MobilityError::Unexpected(e.to_string()),
            PlacesError::Http(_) | PlacesError::Status { .. } | PlacesError::Json { .. } => {
                MobilityError::Unavailable {
                    upstream: Upstream::PlacesSearch,
                    message: e.to_string(),
                }
            }
        }
    }
}
