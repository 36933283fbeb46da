//! Places search error types.

/// Errors from the places nearby-search client.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// No API key was supplied
    #[error("places API key is not configured")]
    MissingApiKey,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success HTTP status
    #[error("places API returned HTTP {status}")]
    Status { status: u16 },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API reachable but reported a status other than OK / ZERO_RESULTS
    #[error("places API returned status {status} for type={category}")]
    Rejected {
        category: &'static str,
        status: String,
    },
}
