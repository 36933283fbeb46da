//! Station feed error types.

/// Errors that can occur when reading the station feed.
#[derive(Debug, thiserror::Error)]
pub enum StationFeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed answered with a non-success status
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
