//! GBFS station feed client.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::MobilityLocation;

use super::convert::convert_feed;
use super::error::StationFeedError;
use super::types::StationFeed;

/// Default feed URL (BIXI Montréal, English).
const DEFAULT_FEED_URL: &str = "https://gbfs.velobixi.com/gbfs/en/station_information.json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the station feed client.
#[derive(Debug, Clone)]
pub struct StationFeedConfig {
    /// Full URL of the `station_information` document
    pub feed_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationFeedConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationFeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the public bike-share station feed.
///
/// The feed is unauthenticated. Each call is a single GET; nothing is cached
/// or retried.
#[derive(Debug, Clone)]
pub struct StationFeedClient {
    http: reqwest::Client,
    feed_url: String,
}

impl StationFeedClient {
    /// Create a new station feed client.
    pub fn new(config: StationFeedConfig) -> Result<Self, StationFeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feed_url: config.feed_url,
        })
    }

    /// Fetch every station as a transit-dock location.
    ///
    /// A feed without a station list yields an empty vector.
    pub async fn fetch_stations(&self) -> Result<Vec<MobilityLocation>, StationFeedError> {
        info!("Fetching station information from GBFS feed");

        let feed = match self.fetch_feed().await {
            Ok(feed) => feed,
            Err(e) => {
                error!(error = %e, "Failed to fetch station data");
                return Err(e);
            }
        };

        match convert_feed(&feed) {
            Some(locations) => {
                info!(
                    count = locations.len(),
                    last_updated = feed.last_updated,
                    "Station feed returned stations"
                );
                Ok(locations)
            }
            None => {
                warn!("Station feed returned no stations");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_feed(&self) -> Result<StationFeed, StationFeedError> {
        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StationFeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| StationFeedError::Json {
            message: e.to_string(),
        })
    }
}
