//! Process configuration read from environment variables.

use std::net::SocketAddr;

/// Places search credential. Required.
pub const PLACES_API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

/// Maps display key handed to the browser.
pub const MAPS_JS_API_KEY_VAR: &str = "GOOGLE_MAPS_JS_API_KEY";

/// Comma-separated CORS allow-list.
pub const ALLOWED_ORIGINS_VAR: &str = "ALLOWED_ORIGINS";

/// Listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Outbound request timeout in seconds.
pub const UPSTREAM_TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4200";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("{0} is not configured")]
    Missing(&'static str),

    /// A variable could not be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub maps_js_api_key: String,
    pub allowed_origins: Vec<String>,
    pub bind_addr: SocketAddr,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let places_api_key = lookup(PLACES_API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(PLACES_API_KEY_VAR))?;

        let maps_js_api_key = lookup(MAPS_JS_API_KEY_VAR).unwrap_or_default();

        let allowed_origins = parse_origins(
            &lookup(ALLOWED_ORIGINS_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value,
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let upstream_timeout_secs = match lookup(UPSTREAM_TIMEOUT_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: UPSTREAM_TIMEOUT_VAR,
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            places_api_key,
            maps_js_api_key,
            allowed_origins,
            bind_addr,
            upstream_timeout_secs,
        })
    }
}

/// Split a comma-separated origin list, trimming entries and dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
