//! Places nearby-search HTTP client.
//!
//! Every nearby query searches two categories (bike shops and parking) at the
//! same centre and radius, concurrently, and concatenates the results with
//! bike shops first.

use std::time::Duration;

use tracing::{error, info};

use crate::domain::MobilityLocation;

use super::convert::{SearchOutcome, classify, convert_place};
use super::error::PlacesError;
use super::types::{NearbySearchResponse, PlaceCategory};

/// Default nearby-search endpoint.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Full URL of the nearby-search endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Places nearby-search client.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    /// Create a new places client.
    ///
    /// Fails with [`PlacesError::MissingApiKey`] if the key is blank.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        if config.api_key.trim().is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch bike shops and parking around a point.
    ///
    /// Either category failing fails the whole call.
    pub async fn fetch_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<MobilityLocation>, PlacesError> {
        let (mut locations, parking) = tokio::try_join!(
            self.search_category(latitude, longitude, radius_meters, PlaceCategory::BikeShop),
            self.search_category(latitude, longitude, radius_meters, PlaceCategory::Parking)
        )?;

        locations.extend(parking);
        Ok(locations)
    }

    /// Search a single category around a point.
    pub async fn search_category(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
        category: PlaceCategory,
    ) -> Result<Vec<MobilityLocation>, PlacesError> {
        let category_type = category.api_type();
        info!(
            category = category_type,
            latitude, longitude, radius_meters, "Fetching places"
        );

        let response = match self
            .request(latitude, longitude, radius_meters, category)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(category = category_type, error = %e, "Failed to fetch places");
                return Err(e);
            }
        };

        match classify(response) {
            SearchOutcome::Found(results) => {
                info!(
                    category = category_type,
                    count = results.len(),
                    "Places search returned results"
                );
                Ok(results
                    .iter()
                    .map(|place| convert_place(place, category))
                    .collect())
            }
            SearchOutcome::Empty => {
                info!(category = category_type, "Places search returned no results");
                Ok(Vec::new())
            }
            SearchOutcome::Rejected { status, message } => {
                error!(
                    category = category_type,
                    status = %status,
                    message = message.as_deref().unwrap_or(""),
                    "Places API rejected the search"
                );
                Err(PlacesError::Rejected {
                    category: category_type,
                    status,
                })
            }
        }
    }

    async fn request(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
        category: PlaceCategory,
    ) -> Result<NearbySearchResponse, PlacesError> {
        // The key travels in the query string, so strip URLs from transport
        // errors before they reach logs or response bodies.
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("location", format!("{latitude},{longitude}")),
                ("radius", radius_meters.to_string()),
                ("type", category.api_type().to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Http(e.without_url()))?;

        serde_json::from_str(&body).map_err(|e| PlacesError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationKind, synthetic_availability};
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    const PATH: &str = "/maps/api/place/nearbysearch/json";

    fn client_for(server: &MockServer) -> PlacesClient {
        let config = PlacesConfig::new("test-key").with_base_url(server.url(PATH));
        PlacesClient::new(config).unwrap()
    }

    fn place(id: &str, vicinity: &str) -> Value {
        json!({
            "place_id": id,
            "name": format!("Place {id}"),
            "vicinity": vicinity,
            "geometry": {"location": {"lat": 45.5, "lng": -73.57}}
        })
    }

    #[test]
    fn config_defaults() {
        let config = PlacesConfig::new("k");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = PlacesClient::new(PlacesConfig::new("")).unwrap_err();
        assert!(matches!(err, PlacesError::MissingApiKey));

        let err = PlacesClient::new(PlacesConfig::new("   ")).unwrap_err();
        assert!(matches!(err, PlacesError::MissingApiKey));
    }

    #[tokio::test]
    async fn sends_expected_query_and_concatenates_categories() {
        let server = MockServer::start_async().await;
        let bikes = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(PATH)
                    .query_param("location", "45.5017,-73.5673")
                    .query_param("radius", "10000")
                    .query_param("type", "bicycle_store")
                    .query_param("key", "test-key");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [place("shop-1", "Rue Rachel")]
                }));
            })
            .await;
        let parking = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(PATH)
                    .query_param("location", "45.5017,-73.5673")
                    .query_param("radius", "10000")
                    .query_param("type", "parking")
                    .query_param("key", "test-key");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [place("lot-1", "Rue Peel"), place("lot-2", "Rue Guy")]
                }));
            })
            .await;

        let locations = client_for(&server)
            .fetch_nearby(45.5017, -73.5673, 10000)
            .await
            .unwrap();

        bikes.assert_async().await;
        parking.assert_async().await;

        assert_eq!(locations.len(), 3);
        assert_eq!(locations[0].id, "shop-1");
        assert_eq!(locations[0].kind, LocationKind::BikeShop);
        assert!(locations[0].available_units.is_none());

        assert_eq!(locations[1].id, "lot-1");
        assert_eq!(locations[1].kind, LocationKind::Parking);
        assert_eq!(locations[1].description.as_deref(), Some("Rue Peel"));
        assert_eq!(
            locations[1].available_units,
            Some(synthetic_availability("lot-1"))
        );
        assert_eq!(locations[2].id, "lot-2");
    }

    #[tokio::test]
    async fn zero_results_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(200)
                    .json_body(json!({"status": "ZERO_RESULTS", "results": []}));
            })
            .await;

        let locations = client_for(&server)
            .fetch_nearby(45.0, -73.0, 500)
            .await
            .unwrap();
        assert!(locations.is_empty());
    }

    #[tokio::test]
    async fn rejected_status_fails_whole_call() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH).query_param("type", "bicycle_store");
                then.status(200)
                    .json_body(json!({"status": "OK", "results": [place("shop-1", "X")]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH).query_param("type", "parking");
                then.status(200).json_body(json!({
                    "status": "OVER_QUERY_LIMIT",
                    "results": [],
                    "error_message": "quota exceeded"
                }));
            })
            .await;

        let err = client_for(&server)
            .fetch_nearby(45.0, -73.0, 500)
            .await
            .unwrap_err();

        match err {
            PlacesError::Rejected { category, status } => {
                assert_eq!(category, "parking");
                assert_eq!(status, "OVER_QUERY_LIMIT");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(500);
            })
            .await;

        let err = client_for(&server)
            .search_category(45.0, -73.0, 500, PlaceCategory::Parking)
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_key() {
        // Nothing listens on the discard port.
        let config = PlacesConfig::new("secret-key")
            .with_base_url("http://127.0.0.1:9/nearbysearch/json")
            .with_timeout(5);
        let client = PlacesClient::new(config).unwrap();

        let err = client
            .search_category(45.0, -73.0, 500, PlaceCategory::Parking)
            .await
            .unwrap_err();

        assert!(matches!(err, PlacesError::Http(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
