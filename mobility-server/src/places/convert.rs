//! Status classification and conversion of place results.

use crate::domain::{MobilityLocation, synthetic_availability};

use super::types::{NearbySearchResponse, PlaceCategory, PlaceResult};

/// Outcome of one category search, before conversion.
#[derive(Debug)]
pub enum SearchOutcome {
    /// `OK` with its results.
    Found(Vec<PlaceResult>),
    /// `ZERO_RESULTS`.
    Empty,
    /// Any other status.
    Rejected {
        status: String,
        message: Option<String>,
    },
}

/// Classify a decoded response by its `status` field.
pub fn classify(response: NearbySearchResponse) -> SearchOutcome {
    let NearbySearchResponse {
        results,
        status,
        error_message,
    } = response;

    match status.as_str() {
        "OK" => SearchOutcome::Found(results),
        "ZERO_RESULTS" => SearchOutcome::Empty,
        _ => SearchOutcome::Rejected {
            status,
            message: error_message,
        },
    }
}

/// Convert one place result found under `category`.
///
/// Parking places get a synthetic availability derived from their id.
pub fn convert_place(place: &PlaceResult, category: PlaceCategory) -> MobilityLocation {
    let mut location = MobilityLocation::new(
        place.place_id.clone(),
        place.name.clone(),
        category.kind(),
        place.geometry.location.lat,
        place.geometry.location.lng,
    );
    location.description = place.vicinity.clone();

    if category == PlaceCategory::Parking {
        location.available_units = Some(synthetic_availability(&place.place_id));
    }

    location
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationKind;
    use crate::places::{Geometry, LatLng};

    fn response(json: &str) -> NearbySearchResponse {
        serde_json::from_str(json).unwrap()
    }

    fn place(id: &str, vicinity: Option<&str>) -> PlaceResult {
        PlaceResult {
            place_id: id.to_string(),
            name: format!("Place {id}"),
            vicinity: vicinity.map(str::to_string),
            geometry: Geometry {
                location: LatLng {
                    lat: 45.5,
                    lng: -73.6,
                },
            },
        }
    }

    #[test]
    fn ok_with_results_is_found() {
        let outcome = classify(response(
            r#"{
                "status": "OK",
                "results": [
                    {"place_id": "a", "name": "A", "vicinity": "1 Rue X", "geometry": {"location": {"lat": 1.0, "lng": 2.0}}},
                    {"place_id": "b", "name": "B", "geometry": {"location": {"lat": 3.0, "lng": 4.0}, "viewport": {}}}
                ]
            }"#,
        ));

        match outcome {
            SearchOutcome::Found(results) => {
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].vicinity.as_deref(), Some("1 Rue X"));
                assert!(results[1].vicinity.is_none());
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn zero_results_is_empty() {
        let outcome = classify(response(r#"{"status": "ZERO_RESULTS", "results": []}"#));
        assert!(matches!(outcome, SearchOutcome::Empty));
    }

    #[test]
    fn other_status_is_rejected() {
        let outcome = classify(response(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        ));

        match outcome {
            SearchOutcome::Rejected { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn parking_gets_synthetic_availability() {
        let loc = convert_place(&place("ChIJparking1", Some("Rue Peel")), PlaceCategory::Parking);

        assert_eq!(loc.kind, LocationKind::Parking);
        assert_eq!(loc.description.as_deref(), Some("Rue Peel"));
        assert_eq!(
            loc.available_units,
            Some(synthetic_availability("ChIJparking1"))
        );
    }

    #[test]
    fn bike_shop_has_no_availability() {
        let loc = convert_place(&place("ChIJshop", None), PlaceCategory::BikeShop);

        assert_eq!(loc.kind, LocationKind::BikeShop);
        assert!(loc.available_units.is_none());
        assert!(loc.description.is_none());
        assert_eq!(loc.latitude, 45.5);
        assert_eq!(loc.longitude, -73.6);
    }

    #[test]
    fn category_api_types() {
        assert_eq!(PlaceCategory::BikeShop.api_type(), "bicycle_store");
        assert_eq!(PlaceCategory::Parking.api_type(), "parking");
    }
}
