//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::mobility::MobilityError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `allowed_origins` is the CORS allow-list; anything else gets no CORS
/// headers.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/mobility/regional-overview", get(regional_overview))
        .route("/api/mobility/montreal-laval", get(regional_overview))
        .route("/api/mobility/nearby", get(nearby))
        .route("/api/ping", get(ping))
        .route("/api/config/maps-key", get(maps_key))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy allowing the given origins with any method and header.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Stations plus parking for both fixed regions.
async fn regional_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, AppError> {
    let overview = state.mobility.regional_overview().await?;
    Ok(Json(OverviewResponse::from(overview)))
}

/// Every place category near a point.
async fn nearby(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>, AppError> {
    let locations = state
        .mobility
        .nearby(query.latitude(), query.longitude(), query.radius_meters())
        .await?;
    Ok(Json(NearbyResponse::from(locations)))
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        time: Utc::now(),
    })
}

async fn maps_key(State(state): State<AppState>) -> Json<MapsKeyResponse> {
    Json(MapsKeyResponse {
        key: state.maps_key.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// An upstream failed or refused; reported to the caller.
    BadGateway { message: String, detail: String },
    /// Anything else; the cause is logged but never returned.
    Internal { cause: String },
}

impl From<MobilityError> for AppError {
    fn from(e: MobilityError) -> Self {
        match &e {
            MobilityError::Unavailable { upstream, .. } => AppError::BadGateway {
                message: format!("Failed to reach the {upstream}."),
                detail: e.to_string(),
            },
            MobilityError::Rejected { upstream, .. } => AppError::BadGateway {
                message: format!("The {upstream} rejected the request."),
                detail: e.to_string(),
            },
            MobilityError::Unexpected(_) => AppError::Internal {
                cause: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadGateway { message, detail } => {
                error!(status = 502, detail = %detail, "{message}");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        success: false,
                        message,
                        detail: Some(detail),
                    },
                )
            }
            AppError::Internal { cause } => {
                error!(status = 500, cause = %cause, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        message: "An unexpected error occurred.".to_string(),
                        detail: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
