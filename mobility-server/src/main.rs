use std::process::ExitCode;
use std::sync::Arc;

use mobility_server::config::AppConfig;
use mobility_server::mobility::{MobilityService, OverviewConfig};
use mobility_server::places::{PlacesClient, PlacesConfig};
use mobility_server::stations::{StationFeedClient, StationFeedConfig};
use mobility_server::telemetry;
use mobility_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    // Missing credentials are fatal at startup
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let station_config = StationFeedConfig::new().with_timeout(config.upstream_timeout_secs);
    let stations = match StationFeedClient::new(station_config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create station feed client");
            return ExitCode::FAILURE;
        }
    };

    let places_config =
        PlacesConfig::new(config.places_api_key.clone()).with_timeout(config.upstream_timeout_secs);
    let places = match PlacesClient::new(places_config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create places client");
            return ExitCode::FAILURE;
        }
    };

    let mobility = MobilityService::new(
        Arc::new(stations),
        Arc::new(places),
        OverviewConfig::default(),
    );
    let state = AppState::new(mobility, config.maps_js_api_key.as_str());
    let app = create_router(state, &config.allowed_origins);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, origins = ?config.allowed_origins, "Mobility server listening");
    info!("  GET  /api/mobility/regional-overview");
    info!("  GET  /api/mobility/nearby?lat&lng&radius");
    info!("  GET  /api/ping");
    info!("  GET  /api/config/maps-key");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
