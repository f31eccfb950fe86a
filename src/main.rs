//! racing-gateway server entry point.
//!
//! Opens the SQLite store, initializes both repositories and starts the
//! Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use racing_gateway::api;
use racing_gateway::app_state::AppState;
use racing_gateway::config::GatewayConfig;
use racing_gateway::persistence::{self, EventRepository, RaceRepository};
use racing_gateway::service::{RacingService, SportsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
    tracing::info!(addr = %config.listen_addr, "starting racing-gateway");

    // Open the store and seed it on first run
    let pool = persistence::sqlite::connect(&config)
        .await
        .with_context(|| format!("cannot open {}", config.database_url))?;
    let races = Arc::new(RaceRepository::new(pool.clone()));
    let events = Arc::new(EventRepository::new(pool));
    races.init().await.context("race store")?;
    events.init().await.context("sports store")?;

    // Build application state
    let app_state = AppState {
        racing_service: Arc::new(RacingService::new(races)),
        sports_service: Arc::new(SportsService::new(events)),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
