mod assistant;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::matching::catalog::FieldCatalog;
use crate::matching::search::ListingEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Viinterns API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize matching engine over the built-in field catalog
    let catalog = FieldCatalog::builtin();
    let settings = config.engine_settings();
    info!(
        "Matching engine: {} fields, {} listings per field, max {} results",
        catalog.fields().count(),
        settings.synthesis.listings_per_field,
        settings.max_results
    );
    if let Some(seed) = config.search_seed {
        info!("SEARCH_SEED={seed}: search results are deterministic");
    }
    let engine = Arc::new(ListingEngine::new(catalog, settings));

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
