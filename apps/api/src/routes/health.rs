use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner with the career fields the search understands.
pub async fn home_handler(State(state): State<AppState>) -> Json<Value> {
    let career_fields: Vec<&str> = state.engine.catalog().fields().map(|f| f.name).collect();

    Json(json!({
        "message": "Viinterns Backend API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "careerFields": career_fields
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "viinterns-api"
    }))
}
