//! Axum route handlers for the internship search API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::listing::Listing;
use crate::state::AppState;

pub const SEARCH_SOURCES: &[&str] = &["Viinterns AI Search"];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_fields: Vec<String>,
    /// Decoded by the engine: malformed values give an empty result, not a 400.
    #[serde(default = "empty_object")]
    pub preferences: Value,
}

fn empty_object() -> Value {
    json!({})
}

#[derive(Debug, Serialize)]
pub struct SearchJobsResponse {
    pub message: String,
    pub internships: Vec<Listing>,
    pub sources: Vec<String>,
    pub diagnostics: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/search-jobs
///
/// Synthesizes internship listings ranked against the caller's skills.
/// Always 200 for a well-formed body, possibly with zero internships.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    payload: Result<Json<SearchJobsRequest>, JsonRejection>,
) -> Result<Json<SearchJobsResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let mut rng = state.request_rng();
    let outcome = state.engine.search(
        &request.skills,
        &request.career_fields,
        &request.preferences,
        &mut rng,
        Utc::now().date_naive(),
    );

    info!(
        "Search for {} skills across {} fields returned {} internships",
        request.skills.len(),
        request.career_fields.len(),
        outcome.listings.len()
    );

    Ok(Json(SearchJobsResponse {
        message: format!(
            "Found {} internships matching your skills",
            outcome.listings.len()
        ),
        internships: outcome.listings,
        sources: SEARCH_SOURCES.iter().map(|s| s.to_string()).collect(),
        diagnostics: outcome.diagnostics,
    }))
}
