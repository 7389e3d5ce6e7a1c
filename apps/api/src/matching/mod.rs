// Internship matching engine.
// Flow: catalog lookup → field gate → synthesize → score/filter → dedupe → cap.
// Pure computation; randomness and "today" are supplied by the caller.

pub mod catalog;
pub mod dedup;
pub mod handlers;
pub mod relevance;
pub mod scoring;
pub mod search;
pub mod skills;
pub mod synthesizer;
pub mod templates;

use thiserror::Error;

/// Failures inside the engine. `ListingEngine::search` never surfaces these to
/// callers; they come back as diagnostics next to an empty listing set.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Malformed preferences: {0}")]
    InvalidPreferences(#[from] serde_json::Error),

    #[error("Listing synthesis failed: {0}")]
    Synthesis(String),
}
