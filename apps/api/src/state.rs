use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::matching::search::ListingEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only engine; each request brings its own RNG.
    pub engine: Arc<ListingEngine>,
}

impl AppState {
    /// Fresh RNG for one request: seeded from `SEARCH_SEED` when configured,
    /// from OS entropy otherwise.
    pub fn request_rng(&self) -> StdRng {
        match self.config.search_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
