//! Search Orchestrator — the public entry point of the matching engine.
//!
//! `try_search` surfaces failures as `SearchError`; `search` never fails and turns
//! any error into an empty result carrying a diagnostic.

use chrono::NaiveDate;
use rand::Rng;
use serde_json::Value;
use tracing::{debug, warn};

use crate::matching::catalog::FieldCatalog;
use crate::matching::dedup::dedupe;
use crate::matching::relevance::field_matches_skills;
use crate::matching::scoring::score_and_filter;
use crate::matching::skills::SkillSet;
use crate::matching::synthesizer::{synthesize, SynthesisSettings};
use crate::matching::SearchError;
use crate::models::listing::Listing;
use crate::models::preferences::Preferences;

/// Hard ceiling on listings per search; `max_results` can only lower it.
pub const MAX_RESULTS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub synthesis: SynthesisSettings,
    pub max_results: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            synthesis: SynthesisSettings::default(),
            max_results: MAX_RESULTS,
        }
    }
}

/// Ranked listings plus anything worth telling the caller about the search
/// (skipped fields, swallowed failures).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub listings: Vec<Listing>,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListingEngine {
    catalog: FieldCatalog,
    settings: EngineSettings,
}

impl ListingEngine {
    pub fn new(catalog: FieldCatalog, settings: EngineSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Runs a search and never fails: errors are logged and returned as an empty
    /// listing set with a diagnostic.
    pub fn search<R: Rng + ?Sized>(
        &self,
        skills: &[String],
        career_fields: &[String],
        preferences: &Value,
        rng: &mut R,
        today: NaiveDate,
    ) -> SearchOutcome {
        self.try_search(skills, career_fields, preferences, rng, today)
            .unwrap_or_else(|e| {
                warn!("Search failed, returning no listings: {e}");
                SearchOutcome {
                    listings: Vec::new(),
                    diagnostics: vec![e.to_string()],
                }
            })
    }

    /// Algorithm:
    /// 1. Normalize skills; none left → empty outcome
    /// 2. Decode preferences
    /// 3. For each requested field (caller order): skip unknown fields, skip fields
    ///    no skill relates to, synthesize the rest
    /// 4. Score/filter/sort → dedupe → truncate to `max_results` (at most `MAX_RESULTS`)
    pub fn try_search<R: Rng + ?Sized>(
        &self,
        skills: &[String],
        career_fields: &[String],
        preferences: &Value,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<SearchOutcome, SearchError> {
        let skills = SkillSet::normalize(skills);
        if skills.is_empty() {
            return Ok(SearchOutcome::default());
        }

        let preferences = Preferences::from_value(preferences)?;
        let mut diagnostics = Vec::new();
        let mut candidates = Vec::new();

        for name in career_fields {
            let Some(field) = self.catalog.lookup(name) else {
                debug!("Skipping unknown career field '{name}'");
                diagnostics.push(format!("Unknown career field '{name}' skipped"));
                continue;
            };

            if !field_matches_skills(field, &skills) {
                debug!("No skills relate to field '{name}'");
                continue;
            }

            candidates.extend(synthesize(
                field,
                &skills,
                &preferences,
                &self.settings.synthesis,
                rng,
                today,
            )?);
        }

        let mut listings = dedupe(score_and_filter(candidates, &skills));
        listings.truncate(self.settings.max_results.min(MAX_RESULTS));

        debug!(
            "Search over {} skills and {} fields produced {} listings",
            skills.len(),
            career_fields.len(),
            listings.len()
        );

        Ok(SearchOutcome {
            listings,
            diagnostics,
        })
    }
}
