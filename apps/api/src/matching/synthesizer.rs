//! Listing Synthesizer — fabricates listings for one career field.
//!
//! All randomness comes from the caller's `Rng` and "today" is passed in, so a
//! seeded `StdRng` with a fixed date reproduces the same listings.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::matching::catalog::FieldEntry;
use crate::matching::relevance::skills_relevant_to;
use crate::matching::skills::{title_case, SkillSet};
use crate::matching::templates::{render_description, GENERIC_DESCRIPTION};
use crate::matching::SearchError;
use crate::models::listing::{Listing, MatchLevel, WorkMode};
use crate::models::preferences::Preferences;

/// Every listing starts with these, ahead of the user's own skills.
pub const BASELINE_SKILLS: &[&str] = &["Communication", "Teamwork", "Willingness to Learn"];
pub const DURATIONS: &[&str] = &["2 months", "3 months", "6 months"];
pub const STIPEND_RANGE: RangeInclusive<u32> = 1000..=3000;
pub const POSTED_WITHIN_DAYS: RangeInclusive<u64> = 1..=30;
pub const EXPERIENCE_REQUIRED: &str = "No experience required";
pub const LISTING_SOURCE: &str = "Skill-Matched Search";
/// Upper bound on `listings_per_field`, whatever the settings ask for.
pub const MAX_LISTINGS_PER_FIELD: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisSettings {
    pub listings_per_field: usize,
    /// Cap on user skills appended after `BASELINE_SKILLS`.
    pub max_relevant_skills: usize,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            listings_per_field: 2,
            max_relevant_skills: 3,
        }
    }
}

/// Synthesizes `listings_per_field` listings for `field`, never more than
/// `MAX_LISTINGS_PER_FIELD`.
///
/// Returns no listings when none of the user's skills relate to the field.
/// Scoring fields (`skill_match_count`, `skill_match_ratio`, `match_level`) are
/// left zeroed for the relevance filter to fill in.
pub fn synthesize<R: Rng + ?Sized>(
    field: &FieldEntry,
    skills: &SkillSet,
    preferences: &Preferences,
    settings: &SynthesisSettings,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Vec<Listing>, SearchError> {
    let matching = skills_relevant_to(field, skills);
    if matching.is_empty() {
        return Ok(Vec::new());
    }

    let listing_skills: Vec<String> = BASELINE_SKILLS
        .iter()
        .map(|s| s.to_string())
        .chain(
            matching
                .iter()
                .take(settings.max_relevant_skills)
                .map(|s| title_case(s)),
        )
        .collect();
    let template = field.description.unwrap_or(GENERIC_DESCRIPTION);

    let count = settings.listings_per_field.min(MAX_LISTINGS_PER_FIELD);
    let mut listings = Vec::with_capacity(count);
    for _ in 0..count {
        let company = field.companies.choose(rng).ok_or_else(|| {
            SearchError::Synthesis(format!("field '{}' has no companies", field.name))
        })?;
        let primary_skill = matching.choose(rng).ok_or_else(|| {
            SearchError::Synthesis(format!("no primary skill for field '{}'", field.name))
        })?;

        let work_mode = WorkMode::ALL
            .choose(rng)
            .copied()
            .ok_or_else(|| SearchError::Synthesis("no work modes to pick from".to_string()))?;
        let duration = DURATIONS
            .choose(rng)
            .ok_or_else(|| SearchError::Synthesis("no durations to pick from".to_string()))?;
        let stipend = rng.random_range(STIPEND_RANGE);
        let days_ago = rng.random_range(POSTED_WITHIN_DAYS);
        let posted_date = today.checked_sub_days(Days::new(days_ago)).ok_or_else(|| {
            SearchError::Synthesis(format!("posted date out of range ({days_ago} days before {today})"))
        })?;

        listings.push(Listing {
            id: random_id(rng),
            title: format!("{} Intern - {} Focus", field.name, title_case(primary_skill)),
            company: company.to_string(),
            location: preferences.location.clone(),
            work_mode,
            duration: duration.to_string(),
            stipend: format!("${stipend}/month"),
            description: render_description(template, field.name, company, primary_skill),
            skills: listing_skills.clone(),
            career_field: field.name.to_string(),
            experience_required: EXPERIENCE_REQUIRED.to_string(),
            posted_date,
            source: LISTING_SOURCE.to_string(),
            matching_skills: matching.iter().map(|s| s.to_string()).collect(),
            skill_match_count: 0,
            skill_match_ratio: 0.0,
            match_level: MatchLevel::Low,
        });
    }

    Ok(listings)
}

/// Version-4 UUID drawn from the injected RNG.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    Builder::from_random_bytes(bytes).into_uuid()
}
