use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Where the intern works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkMode {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::Remote, WorkMode::Hybrid, WorkMode::OnSite];
}

/// Coarse match band shown next to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    #[serde(rename = "High Match")]
    High,
    #[serde(rename = "Medium Match")]
    Medium,
    #[serde(rename = "Low Match")]
    Low,
}

impl MatchLevel {
    /// High ≥ 0.7, Medium ≥ 0.4, Low below that.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.7 {
            MatchLevel::High
        } else if ratio >= 0.4 {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }
}

/// A synthesized internship listing. Built per search call and never persisted.
///
/// `matching_skills`, `skill_match_count`, `skill_match_ratio` and `match_level`
/// are only meaningful after listing-level scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub work_mode: WorkMode,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub skills: Vec<String>,
    pub career_field: String,
    pub experience_required: String,
    pub posted_date: NaiveDate,
    pub source: String,
    pub matching_skills: Vec<String>,
    pub skill_match_count: usize,
    pub skill_match_ratio: f64,
    pub match_level: MatchLevel,
}
