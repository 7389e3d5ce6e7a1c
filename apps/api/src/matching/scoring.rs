//! Listing-level relevance scoring.
//!
//! Matches user skills against each listing's own `skills` list (not the field
//! keywords used by the gate), drops listings with no match and ranks the rest.

use std::cmp::Ordering;

use crate::matching::relevance::is_related;
use crate::matching::skills::SkillSet;
use crate::models::listing::{Listing, MatchLevel};

/// Scores, filters and sorts listings by descending `skill_match_ratio`.
///
/// The sort is stable: listings with equal ratios keep their input order.
pub fn score_and_filter(listings: Vec<Listing>, skills: &SkillSet) -> Vec<Listing> {
    let mut matched: Vec<Listing> = listings
        .into_iter()
        .filter_map(|mut listing| {
            let listing_skills: Vec<String> =
                listing.skills.iter().map(|s| s.to_lowercase()).collect();

            let matching: Vec<String> = skills
                .iter()
                .filter(|skill| listing_skills.iter().any(|ls| is_related(skill, ls)))
                .map(str::to_string)
                .collect();

            if matching.is_empty() {
                return None;
            }

            listing.skill_match_count = matching.len();
            listing.skill_match_ratio = match_ratio(matching.len(), skills.len());
            listing.match_level = MatchLevel::from_ratio(listing.skill_match_ratio);
            listing.matching_skills = matching;
            Some(listing)
        })
        .collect();

    matched.sort_by(|a, b| {
        b.skill_match_ratio
            .partial_cmp(&a.skill_match_ratio)
            .unwrap_or(Ordering::Equal)
    });

    matched
}

/// `count / total`, or 0.0 for an empty skill set.
pub fn match_ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::WorkMode;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn make_listing(title: &str, skills: &[&str]) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Museum".to_string(),
            location: "Remote".to_string(),
            work_mode: WorkMode::Remote,
            duration: "2 months".to_string(),
            stipend: "$1000/month".to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            career_field: "Art".to_string(),
            experience_required: "No experience required".to_string(),
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            source: "Skill-Matched Search".to_string(),
            matching_skills: vec![],
            skill_match_count: 0,
            skill_match_ratio: 0.0,
            match_level: MatchLevel::Low,
        }
    }

    #[test]
    fn test_non_matching_listing_is_dropped() {
        let skills = SkillSet::normalize(["painting"]);
        let listings = vec![make_listing("A", &["Communication", "Teamwork"])];
        assert!(score_and_filter(listings, &skills).is_empty());
    }

    #[test]
    fn test_count_and_ratio_are_set() {
        let skills = SkillSet::normalize(["painting", "drawing", "knitting", "teamwork"]);
        let listings = vec![make_listing("A", &["Teamwork", "Painting", "Drawing"])];

        let scored = score_and_filter(listings, &skills);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].skill_match_count, 3);
        assert!((scored[0].skill_match_ratio - 0.75).abs() < f64::EPSILON);
        assert_eq!(scored[0].match_level, MatchLevel::High);
        assert_eq!(
            scored[0].matching_skills,
            vec!["painting", "drawing", "teamwork"]
        );
    }

    #[test]
    fn test_matches_listing_skills_not_field_keywords() {
        // "communication" matches the baseline skill even though no field keyword covers it
        let skills = SkillSet::normalize(["communication"]);
        let listings = vec![make_listing("A", &["Communication"])];
        assert_eq!(score_and_filter(listings, &skills).len(), 1);
    }

    #[test]
    fn test_sorted_by_ratio_descending() {
        let skills = SkillSet::normalize(["painting", "drawing"]);
        let listings = vec![
            make_listing("low", &["Painting"]),
            make_listing("high", &["Painting", "Drawing"]),
        ];

        let scored = score_and_filter(listings, &skills);
        assert_eq!(scored[0].title, "high");
        assert_eq!(scored[1].title, "low");
    }

    #[test]
    fn test_equal_ratios_keep_input_order() {
        let skills = SkillSet::normalize(["painting", "drawing"]);
        let listings = vec![
            make_listing("first", &["Painting"]),
            make_listing("top", &["Painting", "Drawing"]),
            make_listing("second", &["Drawing"]),
            make_listing("third", &["Painting"]),
        ];

        let titles: Vec<String> = score_and_filter(listings, &skills)
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_match_ratio_zero_total() {
        assert_eq!(match_ratio(0, 0), 0.0);
        assert!((match_ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }
}
