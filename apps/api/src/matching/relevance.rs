//! Field-level relevance gate.
//!
//! A skill is related to a term when either contains the other. The test is
//! loose: "graphic design" reaches Art through "graphic", and "web" reaches
//! Engineering through "web development".

use crate::matching::catalog::FieldEntry;
use crate::matching::skills::SkillSet;

/// Bidirectional substring test. Both sides are expected lowercase.
pub fn is_related(skill: &str, term: &str) -> bool {
    skill.contains(term) || term.contains(skill)
}

/// User skills related to any of the field's keywords, in skill-set order.
pub fn skills_relevant_to<'a>(field: &FieldEntry, skills: &'a SkillSet) -> Vec<&'a str> {
    skills
        .iter()
        .filter(|skill| field.keywords.iter().any(|kw| is_related(skill, kw)))
        .collect()
}

/// True when at least one user skill is related to the field.
pub fn field_matches_skills(field: &FieldEntry, skills: &SkillSet) -> bool {
    skills
        .iter()
        .any(|skill| field.keywords.iter().any(|kw| is_related(skill, kw)))
}
