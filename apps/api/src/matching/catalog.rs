//! Field Catalog — the static table of career fields the engine can synthesize for.
//!
//! Compiled into the binary; never mutated. Lookups are case-sensitive exact matches.

use crate::matching::templates::{
    ART_DESCRIPTION, BUSINESS_DESCRIPTION, ENGINEERING_DESCRIPTION, MEDICINE_DESCRIPTION,
    SCIENCE_DESCRIPTION,
};

/// One career field: the keywords that make a skill relevant to it and the
/// employers listings are attributed to.
#[derive(Debug)]
pub struct FieldEntry {
    pub name: &'static str,
    /// Lowercase terms, matched by substring in either direction.
    pub keywords: &'static [&'static str],
    pub companies: &'static [&'static str],
    /// Field-specific description template; `None` uses the generic one.
    pub description: Option<&'static str>,
}

pub const FIELDS: &[FieldEntry] = &[
    FieldEntry {
        name: "Engineering",
        keywords: &[
            "software",
            "developer",
            "engineer",
            "programming",
            "coding",
            "tech",
            "computer science",
            "web development",
            "python",
            "java",
            "javascript",
        ],
        companies: &[
            "Google",
            "Microsoft",
            "Amazon",
            "Meta",
            "Netflix",
            "Tech Startup",
            "Innovation Labs",
        ],
        description: Some(ENGINEERING_DESCRIPTION),
    },
    FieldEntry {
        name: "Medicine",
        keywords: &[
            "medical",
            "healthcare",
            "clinical",
            "hospital",
            "nursing",
            "pharmacy",
            "biomedical",
        ],
        companies: &[
            "City Hospital",
            "Medical Center",
            "Health Clinic",
            "Research Institute",
        ],
        description: Some(MEDICINE_DESCRIPTION),
    },
    FieldEntry {
        name: "Business",
        keywords: &[
            "business",
            "management",
            "marketing",
            "sales",
            "consulting",
            "operations",
            "administration",
        ],
        companies: &[
            "Business Corp",
            "Consulting Firm",
            "Startup Hub",
            "Enterprise Solutions",
        ],
        description: Some(BUSINESS_DESCRIPTION),
    },
    FieldEntry {
        name: "Science",
        keywords: &[
            "research",
            "laboratory",
            "biology",
            "chemistry",
            "physics",
            "scientist",
            "environmental",
        ],
        companies: &[
            "Research Lab",
            "Science Institute",
            "Environmental Org",
            "Biotech Company",
        ],
        description: Some(SCIENCE_DESCRIPTION),
    },
    FieldEntry {
        name: "Art",
        keywords: &[
            "art",
            "design",
            "creative",
            "painting",
            "drawing",
            "illustration",
            "graphic",
        ],
        companies: &["Art Gallery", "Design Studio", "Creative Agency", "Museum"],
        description: Some(ART_DESCRIPTION),
    },
    FieldEntry {
        name: "Education",
        keywords: &[
            "teaching",
            "education",
            "tutor",
            "instructor",
            "academic",
            "curriculum",
        ],
        companies: &[
            "School District",
            "Learning Center",
            "Education Non-profit",
            "Online Education",
        ],
        description: None,
    },
];

/// Read-only view over a field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldCatalog {
    fields: &'static [FieldEntry],
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FieldCatalog {
    pub const fn new(fields: &'static [FieldEntry]) -> Self {
        Self { fields }
    }

    /// The catalog shipped with the service.
    pub const fn builtin() -> Self {
        Self::new(FIELDS)
    }

    pub fn lookup(&self, name: &str) -> Option<&'static FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldEntry> {
        self.fields.iter()
    }
}
