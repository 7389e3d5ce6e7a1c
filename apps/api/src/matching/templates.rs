// Description templates for synthesized listings.
// Placeholders: {skill} (primary skill, lowercase), {company}, {field}.

pub const ENGINEERING_DESCRIPTION: &str = "Perfect for beginners with {skill} interest! Join {company} to apply your {skill} knowledge in real projects. Comprehensive training provided.";

pub const MEDICINE_DESCRIPTION: &str = "Ideal for students with {skill} background. Gain healthcare experience at {company} with focus on {skill} applications.";

pub const BUSINESS_DESCRIPTION: &str = "Apply your {skill} skills in business context at {company}. Learn practical business operations with your existing knowledge.";

pub const SCIENCE_DESCRIPTION: &str = "Research internship at {company} focusing on {skill} applications. Perfect for science students with relevant interest.";

pub const ART_DESCRIPTION: &str = "Creative internship leveraging your {skill} abilities. Work on artistic projects at {company} with professional guidance.";

/// Used for fields that carry no template of their own.
pub const GENERIC_DESCRIPTION: &str =
    "Apply your {skill} skills at {company}. {field} internship with comprehensive training and mentorship.";

pub fn render_description(template: &str, field: &str, company: &str, skill: &str) -> String {
    template
        .replace("{skill}", skill)
        .replace("{company}", company)
        .replace("{field}", field)
}
