pub const GREETING_REPLY: &str = "Hello! I'm your Viinterns assistant. I can help you find no-experience internships, improve your resume, or prepare for interviews.";

pub const INTERNSHIP_REPLY: &str = "I can help you find internships that require no prior experience! Check your dashboard for personalized recommendations.";

pub const RESUME_REPLY: &str = "For no-experience positions, focus on transferable skills, education, projects, and willingness to learn in your resume.";

pub const DEFAULT_REPLY: &str = "I specialize in helping students find no-experience-required internships! How can I assist you today?";

/// Picks a canned reply. Triggers are checked in order: greeting, internship, resume.
///
/// "hi" only counts as a whole word so that words like "internship" or "this"
/// do not read as greetings.
pub fn reply(message: &str) -> &'static str {
    let message = message.to_lowercase();

    let is_greeting = message.contains("hello")
        || message
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "hi");

    if is_greeting {
        GREETING_REPLY
    } else if message.contains("internship") {
        INTERNSHIP_REPLY
    } else if message.contains("resume") {
        RESUME_REPLY
    } else {
        DEFAULT_REPLY
    }
}
