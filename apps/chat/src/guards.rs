//! Local pre-filters that answer a message before any backend call.
//!
//! Three cheap checks keep obvious non-questions away from the LLM: general
//! trivia with no self-reference, requests to dump portfolio code, and
//! questions about technologies outside the resume stack.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::PROFILE;

pub const OFF_TOPIC_REPLY: &str = "I'm PrasadGPT — I only know about Prasad Kadam. \
    Ask me about my skills, projects, or experience.";

pub const CODE_REQUEST_REPLY: &str = "I can't provide full code or HTML here. \
    Please check my live portfolio and GitHub for examples of my work.";

static SELF_REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(prasad|kadam|you|your|portfolio|resume|cv)").unwrap());

static TRIVIA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(capital|president|prime minister|population|weather|temperature|forecast)")
        .unwrap()
});

static CURRENT_EVENTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(news|stock|crypto|bitcoin|football|cricket|movie|song|lyrics|math|equation)")
        .unwrap()
});

static CODE_REQUEST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(code|html|css|javascript|typescript|react component|return me|give me|generate|build).*portfolio",
    )
    .unwrap()
});

static OUT_OF_STACK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(rust|golang|php|laravel|django|flask|rails|ruby|swift|kotlin|android|ios|flutter|swiftui)\b",
    )
    .unwrap()
});

/// Trivia or current-events questions that never mention the profile.
pub fn is_off_topic(raw: &str) -> bool {
    let t = raw.trim().to_lowercase();
    if SELF_REFERENCE_RE.is_match(&t) {
        return false;
    }
    TRIVIA_RE.is_match(&t) || CURRENT_EVENTS_RE.is_match(&t)
}

/// "Give me the code/HTML of your portfolio" style requests.
pub fn is_code_like_request(raw: &str) -> bool {
    CODE_REQUEST_RE.is_match(&raw.trim().to_lowercase())
}

/// Returns the first mentioned technology that is not in the resume stack.
pub fn out_of_stack_tech(raw: &str) -> Option<String> {
    let t = raw.trim().to_lowercase();
    OUT_OF_STACK_RE
        .captures(&t)
        .map(|caps| caps[1].to_string())
}

pub fn out_of_stack_reply(tech: &str) -> String {
    format!(
        "I haven't used {tech} yet, but I can ramp quickly. My core stack is React/Next.js, \
         Node.js/Express, TypeScript, MongoDB/PostgreSQL. If the role needs {tech}, I'm \
         confident I can pick it up fast.\n\nContact: {} | {}",
        PROFILE.email, PROFILE.linkedin
    )
}
