//! Regex intent detection for the offline fallback.
//!
//! First match wins, in a fixed priority order: pricing, greeting, hiring,
//! tech, project, contact, generic. Pricing is deliberately checked first so
//! it is never shadowed by the broad tech/project vocabularies, and replies
//! only ever mention money when the user explicitly asked.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Pricing,
    Greeting,
    Hiring,
    Tech,
    Project,
    Contact,
    Generic,
}

static PRICING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(price|pricing|rate|cost|charges|fees|budget|quote|quotation)").unwrap()
});
// Word-bounded: an unanchored alternation would match "hi" inside "hiring"
// and "yo" inside "you".
static GREETING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(hi|hello|hey|yo|good (morning|evening|afternoon))\b").unwrap());
static HIRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(hire|hiring|job|role|position|open to work|resume|cv|interview|notice)").unwrap()
});
static TECH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(stack|tech|skills|typescript|javascript|react|next|node|express|mongodb|postgres|sql|angular|tailwind)",
    )
    .unwrap()
});
static PROJECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(project|build|mvp|app|website|dashboard|saas|api|serverless|cloudflare|vercel)")
        .unwrap()
});
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(contact|email|reach|linkedin|github)").unwrap());

pub fn detect_intent(raw: &str) -> Intent {
    let text = raw.to_lowercase();

    if PRICING_RE.is_match(&text) {
        Intent::Pricing
    } else if GREETING_RE.is_match(&text) {
        Intent::Greeting
    } else if HIRING_RE.is_match(&text) {
        Intent::Hiring
    } else if TECH_RE.is_match(&text) {
        Intent::Tech
    } else if PROJECT_RE.is_match(&text) {
        Intent::Project
    } else if CONTACT_RE.is_match(&text) {
        Intent::Contact
    } else {
        Intent::Generic
    }
}

/// Coarse per-message signals accumulated into [`crate::reply::Memory`]
/// across turns. A signal, once seen, stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub wants_remote: bool,
    pub wants_full_time: bool,
    pub wants_frontend: bool,
    pub wants_backend: bool,
    pub wants_serverless: bool,
    pub mentions_mongo: bool,
    pub mentions_postgres: bool,
}

static FULL_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(full[-\s]?time|permanent|job)").unwrap());
static FRONTEND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(frontend|ui|ux|react|next)").unwrap());
static BACKEND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(backend|api|node|express)").unwrap());
static SERVERLESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(serverless|edge|cloudflare|workers)").unwrap());
static POSTGRES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(postgres|postgresql)").unwrap());

pub fn extract_signals(raw: &str) -> Signals {
    let text = raw.to_lowercase();
    Signals {
        wants_remote: text.contains("remote"),
        wants_full_time: FULL_TIME_RE.is_match(&text),
        wants_frontend: FRONTEND_RE.is_match(&text),
        wants_backend: BACKEND_RE.is_match(&text),
        wants_serverless: SERVERLESS_RE.is_match(&text),
        mentions_mongo: text.contains("mongo"),
        mentions_postgres: POSTGRES_RE.is_match(&text),
    }
}

impl Signals {
    /// Merge: a later message never clears what an earlier one established.
    pub fn merge(self, newer: Signals) -> Signals {
        Signals {
            wants_remote: self.wants_remote || newer.wants_remote,
            wants_full_time: self.wants_full_time || newer.wants_full_time,
            wants_frontend: self.wants_frontend || newer.wants_frontend,
            wants_backend: self.wants_backend || newer.wants_backend,
            wants_serverless: self.wants_serverless || newer.wants_serverless,
            mentions_mongo: self.mentions_mongo || newer.mentions_mongo,
            mentions_postgres: self.mentions_postgres || newer.mentions_postgres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_wins_over_tech() {
        // "stack" alone is tech, but an explicit cost question must be pricing
        assert_eq!(
            detect_intent("what's the cost for a React stack app?"),
            Intent::Pricing
        );
        assert_eq!(detect_intent("your rates?"), Intent::Pricing);
        assert_eq!(detect_intent("can you send me a quote"), Intent::Pricing);
    }

    #[test]
    fn test_greeting_wins_over_hiring() {
        assert_eq!(detect_intent("hey, are you open to a job?"), Intent::Greeting);
        assert_eq!(detect_intent("good morning"), Intent::Greeting);
    }

    #[test]
    fn test_hiring_intent() {
        assert_eq!(detect_intent("are you open to work?"), Intent::Hiring);
        // "hiring" must not be eaten by the "hi" greeting pattern
        assert_eq!(detect_intent("are you hiring?"), Intent::Hiring);
        assert_eq!(detect_intent("we have a position for you"), Intent::Hiring);
        assert_eq!(detect_intent("send me your resume"), Intent::Hiring);
    }

    #[test]
    fn test_tech_intent() {
        assert_eq!(detect_intent("what is your tech stack"), Intent::Tech);
        assert_eq!(detect_intent("do you know typescript"), Intent::Tech);
    }

    #[test]
    fn test_project_intent() {
        assert_eq!(detect_intent("I want to scope an mvp"), Intent::Project);
        assert_eq!(detect_intent("can you make a dashboard"), Intent::Project);
    }

    #[test]
    fn test_contact_intent() {
        assert_eq!(detect_intent("where can I reach you"), Intent::Contact);
        // "github" with nothing tech-flavored around it
        assert_eq!(detect_intent("share your github"), Intent::Contact);
    }

    #[test]
    fn test_generic_when_nothing_matches() {
        assert_eq!(detect_intent("tell me something"), Intent::Generic);
    }

    #[test]
    fn test_extract_signals() {
        let s = extract_signals("Looking for a remote backend dev, we use Postgres");
        assert!(s.wants_remote);
        assert!(s.wants_backend);
        assert!(s.mentions_postgres);
        assert!(!s.wants_serverless);
        assert!(!s.mentions_mongo);
    }

    #[test]
    fn test_full_time_matches_hyphen_and_space() {
        assert!(extract_signals("full-time role").wants_full_time);
        assert!(extract_signals("full time role").wants_full_time);
        assert!(extract_signals("fulltime role").wants_full_time);
    }

    #[test]
    fn test_signals_merge_is_sticky() {
        let earlier = extract_signals("remote frontend work");
        let later = extract_signals("actually let's talk mongo");
        let merged = earlier.merge(later);
        assert!(merged.wants_remote);
        assert!(merged.wants_frontend);
        assert!(merged.mentions_mongo);
    }
}
