//! Offline reply engine.
//!
//! When the backend is unreachable the widget still answers, from the same
//! resume facts, by rendering one template per detected intent. A small
//! `Memory` carries the last intent and accumulated signals across turns so
//! follow-up replies can pick a focus (frontend vs backend) or a best-matching
//! project without the user repeating themselves.

use rand::seq::SliceRandom;

use crate::intent::{detect_intent, extract_signals, Intent, Signals};
use crate::profile::{project_named, PRICING, PROFILE};

const ECHO_MAX_CHARS: usize = 120;

#[derive(Debug, Clone, Default)]
pub struct Memory {
    pub last_intent: Option<Intent>,
    pub last_user_message: String,
    pub signals: Signals,
}

#[derive(Debug)]
pub struct Reply {
    pub content: String,
    pub next_memory: Memory,
}

fn pick<'a>(options: &[&'a str]) -> &'a str {
    options
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Short messages get echoed back before the templated body, like the widget
/// does; long ones don't.
fn echo_prefix(user_text: &str) -> String {
    if !user_text.is_empty() && user_text.chars().count() < ECHO_MAX_CHARS {
        format!("You said: \"{user_text}\".\n\n")
    } else {
        String::new()
    }
}

pub fn build_reply(prompt: &str, memory: &Memory) -> Reply {
    let intent = detect_intent(prompt);
    let signals = extract_signals(prompt);
    let user_text = prompt.trim().to_string();
    let echo = echo_prefix(&user_text);

    let next_memory = Memory {
        last_intent: Some(intent),
        last_user_message: user_text,
        signals: memory.signals.merge(signals),
    };

    let content = match intent {
        Intent::Greeting => greeting(),
        Intent::Hiring => hiring(&echo, &next_memory.signals),
        Intent::Tech => tech(&echo, &next_memory.signals),
        Intent::Project => project(&echo),
        Intent::Contact => contact(),
        Intent::Pricing => pricing(&echo),
        Intent::Generic => generic(&echo),
    };

    Reply {
        content,
        next_memory,
    }
}

fn greeting() -> String {
    pick(&[
        "Hey 👋 I'm PrasadGPT.\nI'm a Full Stack Developer (React/Next.js, Node/Express, \
         MongoDB/PostgreSQL).\n\nAre you here for hiring, or do you want to talk about a project?",
        "Hi! 👋 I'm PrasadGPT — built from my real resume.\n\nAsk me about my experience, \
         projects, tech stack, or role fit.",
    ])
    .to_string()
}

fn hiring(echo: &str, signals: &Signals) -> String {
    let focus = if signals.wants_frontend {
        "Frontend/React"
    } else if signals.wants_backend {
        "Backend/API"
    } else {
        "Full Stack"
    };
    let exp = &PROFILE.experience[0];

    format!(
        "{echo}Yes — I'm open to roles (freelancing is secondary).\n\n\
         Quick fit summary ({focus}):\n\
         • {} — {}\n\
         • Built React/Angular UI components + Node/Express REST APIs\n\
         • JWT auth + Zod validation + MongoDB/PostgreSQL\n\
         • Improved API latency by ~25% on high-traffic routes\n\n\
         If you paste a JD or tell me the stack + responsibilities, I'll map my experience \
         to it in a recruiter-friendly way.",
        exp.company, exp.role
    )
}

/// Picks the project that best matches the accumulated signals.
fn best_project(signals: &Signals) -> &'static crate::profile::Project {
    if signals.wants_serverless {
        project_named("InspireWrite")
    } else if signals.wants_backend {
        project_named("PayTM Clone")
    } else {
        project_named("BookAtlas")
    }
}

fn tech(echo: &str, signals: &Signals) -> String {
    let best = best_project(signals);

    let mut out = format!(
        "{echo}Here's my core stack:\n\
         • Frontend: {}\n\
         • Backend: {}\n\
         • DB/Tools: {}\n\n\
         If you want a project match, best example:\n\
         • {} ({}) — {}\n",
        PROFILE.skills.frontend.join(", "),
        PROFILE.skills.backend.join(", "),
        PROFILE.skills.db_tools.join(", "),
        best.name,
        best.period,
        best.stack.join(", "),
    );
    for bullet in best.bullets.iter().take(2) {
        out.push_str(&format!("  - {bullet}\n"));
    }
    out.push_str("\nWant links to the live demo + GitHub for that one?");
    out
}

fn project(echo: &str) -> String {
    let followups = [
        "1) What are you building (1–2 lines)?",
        "2) Who are the users?",
        "3) Must-have features for v1?",
        "4) Any deadline?",
        "5) Do you prefer MongoDB or PostgreSQL (or you're flexible)?",
    ];
    let questions = followups
        .iter()
        .map(|q| format!("• {q}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{echo}Nice — I can help you shape scope + architecture based on what I've shipped.\n\n\
         To make this concrete, answer any 2–3:\n{questions}\n\n\
         Then I'll reply with:\n• suggested v1 scope\n• recommended stack\n\
         • milestones (what to build first)\n\n\
         (And I'll only discuss pricing if you ask.)"
    )
}

fn contact() -> String {
    format!(
        "You can reach me here:\n\n\
         • Email: {}\n\
         • Location: {}\n\
         • LinkedIn: {}\n\
         • GitHub: {}\n\n\
         If you share the role + requirements, I can also draft a tight \"why me\" message \
         you can send to recruiters.",
        PROFILE.email, PROFILE.location, PROFILE.linkedin, PROFILE.github
    )
}

/// Strictly gated: only rendered when the intent itself is Pricing.
fn pricing(echo: &str) -> String {
    let blocks = PRICING
        .iter()
        .map(|tier| {
            let includes = tier
                .includes
                .iter()
                .map(|i| format!("  - {i}"))
                .collect::<Vec<_>>()
                .join("\n");
            let lead = if tier.start == "Custom" {
                format!("• {}: {}", tier.title, tier.start)
            } else {
                format!("• {}: starts {}", tier.title, tier.start)
            };
            format!("{lead}\n{includes}")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{echo}Sure — pricing (since you asked) 💰\n\n{blocks}\n\n\
         If you share scope + deadline, I'll tell you which tier fits and what to ship in v1."
    )
}

fn generic(echo: &str) -> String {
    let nudge = pick(&[
        "Do you want to talk hiring/role fit, or a project?",
        "Are you looking to hire me, or are you scoping a build?",
        "Tell me what you need: role fit, tech stack, or project planning.",
    ]);

    // Never mention pricing unprompted.
    format!(
        "{echo}Got it.\n\n\
         I can help with:\n\
         • role fit (resume-based)\n\
         • my tech stack & strongest projects\n\
         • scoping your app into milestones\n\n\
         {nudge}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_reply_introduces_the_bot() {
        let reply = build_reply("hello", &Memory::default());
        assert_eq!(reply.next_memory.last_intent, Some(Intent::Greeting));
        assert!(reply.content.contains("PrasadGPT"));
    }

    #[test]
    fn test_echo_prefix_only_for_short_messages() {
        let reply = build_reply("are you open to work?", &Memory::default());
        assert!(reply.content.starts_with("You said: \"are you open to work?\"."));

        let long = "are you open to work? ".repeat(10);
        let reply = build_reply(&long, &Memory::default());
        assert!(!reply.content.starts_with("You said:"));
    }

    #[test]
    fn test_hiring_focus_follows_signals() {
        let reply = build_reply("hiring for a frontend role", &Memory::default());
        assert!(reply.content.contains("Quick fit summary (Frontend/React)"));

        let reply = build_reply("hiring a backend engineer", &Memory::default());
        assert!(reply.content.contains("Quick fit summary (Backend/API)"));

        let reply = build_reply("are you open to work?", &Memory::default());
        assert!(reply.content.contains("Quick fit summary (Full Stack)"));
    }

    #[test]
    fn test_hiring_focus_remembers_earlier_signals() {
        // Frontend was mentioned a turn ago; the follow-up doesn't repeat it.
        let first = build_reply("we're a frontend shop", &Memory::default());
        let second = build_reply("ok — is prasad open to a position?", &first.next_memory);
        assert!(second.content.contains("Quick fit summary (Frontend/React)"));
    }

    #[test]
    fn test_tech_reply_picks_project_by_signal() {
        let reply = build_reply("serverless stack experience?", &Memory::default());
        assert!(reply.content.contains("InspireWrite"));

        let reply = build_reply("backend stack?", &Memory::default());
        assert!(reply.content.contains("PayTM Clone"));

        let reply = build_reply("what skills do you have", &Memory::default());
        assert!(reply.content.contains("BookAtlas"));
    }

    #[test]
    fn test_pricing_strictly_gated() {
        // Pricing appears on the pricing intent...
        let reply = build_reply("what do you charge? send a quote", &Memory::default());
        assert_eq!(reply.next_memory.last_intent, Some(Intent::Pricing));
        assert!(reply.content.contains("₹5,399"));

        // ...and on nothing else, generic nudges included.
        for prompt in [
            "hello",
            "are you hiring?",
            "what skills do you have",
            "scoping an mvp",
            "how do I reach you by email",
            "tell me something",
        ] {
            let reply = build_reply(prompt, &Memory::default());
            assert!(
                !reply.content.contains('₹'),
                "pricing leaked for: {prompt}"
            );
        }
    }

    #[test]
    fn test_contact_reply_lists_channels() {
        let reply = build_reply("how can I reach out? contact info", &Memory::default());
        assert!(reply.content.contains(PROFILE.email));
        assert!(reply.content.contains(PROFILE.linkedin));
        assert!(reply.content.contains(PROFILE.github));
    }

    #[test]
    fn test_memory_records_last_message_and_intent() {
        let reply = build_reply("what is your tech stack", &Memory::default());
        assert_eq!(reply.next_memory.last_intent, Some(Intent::Tech));
        assert_eq!(reply.next_memory.last_user_message, "what is your tech stack");
    }
}
