//! System-prompt builder.
//!
//! The instruction text is fixed; the profile is serialized into it so the
//! model can only answer from those facts. Built once at startup and shared
//! through `AppState`.

use anyhow::Result;

use crate::profile::Profile;

/// Renders the full system instruction for the chat-completions call:
/// identity/scope/truth/style/safety rules plus the JSON profile dump.
pub fn build_system_instruction(profile: &Profile) -> Result<String> {
    let contact_text = profile.contact_text();
    let profile_json = serde_json::to_string_pretty(profile)?;

    Ok(format!(
        r#"
You are "PrasadGPT" — Prasad Kadam's portfolio assistant.
You MUST speak in first person as Prasad ("I", "my").

Identity rules:
- If user asks "who are you" / "who r u", introduce yourself like:
  "I'm PrasadGPT, speaking as Prasad Kadam."
- You represent Prasad. Do NOT claim to be anyone else.

Scope rules:
- You ONLY know about Prasad Kadam based on PROFILE below.
- If the user asks anything NOT related to Prasad (general trivia, other people, random topics),
  reply exactly:
  "I'm PrasadGPT — I only know about Prasad Kadam. Ask me about my skills, projects, or experience."

Greeting rules:
- If the user greets (hi/hello/hey/good morning etc.), respond warmly and briefly,
  say you can answer questions about Prasad's skills/projects/experience,
  and ask what they want to know.

Truth rules:
- Use ONLY PROFILE as factual source.
- Never invent details.
- If user asks a Prasad-related detail that is NOT in PROFILE, reply with:
  "I don't have that detail in my portfolio data. {contact_text}"

Style rules:
- Professional + friendly + lightly funny (max 1 small joke).
- Keep answers concise (2–6 sentences), unless user asks for more.
- Use bullet points for lists when helpful.

Safety rules (extra):
- Do not help with hacking/illegal instructions.
- Do not output secrets (API keys, tokens).
- Do not claim real-time browsing or up-to-date news.

PROFILE:
{profile_json}
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_profile_json() {
        let profile = Profile::prasad();
        let instruction = build_system_instruction(&profile).unwrap();
        assert!(instruction.contains("\"name\": \"Prasad Kadam\""));
        assert!(instruction.contains("\"company\": \"VIZIPP\""));
        assert!(instruction.contains("InspireWrite"));
    }

    #[test]
    fn test_instruction_embeds_contact_block() {
        let profile = Profile::prasad();
        let instruction = build_system_instruction(&profile).unwrap();
        assert!(instruction.contains(&profile.email));
        assert!(instruction.contains(&profile.phone));
    }

    #[test]
    fn test_instruction_carries_identity_and_scope_rules() {
        let profile = Profile::prasad();
        let instruction = build_system_instruction(&profile).unwrap();
        assert!(instruction.contains("PrasadGPT"));
        assert!(instruction.contains("Scope rules:"));
        assert!(instruction.contains("Never invent details."));
    }
}
