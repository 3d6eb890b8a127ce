//! Axum route handler for the Ask API.
//!
//! Validates the question, short-circuits greetings without touching the
//! provider, and otherwise proxies to the LLM client with the profile-bound
//! system instruction.

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

const MAX_QUESTION_CHARS: usize = 400;

const GREETING_ANSWER: &str = "Hi! I'm PrasadGPT (speaking as Prasad Kadam). \
    I can tell you about my skills, projects, and experience — what do you want to know?";

static GREETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|hii|hiii|good morning|good afternoon|good evening|namaste|yo)\b")
        .expect("greeting regex is valid")
});

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn is_greeting(question: &str) -> bool {
    GREETING_RE.is_match(&normalize(question))
}

fn validate_question(question: &str) -> Result<&str, AppError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(AppError::Validation(format!(
            "question must be at most {MAX_QUESTION_CHARS} characters"
        )));
    }
    Ok(trimmed)
}

/// POST /ask
///
/// Body: `{"question": "..."}`. Returns `{"answer": "..."}`.
/// Greetings are answered locally; everything else goes to the provider.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = validate_question(&request.question)?;

    if is_greeting(question) {
        info!("greeting short-circuit, provider not called");
        return Ok(Json(AskResponse {
            answer: GREETING_ANSWER.to_string(),
        }));
    }

    let answer = state.llm.ask(question, &state.system_instruction).await?;

    Ok(Json(AskResponse { answer }))
}
