//! HTTP client for the ask endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with an error envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response without an answer field.
    #[error("No answer returned from backend")]
    MissingAnswer { status: u16 },
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Transport(_) => None,
            BackendError::Api { status, .. } => Some(*status),
            BackendError::MissingAnswer { status } => Some(*status),
        }
    }
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: Option<String>,
    error: Option<ErrorEnvelope>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
    Structured { message: String },
    Plain(String),
}

impl ErrorEnvelope {
    fn into_message(self) -> String {
        match self {
            ErrorEnvelope::Structured { message } => message,
            ErrorEnvelope::Plain(message) => message,
        }
    }
}

pub struct AskClient {
    client: reqwest::Client,
    base_url: String,
}

impl AskClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POSTs the question and returns the answer, or a typed error carrying
    /// the status + message the failure classifier works from.
    pub async fn ask(&self, question: &str) -> Result<String, BackendError> {
        let url = format!("{}/ask", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let parsed: Option<AskResponse> = serde_json::from_str(&body).ok();

        if !(200..300).contains(&status) {
            let message = parsed
                .and_then(|p| p.error)
                .map(ErrorEnvelope::into_message)
                .unwrap_or_else(|| format!("Request failed ({status})"));
            return Err(BackendError::Api { status, message });
        }

        match parsed.and_then(|p| p.answer) {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Err(BackendError::MissingAnswer { status }),
        }
    }
}
