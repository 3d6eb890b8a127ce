/// LLM Client — the single point of entry for all Z.AI calls in the API.
///
/// ARCHITECTURAL RULE: No other module may call the Z.AI API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: glm-4.7-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all LLM calls.
pub const MODEL: &str = "glm-4.7-flash";
const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 800;
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Http(err)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

/// Error envelope returned by the provider. Z.AI uses the OpenAI-style
/// `{error: {message}}` shape, but some gateways flatten it to `{message}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: Option<ProviderErrorBody>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ProviderError>(body) {
        if let Some(inner) = parsed.error {
            return inner.message;
        }
        if let Some(message) = parsed.message {
            return message;
        }
    }
    if body.trim().is_empty() {
        format!("Z.AI request failed ({status})")
    } else {
        body.trim().to_string()
    }
}

/// Chat-completions client for the Z.AI API.
/// Retry-free: the ask route is a linear proxy; the caller decides what a
/// failure means for the user.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url,
        })
    }

    /// Sends one system + user message pair and returns the trimmed answer.
    pub async fn ask(&self, question: &str, system: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_error_message(status.as_u16(), &body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| LlmError::Api {
            status: status.as_u16(),
            message: format!("unparseable provider response: {e}"),
        })?;

        let choice = parsed.choices.first().ok_or(LlmError::EmptyContent)?;
        let answer = choice.message.content.trim().to_string();
        if answer.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call succeeded: finish_reason={:?}, prompt_tokens={:?}, completion_tokens={:?}",
                choice.finish_reason, usage.prompt_tokens, usage.completion_tokens
            );
        } else {
            debug!("LLM call succeeded: finish_reason={:?}", choice.finish_reason);
        }

        Ok(answer)
    }
}
