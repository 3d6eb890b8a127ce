use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Ask-route failures are all surfaced as 400 with a user-facing message; the
/// chat client classifies them from the status + message, so the wording of
/// the mapped upstream errors is part of the contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(err) => {
                tracing::error!("LLM error: {err}");
                let (code, message) = map_llm_error(err);
                (StatusCode::BAD_REQUEST, code, message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Maps provider failures to the fixed messages the widget matches on.
fn map_llm_error(err: &LlmError) -> (&'static str, String) {
    match err {
        LlmError::Timeout => (
            "UPSTREAM_TIMEOUT",
            "AI request timed out. Please try again.".to_string(),
        ),
        LlmError::Api { status: 401, .. } => {
            ("INVALID_API_KEY", "Invalid Z.AI API key.".to_string())
        }
        LlmError::Api { status: 429, .. } => (
            "RATE_LIMITED",
            "Z.AI rate limit hit. Please slow down.".to_string(),
        ),
        LlmError::Api { message, .. } => ("LLM_ERROR", message.clone()),
        LlmError::EmptyContent => ("LLM_ERROR", "No answer returned from Z.AI".to_string()),
        LlmError::Http(e) => ("LLM_ERROR", format!("Z.AI request failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_maps_to_fixed_message() {
        let err = LlmError::Api {
            status: 401,
            message: "Incorrect API key".to_string(),
        };
        let (code, message) = map_llm_error(&err);
        assert_eq!(code, "INVALID_API_KEY");
        assert_eq!(message, "Invalid Z.AI API key.");
    }

    #[test]
    fn test_rate_limit_maps_to_fixed_message() {
        let err = LlmError::Api {
            status: 429,
            message: "slow down".to_string(),
        };
        let (code, message) = map_llm_error(&err);
        assert_eq!(code, "RATE_LIMITED");
        assert_eq!(message, "Z.AI rate limit hit. Please slow down.");
    }

    #[test]
    fn test_other_api_errors_surface_upstream_message() {
        let err = LlmError::Api {
            status: 500,
            message: "model overloaded".to_string(),
        };
        let (code, message) = map_llm_error(&err);
        assert_eq!(code, "LLM_ERROR");
        assert_eq!(message, "model overloaded");
    }

    #[test]
    fn test_timeout_maps_to_retry_message() {
        let (code, message) = map_llm_error(&LlmError::Timeout);
        assert_eq!(code, "UPSTREAM_TIMEOUT");
        assert_eq!(message, "AI request timed out. Please try again.");
    }
}
