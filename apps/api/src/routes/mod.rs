pub mod ask;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ask", post(ask::handle_ask))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::profile::Profile;
    use crate::prompt::build_system_instruction;

    /// State with an LLM client pointing nowhere. Tests below only exercise
    /// paths that never reach the provider.
    fn test_state() -> AppState {
        let config = Config {
            zai_api_key: "test-key".to_string(),
            zai_base_url: "http://127.0.0.1:1/unreachable".to_string(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            port: 3000,
            rust_log: "info".to_string(),
        };
        let llm = LlmClient::new(config.zai_api_key.clone(), config.zai_base_url.clone()).unwrap();
        let profile = Profile::prasad();
        let system_instruction: Arc<str> =
            build_system_instruction(&profile).unwrap().into();
        AppState {
            llm,
            config,
            system_instruction,
        }
    }

    async fn post_ask(question: &str) -> (StatusCode, Value) {
        let app = build_router(test_state());
        let body = serde_json::json!({ "question": question }).to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "prasadgpt-api");
    }

    #[tokio::test]
    async fn test_ask_rejects_empty_question() {
        let (status, json) = post_ask("   ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ask_rejects_oversized_question() {
        let long = "x".repeat(401);
        let (status, json) = post_ask(&long).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ask_greeting_short_circuits_without_provider() {
        // The LLM client points at an unroutable address, so a provider call
        // would fail. A canned answer proves the short-circuit fired.
        let (status, json) = post_ask("hello!").await;
        assert_eq!(status, StatusCode::OK);
        let answer = json["answer"].as_str().unwrap();
        assert!(answer.contains("PrasadGPT"));
        assert!(answer.contains("skills"));
    }
}
