use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Full system instruction (rules + serialized profile), built once at startup.
    pub system_instruction: Arc<str>,
}
