use anyhow::{Context, Result};

const DEFAULT_ZAI_BASE_URL: &str = "https://api.z.ai/api/paas/v4/chat/completions";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub zai_api_key: String,
    pub zai_base_url: String,
    /// Origins allowed by the CORS layer, comma separated in env.
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            zai_api_key: require_env("ZAI_API_KEY")?,
            zai_base_url: std::env::var("ZAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ZAI_BASE_URL.to_string()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empties() {
        let origins = parse_origins(" http://localhost:5173 , https://prasadkadam.dev ,,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "https://prasadkadam.dev"]
        );
    }

    #[test]
    fn test_parse_origins_single_value() {
        assert_eq!(parse_origins("http://localhost:5173"), vec!["http://localhost:5173"]);
    }
}
