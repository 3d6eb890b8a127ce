//! Classifies a failed backend call so the offline banner can say what broke.

use std::fmt;

use crate::client::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BackendDown,
    RateLimited,
    TokenLimitExceeded,
    AiDown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FailureKind::BackendDown => "BACKEND DOWN",
            FailureKind::RateLimited => "RATE LIMITED",
            FailureKind::TokenLimitExceeded => "TOKEN LIMIT EXCEEDED",
            FailureKind::AiDown => "AI DOWN",
        };
        f.write_str(tag)
    }
}

/// Substring matching on the error message plus the HTTP status, when one
/// exists. No status at all means the request never got an HTTP response,
/// which reads as the backend itself being unreachable.
pub fn classify(status: Option<u16>, message: &str) -> FailureKind {
    let msg = message.to_lowercase();

    if status.is_none() {
        return FailureKind::BackendDown;
    }

    if status == Some(429)
        || msg.contains("quota")
        || msg.contains("rate")
        || msg.contains("too many")
    {
        return FailureKind::RateLimited;
    }

    if msg.contains("token")
        || msg.contains("context")
        || msg.contains("too large")
        || msg.contains("resource_exhausted")
    {
        return FailureKind::TokenLimitExceeded;
    }

    FailureKind::AiDown
}

pub fn classify_error(err: &BackendError) -> FailureKind {
    classify(err.status(), &err.to_string())
}
