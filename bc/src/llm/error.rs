//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// 401/403 - retrying with a different model cannot fix this
    #[error("Authentication error {status}: {message}")]
    Auth { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Every candidate model was attempted and failed
    #[error("All models failed. Last error from {model}: {reason}")]
    AllModelsFailed { model: String, reason: String },
}

impl LlmError {
    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }

    /// Check if this error should stop the model fallback chain.
    ///
    /// Auth failures and server errors other than 503 won't be fixed by a
    /// different model; everything else (model not found, bad request,
    /// rate limit, service unavailable, network trouble) is worth a try
    /// with the next candidate.
    pub fn halts_fallback(&self) -> bool {
        match self {
            LlmError::Auth { .. } => true,
            LlmError::ApiError { status, .. } => *status >= 500 && *status != 503,
            LlmError::AllModelsFailed { .. } => true,
            LlmError::RateLimited { .. } => false,
            LlmError::Network(_) => false,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }

    /// Get the retry duration if this is a rate limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}
