//! Engine error types

use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by the coaching engine
#[derive(Debug, Error)]
pub enum CoachError {
    /// The requested record does not exist
    #[error("Not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },

    /// The record exists but belongs to a different user
    #[error("Forbidden: {entity} '{id}' is not owned by the caller")]
    Forbidden { entity: &'static str, id: String },

    /// An operation was called in a state that cannot support it;
    /// never retried automatically
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Store error: {0}")]
    Store(#[from] docstore::StoreError),

    #[error("Prompt rendering error: {0}")]
    Prompt(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, CoachError>;

impl CoachError {
    /// Shorthand for a NotFound error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Shorthand for a Forbidden error
    pub fn forbidden(entity: &'static str, id: impl Into<String>) -> Self {
        Self::Forbidden {
            entity,
            id: id.into(),
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, CoachError::Precondition(_))
    }

    /// Text safe to show an end user. Ownership and precondition
    /// failures get specific wording; everything else collapses to a
    /// generic message, with the real reason left to the logs.
    pub fn user_message(&self) -> String {
        match self {
            CoachError::NotFound { entity, .. } => format!("That {entity} could not be found."),
            CoachError::Forbidden { entity, .. } => format!("You don't have access to that {entity}."),
            CoachError::Precondition(reason) => reason.clone(),
            CoachError::Llm(LlmError::AllModelsFailed { .. }) => {
                "The AI coach is unavailable right now. Please try again in a moment.".to_string()
            }
            _ => "We couldn't process that request. Please try again.".to_string(),
        }
    }
}
