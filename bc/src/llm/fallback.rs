//! Model fallback
//!
//! Tries candidate models in priority order until one answers. Errors
//! that a different model might fix (model not found, bad request, rate
//! limit, service unavailable, network trouble) move on to the next
//! candidate; auth failures and hard server errors stop the chain
//! immediately. Stateless - safe to call concurrently.

use tracing::{debug, info, warn};

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError};

/// A successful completion together with the model that served it
#[derive(Debug)]
pub struct FallbackOutcome {
    pub response: CompletionResponse,
    pub model: String,
}

/// Attempt the request against each candidate model in order
///
/// The `model` field of `request` is overwritten per attempt. Each
/// candidate is allowed to settle (succeed or fail) before the next one
/// is tried; there is no mid-call cancellation.
pub async fn complete_with_fallback(
    client: &dyn LlmClient,
    request: CompletionRequest,
    models: &[String],
) -> Result<FallbackOutcome, LlmError> {
    debug!(candidates = models.len(), "complete_with_fallback: called");
    if models.is_empty() {
        return Err(LlmError::InvalidResponse("No candidate models configured".to_string()));
    }

    let mut last_failure: Option<(String, LlmError)> = None;

    for model in models {
        debug!(%model, "complete_with_fallback: attempting model");
        let mut attempt = request.clone();
        attempt.model = model.clone();

        match client.complete(attempt).await {
            Ok(response) => {
                info!(%model, "complete_with_fallback: model succeeded");
                return Ok(FallbackOutcome {
                    response,
                    model: model.clone(),
                });
            }
            Err(e) if e.halts_fallback() => {
                warn!(%model, error = %e, "complete_with_fallback: fatal error, stopping fallback");
                return Err(e);
            }
            Err(e) => {
                warn!(%model, error = %e, "complete_with_fallback: model failed, trying next");
                last_failure = Some((model.clone(), e));
            }
        }
    }

    match last_failure {
        Some((model, err)) => Err(LlmError::AllModelsFailed {
            model,
            reason: err.to_string(),
        }),
        None => Err(LlmError::InvalidResponse("No candidate models attempted".to_string())),
    }
}
