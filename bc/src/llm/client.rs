//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// The full conversation history travels with every request, so no state
/// is held between calls and a client can be shared freely across
/// concurrent requests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request against the model named in it
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::{ContentBlock, StopReason, TokenUsage};

    /// Mock LLM client for unit tests
    ///
    /// Pops scripted results in order and records the model id of every
    /// attempt so tests can assert fallback behavior.
    pub struct MockLlmClient {
        results: Mutex<Vec<Result<CompletionResponse, LlmError>>>,
        attempted_models: Mutex<Vec<String>>,
    }

    impl MockLlmClient {
        pub fn new(results: Vec<Result<CompletionResponse, LlmError>>) -> Self {
            Self {
                results: Mutex::new(results),
                attempted_models: Mutex::new(Vec::new()),
            }
        }

        /// Models attempted so far, in order
        pub fn attempted_models(&self) -> Vec<String> {
            self.attempted_models.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.attempted_models.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.attempted_models.lock().unwrap().push(request.model.clone());
            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                return Err(LlmError::InvalidResponse("No more mock responses".to_string()));
            }
            results.remove(0)
        }
    }

    /// A text-only completion response
    pub fn text_response(text: &str) -> CompletionResponse {
        CompletionResponse {
            content: vec![ContentBlock::text(text)],
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_scripted_results() {
            let client = MockLlmClient::new(vec![Ok(text_response("first")), Ok(text_response("second"))]);

            let req = CompletionRequest {
                model: "model-a".to_string(),
                system_prompt: "Test".to_string(),
                messages: vec![],
                tools: vec![],
                max_tokens: 1000,
            };

            let resp1 = client.complete(req.clone()).await.unwrap();
            assert_eq!(resp1.text(), "first");

            let resp2 = client.complete(req.clone()).await.unwrap();
            assert_eq!(resp2.text(), "second");

            assert_eq!(client.call_count(), 2);
            assert_eq!(client.attempted_models(), vec!["model-a", "model-a"]);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);

            let req = CompletionRequest {
                model: "model-a".to_string(),
                system_prompt: "Test".to_string(),
                messages: vec![],
                tools: vec![],
                max_tokens: 1000,
            };

            assert!(client.complete(req).await.is_err());
        }
    }
}
