//! BizCoach - AI business coaching session engine
//!
//! BizCoach pairs a user with an AI business coach over a multi-turn
//! conversation, then converts the conversation into a structured
//! strategic artifact (a business plan, or a legacy project outline) that
//! seeds a project record and a generated brief document.
//!
//! # Core Concepts
//!
//! - **Advisory state machine**: the coaching stage (discovery ->
//!   plan_generation -> support) is moved only by the model's own tool
//!   calls, never by local rules
//! - **State in records**: each request reconstructs the session from
//!   storage, mutates it in memory, and persists the whole record back
//! - **Model fallback**: candidate models are tried in priority order,
//!   with auth and hard server errors short-circuiting the chain
//! - **Degrade, don't crash**: malformed or empty model output becomes a
//!   fallback reply, never a failed turn
//!
//! # Modules
//!
//! - [`agent`] - Tool schemas, tool-call interpretation, session state machine
//! - [`llm`] - LLM client trait, Anthropic implementation, model fallback
//! - [`prompts`] - Coach/style/stage prompt composition
//! - [`domain`] - Session, plan, outline, profile, and project types
//! - [`storage`] - Session and project repositories over the document store
//! - [`service`] - Request-level operations (start/chat/revise/switch/approve)
//! - [`brief`] - Markdown brief generation from finalized artifacts
//! - [`config`] - Configuration types and loading

pub mod agent;
pub mod brief;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use agent::{CoachAction, CoachingAgent, TurnOutcome, interpret};
pub use config::{Config, LlmConfig, StorageConfig};
pub use domain::{
    Artifact, BusinessPlan, BusinessProfile, CoachMessage, CoachType, CoachingSession, CoachingStage, CoachingStyle,
    Project, ProjectContext, ProjectOutline, ProjectStatus, QuickReply, SessionStatus,
};
pub use error::{CoachError, Result};
pub use llm::{
    AnthropicClient, CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, ToolDefinition,
    complete_with_fallback, create_client,
};
pub use prompts::PromptComposer;
pub use service::{ChatResponse, CoachingService, StartResponse};
pub use storage::{DocProjectRepository, DocSessionRepository, ProjectRepository, SessionRepository};
