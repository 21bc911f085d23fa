//! Coaching session state machine
//!
//! Owns one session in memory for the duration of a request: composes the
//! system prompt from current state, runs the model with fallback,
//! interprets tool calls, and keeps the message history consistent. The
//! caller persists the session afterwards (or doesn't, on failure).

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::interpreter::{TurnOutcome, interpret};
use super::tools::coaching_tools;
use crate::config::LlmConfig;
use crate::domain::{Artifact, CoachMessage, CoachType, CoachingSession, CoachingStyle, MessageRole};
use crate::error::{CoachError, Result};
use crate::llm::{CompletionRequest, LlmClient, Message, complete_with_fallback};
use crate::prompts::PromptComposer;

/// Placeholder persisted when the model returned no text at all;
/// the history never carries a literally empty coach message
pub const EMPTY_REPLY_PLACEHOLDER: &str = "No response generated";

/// User-visible text substituted when a turn produced no content
pub const FALLBACK_REPLY: &str =
    "I apologize, but I encountered an issue processing your message. Please try again.";

fn opening_message(coach_type: CoachType) -> &'static str {
    match coach_type {
        CoachType::Strategy => {
            "Thanks for choosing the Strategy & Clarity Coach. I'll start with a quick audit so I can build a tailored plan for you. I'll ask a series of questions about your business, goals, and current situation. Answer in as much detail as you can, even if things feel messy. Ready? Let's start with a quick snapshot of your business."
        }
        CoachType::Brand => {
            "Thanks for choosing the Brand & Positioning Coach. I'll help you stand out in your market and create a compelling brand identity. Let's start by understanding your current brand and where you want to take it. Ready?"
        }
        CoachType::Marketing => {
            "Thanks for choosing the Marketing & Sales Coach. I'll help you grow your customer base and optimize your sales process. Let's start by understanding your current marketing and sales situation. Ready?"
        }
        CoachType::Leadership => {
            "Thanks for choosing the Leadership & Operations Coach. I'll help you build a team and systems your business can run on without everything going through you. Let's start by understanding how your business runs today. Ready?"
        }
        CoachType::CustomerExperience => {
            "Thanks for choosing the Customer Experience Coach. I'll help you design exceptional customer journeys and build systems for retention and referrals. Let's start by understanding your current customer experience. Ready?"
        }
    }
}

/// The coaching agent for one request
pub struct CoachingAgent {
    session: CoachingSession,
    llm: Arc<dyn LlmClient>,
    composer: Arc<PromptComposer>,
    models: Vec<String>,
    max_tokens: u32,
}

impl CoachingAgent {
    /// Reconstruct the agent around a session (fresh or loaded)
    pub fn new(
        session: CoachingSession,
        llm: Arc<dyn LlmClient>,
        composer: Arc<PromptComposer>,
        llm_config: &LlmConfig,
    ) -> Self {
        Self {
            session,
            llm,
            composer,
            models: llm_config.models.clone(),
            max_tokens: llm_config.max_tokens,
        }
    }

    /// The session as mutated so far; hand this back to the repository
    pub fn into_session(self) -> CoachingSession {
        self.session
    }

    pub fn session(&self) -> &CoachingSession {
        &self.session
    }

    /// Open the conversation with the fixed greeting for the coach type
    ///
    /// No model call is made for the opening turn. The greeting is
    /// appended to the history as the first coach message.
    pub fn start_session(&mut self) -> CoachMessage {
        info!(session_id = %self.session.id, coach = %self.session.coach_type, "start_session: called");
        let message = CoachMessage::coach(opening_message(self.session.coach_type), None);
        self.session.messages.push(message.clone());
        self.session.touch();
        message
    }

    /// One conversational turn: send the user's message, apply whatever
    /// the coach did, and return the interpreted response
    ///
    /// On model failure the just-appended user message is removed again,
    /// so a failed turn never leaves an orphaned prompt in the history.
    pub async fn chat(&mut self, user_message: &str) -> Result<TurnOutcome> {
        debug!(session_id = %self.session.id, "chat: called");
        self.session.messages.push(CoachMessage::user(user_message));
        self.run_turn().await
    }

    /// Revise the legacy outline based on user feedback
    ///
    /// Only valid when the session's artifact is an outline; the current
    /// outline is embedded verbatim in the revision prompt and the model
    /// is expected to answer with a fresh `generate_outline` call.
    pub async fn revise_outline(&mut self, feedback: &str) -> Result<TurnOutcome> {
        debug!(session_id = %self.session.id, "revise_outline: called");
        let Some((outline, _)) = self.session.outline() else {
            return Err(CoachError::Precondition("No outline generated yet".to_string()));
        };

        let outline_json = serde_json::to_string_pretty(outline)
            .map_err(|e| CoachError::Llm(crate::llm::LlmError::Json(e)))?;

        let revision_prompt = format!(
            "The user has feedback on the outline you generated:\n\n\
             \"{feedback}\"\n\n\
             Current outline:\n\
             {outline_json}\n\n\
             Please revise the outline based on their feedback and generate an updated version using the generate_outline tool."
        );

        self.session.messages.push(CoachMessage::user(revision_prompt));
        let mut outcome = self.run_turn().await?;

        if outcome.outline.is_none() {
            warn!(session_id = %self.session.id, "revise_outline: model did not emit a revised outline");
            // Return the outline that is still current
            if let Some(Artifact::Outline { outline, context }) = &self.session.artifact {
                outcome.outline = Some(outline.clone());
                outcome.context = Some(context.clone());
            }
        }

        Ok(outcome)
    }

    /// Switch the coach persona mid-session
    ///
    /// History, stage, findings, and artifacts all stay put; only the
    /// system prompt of subsequent turns changes.
    pub fn switch_coach(&mut self, coach_type: CoachType, style: Option<CoachingStyle>) {
        self.session.coach_type = coach_type;
        if let Some(style) = style {
            self.session.coaching_style = style;
        }
        self.session.touch();
        info!(
            session_id = %self.session.id,
            coach = %self.session.coach_type,
            style = %self.session.coaching_style,
            "switch_coach: updated"
        );
    }

    /// Run the model against the current history and fold the result in
    ///
    /// Assumes the triggering user message is already the last history
    /// entry; pops it again before propagating any failure.
    async fn run_turn(&mut self) -> Result<TurnOutcome> {
        let result = self.call_model().await;

        let fallback = match result {
            Ok(fallback) => fallback,
            Err(e) => {
                warn!(session_id = %self.session.id, error = %e, "run_turn: model call failed, rolling back user message");
                self.session.messages.pop();
                return Err(e);
            }
        };

        info!(session_id = %self.session.id, model = %fallback.model, "run_turn: got response");

        let mut outcome = interpret(&fallback.response.content, &mut self.session);

        let stored_content = if outcome.content.is_empty() {
            EMPTY_REPLY_PLACEHOLDER.to_string()
        } else {
            outcome.content.clone()
        };
        self.session
            .messages
            .push(CoachMessage::coach(stored_content, outcome.quick_replies.clone()));
        self.session.touch();

        if outcome.content.is_empty() {
            outcome.content = FALLBACK_REPLY.to_string();
        }

        Ok(outcome)
    }

    async fn call_model(&self) -> Result<crate::llm::FallbackOutcome> {
        let system_prompt =
            self.composer
                .compose(self.session.coach_type, self.session.coaching_style, self.session.stage, self.session.plan())?;

        let request = CompletionRequest {
            model: String::new(),
            system_prompt,
            messages: self.history(),
            tools: coaching_tools(),
            max_tokens: self.max_tokens,
        };

        debug!(message_count = request.messages.len(), "call_model: invoking with fallback");
        Ok(complete_with_fallback(self.llm.as_ref(), request, &self.models).await?)
    }

    /// The stored history in model wire form
    fn history(&self) -> Vec<Message> {
        self.session
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::User => Message::user(msg.content.clone()),
                MessageRole::Coach => Message::assistant(msg.content.clone()),
            })
            .collect()
    }
}
