//! Coaching service
//!
//! The request-level operations: each one loads the persisted session,
//! rebuilds the agent in memory, runs exactly one operation, persists the
//! updated record, and returns the response payload. Ownership is checked
//! on every load with the caller-supplied opaque user id.

use std::sync::Arc;

use docstore::now_ms;
use tracing::{debug, info, warn};

use crate::agent::{CoachingAgent, TurnOutcome};
use crate::brief;
use crate::config::LlmConfig;
use crate::domain::{
    Artifact, CoachMessage, CoachType, CoachingSession, CoachingStage, CoachingStyle, Project, ProjectStatus,
    SessionStatus,
};
use crate::error::{CoachError, Result};
use crate::llm::LlmClient;
use crate::prompts::PromptComposer;
use crate::storage::{ProjectRepository, SessionRepository};

/// Response to starting a session
#[derive(Debug)]
pub struct StartResponse {
    pub session_id: String,
    pub message: CoachMessage,
}

/// Response to a chat or revise turn
#[derive(Debug)]
pub struct ChatResponse {
    pub outcome: TurnOutcome,
    pub stage: CoachingStage,
    pub status: SessionStatus,
}

/// Wires repositories, the LLM client, and the prompt composer into the
/// per-request operations
pub struct CoachingService {
    sessions: Arc<dyn SessionRepository>,
    projects: Arc<dyn ProjectRepository>,
    llm: Arc<dyn LlmClient>,
    composer: Arc<PromptComposer>,
    llm_config: LlmConfig,
}

impl CoachingService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        projects: Arc<dyn ProjectRepository>,
        llm: Arc<dyn LlmClient>,
        llm_config: LlmConfig,
    ) -> eyre::Result<Self> {
        let composer = Arc::new(PromptComposer::new().map_err(|e| eyre::eyre!("invalid prompt template: {e}"))?);
        Ok(Self {
            sessions,
            projects,
            llm,
            composer,
            llm_config,
        })
    }

    fn agent_for(&self, session: CoachingSession) -> CoachingAgent {
        CoachingAgent::new(session, self.llm.clone(), self.composer.clone(), &self.llm_config)
    }

    /// Load a session, enforcing ownership
    async fn load_owned(&self, user_id: &str, session_id: &str) -> Result<CoachingSession> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| CoachError::not_found("session", session_id))?;
        if session.user_id != user_id {
            warn!(%session_id, "load_owned: ownership mismatch");
            return Err(CoachError::forbidden("session", session_id));
        }
        Ok(session)
    }

    /// Load a project, enforcing ownership
    async fn load_owned_project(&self, user_id: &str, project_id: &str) -> Result<Project> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| CoachError::not_found("project", project_id))?;
        if project.user_id != user_id {
            warn!(%project_id, "load_owned_project: ownership mismatch");
            return Err(CoachError::forbidden("project", project_id));
        }
        Ok(project)
    }

    /// Start a new coaching session with the fixed opening message
    pub async fn start(
        &self,
        user_id: &str,
        coach_type: CoachType,
        coaching_style: CoachingStyle,
    ) -> Result<StartResponse> {
        info!(%user_id, %coach_type, %coaching_style, "start: called");
        let session = CoachingSession::new(user_id, coach_type, coaching_style);
        let mut agent = self.agent_for(session);
        let message = agent.start_session();

        let session = agent.into_session();
        self.sessions.create(&session).await?;

        Ok(StartResponse {
            session_id: session.id,
            message,
        })
    }

    /// One chat turn against an existing session
    ///
    /// Nothing is persisted when the model call fails, so a failed turn
    /// leaves the stored history exactly as it was.
    pub async fn chat(&self, user_id: &str, session_id: &str, message: &str) -> Result<ChatResponse> {
        debug!(%session_id, "chat: called");
        let session = self.load_owned(user_id, session_id).await?;
        let mut agent = self.agent_for(session);

        let outcome = agent.chat(message).await?;

        let session = agent.into_session();
        self.sessions.save(&session).await?;

        Ok(ChatResponse {
            outcome,
            stage: session.stage,
            status: session.status(),
        })
    }

    /// Revise the legacy outline with user feedback
    pub async fn revise(&self, user_id: &str, session_id: &str, feedback: &str) -> Result<ChatResponse> {
        debug!(%session_id, "revise: called");
        let session = self.load_owned(user_id, session_id).await?;
        let mut agent = self.agent_for(session);

        let outcome = agent.revise_outline(feedback).await?;

        let session = agent.into_session();
        self.sessions.save(&session).await?;

        Ok(ChatResponse {
            outcome,
            stage: session.stage,
            status: session.status(),
        })
    }

    /// Switch the coach persona; the conversation continues over the same
    /// history
    pub async fn switch_coach(
        &self,
        user_id: &str,
        session_id: &str,
        coach_type: CoachType,
        coaching_style: Option<CoachingStyle>,
    ) -> Result<CoachingSession> {
        debug!(%session_id, %coach_type, "switch_coach: called");
        let session = self.load_owned(user_id, session_id).await?;
        let mut agent = self.agent_for(session);
        agent.switch_coach(coach_type, coaching_style);

        let session = agent.into_session();
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Approve the session's artifact into a new project
    ///
    /// Fails with a precondition error when the session has produced
    /// neither a plan nor an outline. Approving a plan clears any legacy
    /// outline fields on the project.
    pub async fn approve(&self, user_id: &str, session_id: &str, project_name: Option<&str>) -> Result<Project> {
        info!(%session_id, "approve: called");
        let mut session = self.load_owned(user_id, session_id).await?;

        let Some(artifact) = session.artifact.clone() else {
            return Err(CoachError::Precondition("No plan or outline to approve".to_string()));
        };

        session.approved_at_ms = Some(now_ms());
        session.stage = CoachingStage::Support;
        session.touch();
        self.sessions.save(&session).await?;

        let mut project = Project::new(user_id, project_name.unwrap_or("New Project"));
        match artifact {
            Artifact::Plan { plan } => {
                project.plan = Some(plan);
                project.outline = None;
                project.context = None;
            }
            Artifact::Outline { outline, context } => {
                project.outline = Some(outline);
                project.context = Some(context);
            }
        }
        project.status = ProjectStatus::OutlineReady;
        self.projects.create(&project).await?;

        info!(project_id = %project.id, "approve: project created");
        Ok(project)
    }

    /// Render the downloadable brief for a project and record that it
    /// has been generated
    pub async fn project_brief(&self, user_id: &str, project_id: &str) -> Result<String> {
        debug!(%project_id, "project_brief: called");
        let mut project = self.load_owned_project(user_id, project_id).await?;

        let markdown = if let Some(plan) = &project.plan {
            brief::plan_brief(plan, None, &project.name)
        } else if let (Some(outline), Some(context)) = (&project.outline, &project.context) {
            brief::outline_brief(outline, context, &project.name)
        } else {
            return Err(CoachError::Precondition("Project outline not available".to_string()));
        };

        project.brief_generated = true;
        self.projects.save(&project).await?;

        Ok(markdown)
    }

    /// Load a session for display
    pub async fn get_session(&self, user_id: &str, session_id: &str) -> Result<CoachingSession> {
        self.load_owned(user_id, session_id).await
    }

    /// All projects owned by the user, newest-first
    pub async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>> {
        self.projects.list_for_user(user_id).await
    }
}
