//! Session persistence
//!
//! Sessions are persisted through a storage DTO that mirrors the shape
//! records have always had on disk: separate optional `outline`,
//! `extractedContext`, and `plan` fields rather than the domain's tagged
//! artifact, and defaults for every field added since the first release.
//! Legacy records missing newer fields load cleanly; absent fields stay
//! absent on write.

use async_trait::async_trait;
use docstore::{Record, Store, now_ms};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{
    Artifact, BusinessPlan, BusinessProfile, CoachMessage, CoachType, CoachingSession, CoachingStage, CoachingStyle,
    ProjectContext, ProjectOutline,
};
use crate::error::Result;

/// Durable form of a coaching session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub messages: Vec<CoachMessage>,
    #[serde(default)]
    pub coach_type: CoachType,
    #[serde(default)]
    pub coaching_style: CoachingStyle,
    #[serde(default)]
    pub stage: CoachingStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<BusinessProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<ProjectOutline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_context: Option<ProjectContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<BusinessPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for StoredSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn collection_name() -> &'static str {
        "coaching_sessions"
    }
}

impl From<&CoachingSession> for StoredSession {
    fn from(session: &CoachingSession) -> Self {
        let (outline, extracted_context, plan) = match &session.artifact {
            Some(Artifact::Outline { outline, context }) => (Some(outline.clone()), Some(context.clone()), None),
            Some(Artifact::Plan { plan }) => (None, None, Some(plan.clone())),
            None => (None, None, None),
        };

        Self {
            id: session.id.clone(),
            user_id: session.user_id.clone(),
            messages: session.messages.clone(),
            coach_type: session.coach_type,
            coaching_style: session.coaching_style,
            stage: session.stage,
            business_profile: session.business_profile.clone(),
            outline,
            extracted_context,
            plan,
            approved_at: session.approved_at_ms,
            created_at: session.created_at_ms,
            updated_at: session.updated_at_ms,
        }
    }
}

impl From<StoredSession> for CoachingSession {
    fn from(stored: StoredSession) -> Self {
        // A plan supersedes any legacy outline a record might still carry
        let artifact = if let Some(plan) = stored.plan {
            if stored.outline.is_some() {
                warn!(session_id = %stored.id, "stored record carries both plan and outline; keeping the plan");
            }
            Some(Artifact::Plan { plan })
        } else {
            match (stored.outline, stored.extracted_context) {
                (Some(outline), Some(context)) => Some(Artifact::Outline { outline, context }),
                (Some(_), None) => {
                    warn!(session_id = %stored.id, "stored outline has no extracted context; treating as no artifact");
                    None
                }
                _ => None,
            }
        };

        Self {
            id: stored.id,
            user_id: stored.user_id,
            messages: stored.messages,
            coach_type: stored.coach_type,
            coaching_style: stored.coaching_style,
            stage: stored.stage,
            business_profile: stored.business_profile,
            artifact,
            approved_at_ms: stored.approved_at,
            created_at_ms: stored.created_at,
            updated_at_ms: stored.updated_at,
        }
    }
}

/// Durable storage for coaching sessions
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a brand-new session; fails if the id is taken
    async fn create(&self, session: &CoachingSession) -> Result<()>;

    /// Load a session by id
    async fn find_by_id(&self, id: &str) -> Result<Option<CoachingSession>>;

    /// Persist the full current state of a session
    async fn save(&self, session: &CoachingSession) -> Result<()>;
}

/// Docstore-backed session repository
pub struct DocSessionRepository {
    store: Store,
}

impl DocSessionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for DocSessionRepository {
    async fn create(&self, session: &CoachingSession) -> Result<()> {
        debug!(session_id = %session.id, "create: called");
        let stored = StoredSession::from(session);
        self.store.create(&stored)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CoachingSession>> {
        debug!(session_id = %id, "find_by_id: called");
        let stored: Option<StoredSession> = self.store.get(id)?;
        Ok(stored.map(CoachingSession::from))
    }

    async fn save(&self, session: &CoachingSession) -> Result<()> {
        debug!(session_id = %session.id, "save: called");
        let mut stored = StoredSession::from(session);
        stored.updated_at = now_ms();
        self.store.save(&stored)?;
        Ok(())
    }
}
