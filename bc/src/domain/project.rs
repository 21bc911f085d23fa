//! Project record seeded from an approved coaching session

use docstore::{Record, now_ms};
use serde::{Deserialize, Serialize};

use super::outline::{ProjectContext, ProjectOutline};
use super::plan::BusinessPlan;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Coaching,
    OutlineReady,
    Building,
    Ready,
    Editing,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Coaching => "coaching",
            Self::OutlineReady => "outline_ready",
            Self::Building => "building",
            Self::Ready => "ready",
            Self::Editing => "editing",
        };
        write!(f, "{s}")
    }
}

/// A project created from an approved session artifact
///
/// Exactly one of `plan` or `outline`+`context` is populated after
/// approval; approving a plan clears any legacy outline fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<ProjectOutline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ProjectContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<BusinessPlan>,
    #[serde(default)]
    pub brief_generated: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Project {
    /// Create a new project in the coaching status
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            status: ProjectStatus::Coaching,
            outline: None,
            context: None,
            plan: None,
            brief_generated: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp after a mutation
    pub fn touch(&mut self) {
        self.updated_at = now_ms();
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn collection_name() -> &'static str {
        "projects"
    }
}
