//! Coaching session aggregate
//!
//! The session owns the conversation history, discovery findings, current
//! stage, and the produced artifact. One instance is reconstructed from
//! storage per request, mutated in memory, and persisted back whole.

use docstore::now_ms;
use serde::{Deserialize, Serialize};

use super::outline::{ProjectContext, ProjectOutline};
use super::plan::BusinessPlan;
use super::profile::BusinessProfile;

/// Coach specialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoachType {
    #[default]
    Strategy,
    Brand,
    Marketing,
    Leadership,
    CustomerExperience,
}

impl CoachType {
    /// Wire form, e.g. "customer_experience"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Brand => "brand",
            Self::Marketing => "marketing",
            Self::Leadership => "leadership",
            Self::CustomerExperience => "customer_experience",
        }
    }

    /// Human-readable coach name shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strategy => "Strategy & Clarity",
            Self::Brand => "Brand & Positioning",
            Self::Marketing => "Marketing & Sales",
            Self::Leadership => "Leadership & Operations",
            Self::CustomerExperience => "Customer Experience",
        }
    }
}

impl std::fmt::Display for CoachType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CoachType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strategy" => Ok(Self::Strategy),
            "brand" => Ok(Self::Brand),
            "marketing" => Ok(Self::Marketing),
            "leadership" => Ok(Self::Leadership),
            "customer_experience" => Ok(Self::CustomerExperience),
            other => Err(format!("unknown coach type: {other}")),
        }
    }
}

/// Coaching communication style, adjustable independently of the coach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoachingStyle {
    #[default]
    Mentor,
    Realist,
    Strategist,
    AccountabilityPartner,
}

impl CoachingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Realist => "realist",
            Self::Strategist => "strategist",
            Self::AccountabilityPartner => "accountability_partner",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Realist => "Realist",
            Self::Strategist => "Strategist",
            Self::AccountabilityPartner => "Accountability Partner",
        }
    }
}

impl std::fmt::Display for CoachingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CoachingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor" => Ok(Self::Mentor),
            "realist" => Ok(Self::Realist),
            "strategist" => Ok(Self::Strategist),
            "accountability_partner" => Ok(Self::AccountabilityPartner),
            other => Err(format!("unknown coaching style: {other}")),
        }
    }
}

/// Stage of the coaching conversation
///
/// Progression is discovery -> plan_generation -> support, but transitions
/// are driven by the model's own tool calls and are never second-guessed
/// here. Repeated or out-of-order transitions are accepted as overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoachingStage {
    #[default]
    Discovery,
    PlanGeneration,
    Support,
}

impl CoachingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::PlanGeneration => "plan_generation",
            Self::Support => "support",
        }
    }
}

impl std::fmt::Display for CoachingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse session lifecycle, projected from stage/artifact/approval.
/// Never stored; the stage is the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    OutlineReady,
    Approved,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::OutlineReady => "outline_ready",
            Self::Approved => "approved",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A quick reply button offered alongside a coach message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Button text
    pub label: String,
    /// Value sent when clicked
    pub value: String,
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Coach,
}

/// One message in the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
    /// Creation time, Unix milliseconds
    pub timestamp: i64,
}

impl CoachMessage {
    /// Create a user message stamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            quick_replies: None,
            timestamp: now_ms(),
        }
    }

    /// Create a coach message stamped now
    pub fn coach(content: impl Into<String>, quick_replies: Option<Vec<QuickReply>>) -> Self {
        Self {
            role: MessageRole::Coach,
            content: content.into(),
            quick_replies,
            timestamp: now_ms(),
        }
    }
}

/// The artifact a session has produced, if any
///
/// Sessions produce either a legacy project outline (with its extracted
/// context) or a business plan, never both. The variants make that
/// exclusivity structural instead of a convention over nullable fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Outline {
        outline: ProjectOutline,
        context: ProjectContext,
    },
    Plan {
        plan: BusinessPlan,
    },
}

/// One coaching conversation and everything it has produced
#[derive(Debug, Clone, PartialEq)]
pub struct CoachingSession {
    pub id: String,
    pub user_id: String,
    pub messages: Vec<CoachMessage>,
    pub coach_type: CoachType,
    pub coaching_style: CoachingStyle,
    pub stage: CoachingStage,
    pub business_profile: Option<BusinessProfile>,
    pub artifact: Option<Artifact>,
    /// Set once the user approves the artifact into a project
    pub approved_at_ms: Option<i64>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl CoachingSession {
    /// Create a fresh session in the discovery stage
    pub fn new(user_id: impl Into<String>, coach_type: CoachType, coaching_style: CoachingStyle) -> Self {
        let now = now_ms();
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: user_id.into(),
            messages: Vec::new(),
            coach_type,
            coaching_style,
            stage: CoachingStage::Discovery,
            business_profile: None,
            artifact: None,
            approved_at_ms: None,
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Lifecycle status projected from approval and artifact presence
    pub fn status(&self) -> SessionStatus {
        if self.approved_at_ms.is_some() {
            SessionStatus::Approved
        } else if self.artifact.is_some() {
            SessionStatus::OutlineReady
        } else {
            SessionStatus::InProgress
        }
    }

    /// The business plan, if that is the live artifact
    pub fn plan(&self) -> Option<&BusinessPlan> {
        match &self.artifact {
            Some(Artifact::Plan { plan }) => Some(plan),
            _ => None,
        }
    }

    /// The legacy outline and its context, if that is the live artifact
    pub fn outline(&self) -> Option<(&ProjectOutline, &ProjectContext)> {
        match &self.artifact {
            Some(Artifact::Outline { outline, context }) => Some((outline, context)),
            _ => None,
        }
    }

    /// Refresh the update timestamp after a mutation
    pub fn touch(&mut self) {
        self.updated_at_ms = now_ms();
    }
}
