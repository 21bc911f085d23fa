//! Domain types for coaching sessions and projects

mod outline;
mod plan;
mod profile;
mod project;
mod session;

pub use outline::{OutlineSection, ProjectContext, ProjectOutline, SectionPriority, StyleRecommendations};
pub use plan::{ActionPriority, BusinessPlan, Objective, PlanAction, PlanMetric, PlanPhase, PlanRisk};
pub use profile::BusinessProfile;
pub use project::{Project, ProjectStatus};
pub use session::{
    Artifact, CoachMessage, CoachType, CoachingSession, CoachingStage, CoachingStyle, MessageRole, QuickReply,
    SessionStatus,
};
