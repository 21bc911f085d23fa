//! Strategic business plan artifact
//!
//! Produced wholesale by a single `generate_business_plan` tool call and
//! replaced wholesale on regeneration. Field names follow the tool schema
//! wire form (camelCase).

use serde::{Deserialize, Serialize};

/// A strategic business plan generated from discovery findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlan {
    /// 1-2 paragraphs summarizing the main approach
    pub strategy_overview: String,

    /// 2-4 clear, measurable objectives (count is a prompt convention,
    /// not validated here)
    pub objectives: Vec<Objective>,

    /// Execution phases, conventionally Foundation / Build & Optimize /
    /// Scale & Refine
    pub phases: Vec<PlanPhase>,

    /// What to track, targets, and when to review
    pub metrics: Vec<PlanMetric>,

    /// Likely obstacles with mitigation strategies
    pub risks: Vec<PlanRisk>,
}

/// A measurable objective within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub description: String,
    /// How success is measured
    pub measurable: String,
}

/// An execution phase with a timeframe and concrete actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPhase {
    pub name: String,
    /// e.g. "0-30 days", "30-90 days", "90+ days"
    pub timeframe: String,
    pub actions: Vec<PlanAction>,
}

/// A single action within a phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAction {
    pub id: String,
    pub description: String,
    pub priority: ActionPriority,
}

/// Action priority as emitted by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

/// A tracked metric with a target and review checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetric {
    pub metric: String,
    pub target: String,
    /// When to review
    pub checkpoint: String,
}

/// A risk paired with its mitigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRisk {
    pub risk: String,
    pub mitigation: String,
}
