//! Legacy project outline artifact
//!
//! The original web-project coaching flow produced an outline plus an
//! extracted business context instead of a business plan. Sessions that
//! predate plans still carry these, and the `generate_outline` tool keeps
//! them producible.

use serde::{Deserialize, Serialize};

/// Strategic outline of a web project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutline {
    /// Brief summary of what is being built and why
    pub summary: String,
    pub sections: Vec<OutlineSection>,
    pub style_recommendations: StyleRecommendations,
}

/// One buildable section of the outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSection {
    pub id: String,
    pub name: String,
    pub purpose: String,
    pub key_elements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_guidance: Option<String>,
    pub priority: SectionPriority,
}

/// Section priority as emitted by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionPriority {
    MustHave,
    Recommended,
    Optional,
}

impl SectionPriority {
    /// Wire/display form, e.g. "must-have"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MustHave => "must-have",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

/// Design direction attached to the outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecommendations {
    pub tone: String,
    pub color_suggestions: Vec<String>,
    pub layout_style: String,
}

/// Business context extracted from the conversation alongside the outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub target_audience: String,
    pub unique_value: String,
    pub primary_goal: String,
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}
