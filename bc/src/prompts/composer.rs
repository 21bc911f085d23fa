//! System prompt composition
//!
//! The system prompt for a turn is the coach base prompt, the style
//! modifier, and the stage instructions, in that order. Composition is a
//! pure function of (coach type, style, stage, plan) - identical inputs
//! always yield identical prompts.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::domain::{BusinessPlan, CoachType, CoachingStage, CoachingStyle};

/// Template data for the support-stage instructions
#[derive(Debug, Serialize)]
struct SupportContext {
    has_plan: bool,
    objectives: String,
    phases: String,
    metrics: String,
}

impl SupportContext {
    /// Condense a plan to the pieces the model should reference without
    /// re-reading the full structure
    fn from_plan(plan: Option<&BusinessPlan>) -> Self {
        match plan {
            Some(plan) => Self {
                has_plan: true,
                objectives: plan
                    .objectives
                    .iter()
                    .map(|o| o.description.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                phases: plan
                    .phases
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                metrics: plan
                    .metrics
                    .iter()
                    .map(|m| m.metric.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            None => Self {
                has_plan: false,
                objectives: String::new(),
                phases: String::new(),
                metrics: String::new(),
            },
        }
    }
}

/// Renders per-turn system prompts from the embedded templates
pub struct PromptComposer {
    hbs: Handlebars<'static>,
}

impl PromptComposer {
    /// Create a composer with the stage templates registered
    pub fn new() -> Result<Self, Box<handlebars::TemplateError>> {
        let mut hbs = Handlebars::new();
        // Prompt text goes to an LLM, not a browser
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_template_string("stage-support", embedded::STAGE_SUPPORT)
            .map_err(Box::new)?;
        Ok(Self { hbs })
    }

    /// Compose the system prompt for a turn
    pub fn compose(
        &self,
        coach_type: CoachType,
        style: CoachingStyle,
        stage: CoachingStage,
        plan: Option<&BusinessPlan>,
    ) -> Result<String, handlebars::RenderError> {
        debug!(%coach_type, %style, %stage, has_plan = plan.is_some(), "compose: called");
        let base = embedded::coach_prompt(coach_type);
        let modifier = embedded::style_modifier(style);

        let stage_instructions = match stage {
            CoachingStage::Discovery => embedded::STAGE_DISCOVERY.to_string(),
            CoachingStage::PlanGeneration => embedded::STAGE_PLAN_GENERATION.to_string(),
            CoachingStage::Support => self.hbs.render("stage-support", &SupportContext::from_plan(plan))?,
        };

        Ok(format!("{base}\n\n{modifier}\n\n{stage_instructions}"))
    }
}
