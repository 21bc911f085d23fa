//! Tool-call interpretation
//!
//! Turns the raw content blocks of one completion into a response payload
//! and applies the side effects (stage transitions, discovery findings,
//! artifact generation) to the session. The model drives these mutations;
//! nothing else writes stage or profile.

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::tools;
use crate::domain::{
    Artifact, BusinessPlan, BusinessProfile, CoachingSession, CoachingStage, ProjectContext, ProjectOutline,
    QuickReply,
};
use crate::llm::ContentBlock;

/// A recognized coaching action decoded from a tool call
#[derive(Debug, Clone, PartialEq)]
pub enum CoachAction {
    OfferQuickReplies {
        options: Vec<QuickReply>,
    },
    TransitionToStage {
        stage: CoachingStage,
        summary: Option<String>,
    },
    MarkDiscoveryComplete {
        area: String,
        key_findings: Vec<String>,
    },
    GenerateBusinessPlan {
        plan: BusinessPlan,
        business_profile: Option<BusinessProfile>,
    },
    GenerateOutline {
        outline: ProjectOutline,
        context: ProjectContext,
    },
    /// A tool name this engine does not know; logged and ignored
    Unrecognized {
        name: String,
    },
}

#[derive(Debug, Deserialize)]
struct QuickRepliesInput {
    #[serde(default)]
    options: Vec<QuickReply>,
}

#[derive(Debug, Deserialize)]
struct TransitionInput {
    stage: CoachingStage,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscoveryInput {
    area: String,
    key_findings: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanInput {
    plan: BusinessPlan,
    #[serde(default)]
    business_profile: Option<BusinessProfile>,
}

#[derive(Debug, Deserialize)]
struct OutlineInput {
    outline: ProjectOutline,
    context: ProjectContext,
}

impl CoachAction {
    /// Decode a tool call into an action
    ///
    /// Unknown names decode to `Unrecognized`; malformed input for a
    /// known name is an error the caller is expected to log and skip.
    pub fn decode(name: &str, input: &serde_json::Value) -> Result<Self, serde_json::Error> {
        debug!(%name, "decode: called");
        match name {
            tools::OFFER_QUICK_REPLIES => {
                let input: QuickRepliesInput = serde_json::from_value(input.clone())?;
                Ok(Self::OfferQuickReplies { options: input.options })
            }
            tools::TRANSITION_TO_STAGE => {
                let input: TransitionInput = serde_json::from_value(input.clone())?;
                Ok(Self::TransitionToStage {
                    stage: input.stage,
                    summary: input.summary,
                })
            }
            tools::MARK_DISCOVERY_COMPLETE => {
                let input: DiscoveryInput = serde_json::from_value(input.clone())?;
                Ok(Self::MarkDiscoveryComplete {
                    area: input.area,
                    key_findings: input.key_findings,
                })
            }
            tools::GENERATE_BUSINESS_PLAN => {
                let input: PlanInput = serde_json::from_value(input.clone())?;
                Ok(Self::GenerateBusinessPlan {
                    plan: input.plan,
                    business_profile: input.business_profile,
                })
            }
            tools::GENERATE_OUTLINE => {
                let input: OutlineInput = serde_json::from_value(input.clone())?;
                Ok(Self::GenerateOutline {
                    outline: input.outline,
                    context: input.context,
                })
            }
            other => Ok(Self::Unrecognized {
                name: other.to_string(),
            }),
        }
    }
}

/// Interpreted result of one completion
#[derive(Debug, Clone, Default)]
pub struct TurnOutcome {
    /// Coach-visible text, in block order, with any stage annotation
    pub content: String,
    pub quick_replies: Option<Vec<QuickReply>>,
    pub outline: Option<ProjectOutline>,
    pub context: Option<ProjectContext>,
    pub plan: Option<BusinessPlan>,
}

/// Interpret the content blocks of one completion, mutating the session
///
/// Text blocks are concatenated in order. Tool calls apply immediately,
/// so a later block sees the effect of an earlier one. A malformed or
/// empty response never fails the turn - the caller substitutes fallback
/// text when `content` comes back empty.
pub fn interpret(blocks: &[ContentBlock], session: &mut CoachingSession) -> TurnOutcome {
    debug!(block_count = blocks.len(), "interpret: called");
    let mut outcome = TurnOutcome::default();

    for block in blocks {
        match block {
            ContentBlock::Text { text } => {
                outcome.content.push_str(text);
            }
            ContentBlock::ToolUse { name, input, .. } => match CoachAction::decode(name, input) {
                Ok(action) => apply(action, session, &mut outcome),
                Err(e) => {
                    warn!(%name, error = %e, "interpret: malformed tool input, skipping");
                }
            },
        }
    }

    outcome
}

fn apply(action: CoachAction, session: &mut CoachingSession, outcome: &mut TurnOutcome) {
    match action {
        CoachAction::OfferQuickReplies { options } => {
            debug!(option_count = options.len(), "apply: offer_quick_replies");
            outcome.quick_replies = Some(options);
        }
        CoachAction::TransitionToStage { stage, summary } => {
            info!(from = %session.stage, to = %stage, "apply: stage transition");
            session.stage = stage;
            if summary.is_some() {
                outcome.content.push_str(&format!("\n\n[Stage transition: {stage}]"));
            }
        }
        CoachAction::MarkDiscoveryComplete { area, key_findings } => {
            info!(%area, finding_count = key_findings.len(), "apply: discovery area complete");
            session
                .business_profile
                .get_or_insert_with(BusinessProfile::default)
                .record_findings(&area, key_findings);
        }
        CoachAction::GenerateBusinessPlan { plan, business_profile } => {
            info!(
                objectives = plan.objectives.len(),
                phases = plan.phases.len(),
                "apply: business plan generated"
            );
            if let Some(profile) = business_profile {
                session.business_profile = Some(profile);
            }
            outcome.plan = Some(plan.clone());
            session.artifact = Some(Artifact::Plan { plan });
            // Plan generation always lands the session in support mode
            session.stage = CoachingStage::Support;
        }
        CoachAction::GenerateOutline { outline, context } => {
            info!(sections = outline.sections.len(), "apply: outline generated");
            outcome.outline = Some(outline.clone());
            outcome.context = Some(context.clone());
            session.artifact = Some(Artifact::Outline { outline, context });
        }
        CoachAction::Unrecognized { name } => {
            warn!(%name, "apply: unrecognized tool call, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoachType, CoachingStyle};
    use crate::llm::ContentBlock;

    fn session() -> CoachingSession {
        CoachingSession::new("user-1", CoachType::Strategy, CoachingStyle::Mentor)
    }

    fn plan_input() -> serde_json::Value {
        serde_json::json!({
            "plan": {
                "strategyOverview": "Focus.",
                "objectives": [
                    { "id": "o1", "description": "Grow leads", "measurable": "40/mo" },
                    { "id": "o2", "description": "Raise prices", "measurable": "+20%" }
                ],
                "phases": [
                    { "name": "Foundation", "timeframe": "0-30 days", "actions": [] },
                    { "name": "Build & Optimize", "timeframe": "30-90 days", "actions": [] },
                    { "name": "Scale & Refine", "timeframe": "90+ days", "actions": [] }
                ],
                "metrics": [
                    { "metric": "Leads", "target": "40/mo", "checkpoint": "Weekly" }
                ],
                "risks": [
                    { "risk": "Time", "mitigation": "Batching" }
                ]
            }
        })
    }

    #[test]
    fn test_text_blocks_concatenate_in_order() {
        let mut s = session();
        let outcome = interpret(
            &[ContentBlock::text("Hello "), ContentBlock::text("there.")],
            &mut s,
        );
        assert_eq!(outcome.content, "Hello there.");
    }

    #[test]
    fn test_quick_replies_set_on_response_not_state() {
        let mut s = session();
        let before = s.clone();
        let outcome = interpret(
            &[ContentBlock::tool_use(
                "t1",
                tools::OFFER_QUICK_REPLIES,
                serde_json::json!({ "options": [ { "label": "Yes", "value": "yes" } ] }),
            )],
            &mut s,
        );

        let replies = outcome.quick_replies.unwrap();
        assert_eq!(replies[0].label, "Yes");
        // Quick replies have no effect on session state
        assert_eq!(s, before);
    }

    #[test]
    fn test_discovery_findings_overwrite_per_area() {
        let mut s = session();

        interpret(
            &[ContentBlock::tool_use(
                "t1",
                tools::MARK_DISCOVERY_COMPLETE,
                serde_json::json!({ "area": "audience", "keyFindings": ["a", "b"] }),
            )],
            &mut s,
        );
        interpret(
            &[ContentBlock::tool_use(
                "t2",
                tools::MARK_DISCOVERY_COMPLETE,
                serde_json::json!({ "area": "audience", "keyFindings": ["c"] }),
            )],
            &mut s,
        );

        let profile = s.business_profile.as_ref().unwrap();
        assert_eq!(profile.findings("audience").unwrap(), &["c".to_string()]);
    }

    #[test]
    fn test_stage_transition_with_summary_annotates_content() {
        let mut s = session();
        let outcome = interpret(
            &[
                ContentBlock::text("Great, moving on."),
                ContentBlock::tool_use(
                    "t1",
                    tools::TRANSITION_TO_STAGE,
                    serde_json::json!({ "stage": "plan_generation", "summary": "Discovery covered all areas" }),
                ),
            ],
            &mut s,
        );

        assert_eq!(s.stage, CoachingStage::PlanGeneration);
        assert_eq!(
            outcome.content,
            "Great, moving on.\n\n[Stage transition: plan_generation]"
        );
    }

    #[test]
    fn test_stage_transition_without_summary_has_no_annotation() {
        let mut s = session();
        let outcome = interpret(
            &[ContentBlock::tool_use(
                "t1",
                tools::TRANSITION_TO_STAGE,
                serde_json::json!({ "stage": "support" }),
            )],
            &mut s,
        );

        assert_eq!(s.stage, CoachingStage::Support);
        assert!(outcome.content.is_empty());
    }

    #[test]
    fn test_repeated_transition_is_idempotent() {
        let mut s = session();
        s.stage = CoachingStage::Support;
        let before_artifact = s.artifact.clone();

        let outcome = interpret(
            &[ContentBlock::tool_use(
                "t1",
                tools::TRANSITION_TO_STAGE,
                serde_json::json!({ "stage": "support", "summary": "still supporting" }),
            )],
            &mut s,
        );

        assert_eq!(s.stage, CoachingStage::Support);
        assert_eq!(s.artifact, before_artifact);
        assert!(outcome.content.contains("[Stage transition: support]"));
    }

    #[test]
    fn test_plan_generation_forces_support_and_replaces_artifact() {
        let mut s = session();
        assert_eq!(s.stage, CoachingStage::Discovery);

        let outcome = interpret(
            &[ContentBlock::tool_use("t1", tools::GENERATE_BUSINESS_PLAN, plan_input())],
            &mut s,
        );

        assert_eq!(s.stage, CoachingStage::Support);
        let plan = s.plan().unwrap();
        assert_eq!(plan.objectives.len(), 2);
        assert_eq!(plan.phases.len(), 3);
        assert_eq!(outcome.plan.as_ref().unwrap().objectives.len(), 2);
    }

    #[test]
    fn test_plan_with_profile_summary_replaces_profile_wholesale() {
        let mut s = session();
        s.business_profile = Some({
            let mut p = BusinessProfile::default();
            p.record_findings("audience", vec!["old finding".to_string()]);
            p
        });

        let mut input = plan_input();
        input["businessProfile"] = serde_json::json!({
            "snapshot": "Design studio",
            "goals": ["retainers"],
            "challenges": [],
            "offers": [],
            "constraints": "solo"
        });

        interpret(
            &[ContentBlock::tool_use("t1", tools::GENERATE_BUSINESS_PLAN, input)],
            &mut s,
        );

        let profile = s.business_profile.as_ref().unwrap();
        assert_eq!(profile.snapshot, "Design studio");
        // Wholesale replacement, not a merge
        assert!(profile.findings("audience").is_none());
    }

    #[test]
    fn test_outline_generation_replaces_artifact() {
        let mut s = session();
        let outcome = interpret(
            &[ContentBlock::tool_use(
                "t1",
                tools::GENERATE_OUTLINE,
                serde_json::json!({
                    "context": {
                        "projectType": "landing page",
                        "targetAudience": "locals",
                        "uniqueValue": "handmade",
                        "primaryGoal": "bookings",
                        "tone": "warm"
                    },
                    "outline": {
                        "summary": "A landing page",
                        "sections": [],
                        "styleRecommendations": {
                            "tone": "warm",
                            "colorSuggestions": [],
                            "layoutStyle": "single column"
                        }
                    }
                }),
            )],
            &mut s,
        );

        assert!(s.outline().is_some());
        assert!(outcome.outline.is_some());
        assert!(outcome.context.is_some());
        // Outline does not move the stage
        assert_eq!(s.stage, CoachingStage::Discovery);
    }

    #[test]
    fn test_unrecognized_tool_is_ignored() {
        let mut s = session();
        let before = s.clone();
        let outcome = interpret(
            &[
                ContentBlock::text("Still here."),
                ContentBlock::tool_use("t1", "launch_rockets", serde_json::json!({ "count": 3 })),
            ],
            &mut s,
        );

        assert_eq!(s, before);
        assert_eq!(outcome.content, "Still here.");
    }

    #[test]
    fn test_malformed_input_is_skipped_not_fatal() {
        let mut s = session();
        let outcome = interpret(
            &[
                ContentBlock::tool_use(
                    "t1",
                    tools::MARK_DISCOVERY_COMPLETE,
                    serde_json::json!({ "area": 42 }),
                ),
                ContentBlock::text("Carrying on."),
            ],
            &mut s,
        );

        assert!(s.business_profile.is_none());
        assert_eq!(outcome.content, "Carrying on.");
    }

    #[test]
    fn test_empty_blocks_give_empty_content() {
        let mut s = session();
        let outcome = interpret(&[], &mut s);
        assert!(outcome.content.is_empty());
        assert!(outcome.quick_replies.is_none());
    }
}
