//! Integration tests for the coaching engine
//!
//! These drive the service layer end-to-end against a scripted LLM client
//! and a temp-dir document store, the way the HTTP handlers drive it in
//! production.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use bizcoach::config::LlmConfig;
use bizcoach::domain::{CoachType, CoachingStage, CoachingStyle, MessageRole, SessionStatus};
use bizcoach::error::CoachError;
use bizcoach::llm::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, StopReason, TokenUsage,
    complete_with_fallback,
};
use bizcoach::service::CoachingService;
use bizcoach::storage::{DocProjectRepository, DocSessionRepository};
use docstore::Store;

// =============================================================================
// Scripted LLM client
// =============================================================================

/// Pops scripted results in order and records every attempted model id
struct ScriptedClient {
    results: Mutex<Vec<Result<CompletionResponse, LlmError>>>,
    attempted_models: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(results: Vec<Result<CompletionResponse, LlmError>>) -> Self {
        Self {
            results: Mutex::new(results),
            attempted_models: Mutex::new(Vec::new()),
        }
    }

    fn attempted_models(&self) -> Vec<String> {
        self.attempted_models.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.attempted_models.lock().unwrap().push(request.model.clone());
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Err(LlmError::InvalidResponse("no scripted responses left".to_string()));
        }
        results.remove(0)
    }
}

fn response(blocks: Vec<ContentBlock>) -> CompletionResponse {
    CompletionResponse {
        content: blocks,
        stop_reason: StopReason::EndTurn,
        usage: TokenUsage::default(),
    }
}

fn text(t: &str) -> ContentBlock {
    ContentBlock::text(t)
}

fn service_with(
    dir: &TempDir,
    results: Vec<Result<CompletionResponse, LlmError>>,
) -> (CoachingService, Arc<ScriptedClient>) {
    let store = Store::open(dir.path()).unwrap();
    let client = Arc::new(ScriptedClient::new(results));
    let service = CoachingService::new(
        Arc::new(DocSessionRepository::new(store.clone())),
        Arc::new(DocProjectRepository::new(store)),
        client.clone(),
        LlmConfig::default(),
    )
    .unwrap();
    (service, client)
}

fn plan_tool_call() -> ContentBlock {
    ContentBlock::tool_use(
        "toolu_plan",
        "generate_business_plan",
        serde_json::json!({
            "plan": {
                "strategyOverview": "Focus the studio on high-margin classes.",
                "objectives": [
                    { "id": "o1", "description": "Double class bookings", "measurable": "30 bookings/month" },
                    { "id": "o2", "description": "Launch a membership", "measurable": "25 members" }
                ],
                "phases": [
                    { "name": "Foundation", "timeframe": "0-30 days", "actions": [
                        { "id": "a1", "description": "Rework the schedule page", "priority": "high" }
                    ]},
                    { "name": "Build & Optimize", "timeframe": "30-90 days", "actions": [] },
                    { "name": "Scale & Refine", "timeframe": "90+ days", "actions": [] }
                ],
                "metrics": [
                    { "metric": "Bookings", "target": "30/month", "checkpoint": "Weekly" },
                    { "metric": "Members", "target": "25", "checkpoint": "Monthly" },
                    { "metric": "Revenue", "target": "+40%", "checkpoint": "Quarterly" }
                ],
                "risks": [
                    { "risk": "Seasonality", "mitigation": "Gift card pushes" },
                    { "risk": "Capacity", "mitigation": "Waitlists" },
                    { "risk": "Founder burnout", "mitigation": "Hire an assistant teacher" }
                ]
            }
        }),
    )
}

fn outline_tool_call(summary: &str) -> ContentBlock {
    ContentBlock::tool_use(
        "toolu_outline",
        "generate_outline",
        serde_json::json!({
            "context": {
                "projectType": "landing page",
                "businessName": "Clay & Co",
                "targetAudience": "local hobbyists",
                "uniqueValue": "hands-on classes",
                "primaryGoal": "bookings",
                "tone": "warm"
            },
            "outline": {
                "summary": summary,
                "sections": [
                    {
                        "id": "hero",
                        "name": "Hero",
                        "purpose": "First impression",
                        "keyElements": ["headline", "cta"],
                        "priority": "must-have"
                    }
                ],
                "styleRecommendations": {
                    "tone": "warm",
                    "colorSuggestions": ["terracotta"],
                    "layoutStyle": "single column"
                }
            }
        }),
    )
}

// =============================================================================
// Round-trip
// =============================================================================

#[tokio::test]
async fn test_session_round_trips_through_storage() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![Ok(response(vec![
            text("Noted. Here is your plan."),
            ContentBlock::tool_use(
                "t1",
                "mark_discovery_complete",
                serde_json::json!({ "area": "audience", "keyFindings": ["local hobbyists"] }),
            ),
            plan_tool_call(),
        ]))],
    );

    let start = service
        .start("user-1", CoachType::Brand, CoachingStyle::Strategist)
        .await
        .unwrap();
    service.chat("user-1", &start.session_id, "We teach pottery").await.unwrap();

    // Reload twice; reconstruction must be lossless and stable
    let first = service.get_session("user-1", &start.session_id).await.unwrap();
    let second = service.get_session("user-1", &start.session_id).await.unwrap();

    assert_eq!(first.messages, second.messages);
    assert_eq!(first.stage, second.stage);
    assert_eq!(first.coach_type, second.coach_type);
    assert_eq!(first.coaching_style, second.coaching_style);
    assert_eq!(first.business_profile, second.business_profile);
    assert_eq!(first.artifact, second.artifact);

    assert_eq!(first.coach_type, CoachType::Brand);
    assert_eq!(first.stage, CoachingStage::Support);
    assert!(first.plan().is_some());
    let profile = first.business_profile.as_ref().unwrap();
    assert_eq!(profile.findings("audience").unwrap(), &["local hobbyists".to_string()]);
}

// =============================================================================
// Monotonic history
// =============================================================================

#[tokio::test]
async fn test_history_grows_by_two_per_successful_chat() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![
            Ok(response(vec![text("First answer")])),
            Ok(response(vec![text("Second answer")])),
            Ok(response(vec![text("Third answer")])),
        ],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    let initial_len = service
        .get_session("user-1", &start.session_id)
        .await
        .unwrap()
        .messages
        .len();

    for i in 0..3 {
        service
            .chat("user-1", &start.session_id, &format!("message {i}"))
            .await
            .unwrap();
    }

    let session = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(session.messages.len(), initial_len + 2 * 3);

    // Roles strictly alternate after the opening
    for pair in session.messages[initial_len..].chunks(2) {
        assert_eq!(pair[0].role, MessageRole::User);
        assert_eq!(pair[1].role, MessageRole::Coach);
    }
}

#[tokio::test]
async fn test_failed_chat_commits_nothing() {
    let dir = TempDir::new().unwrap();
    // Both candidate models fail with a model-level error, exhausting
    // the fallback chain
    let (service, _) = service_with(
        &dir,
        vec![
            Err(LlmError::ApiError {
                status: 404,
                message: "no such model".to_string(),
            }),
            Err(LlmError::ApiError {
                status: 404,
                message: "no such model".to_string(),
            }),
            Err(LlmError::ApiError {
                status: 404,
                message: "no such model".to_string(),
            }),
        ],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    let before = service.get_session("user-1", &start.session_id).await.unwrap();

    let err = service
        .chat("user-1", &start.session_id, "is anyone there?")
        .await
        .unwrap_err();
    assert!(matches!(err, CoachError::Llm(LlmError::AllModelsFailed { .. })));

    let after = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(after.messages.len(), before.messages.len());
    assert_eq!(after.messages, before.messages);
}

// =============================================================================
// Fallback ordering and fatal short-circuit
// =============================================================================

#[tokio::test]
async fn test_fallback_uses_second_model_and_never_third() {
    let client = ScriptedClient::new(vec![
        Err(LlmError::ApiError {
            status: 404,
            message: "model not found".to_string(),
        }),
        Ok(response(vec![text("answer from b")])),
    ]);

    let request = CompletionRequest {
        model: String::new(),
        system_prompt: "system".to_string(),
        messages: vec![],
        tools: vec![],
        max_tokens: 1024,
    };
    let models = vec!["model-a".to_string(), "model-b".to_string(), "model-c".to_string()];

    let outcome = complete_with_fallback(&client, request, &models).await.unwrap();

    assert_eq!(outcome.model, "model-b");
    assert_eq!(outcome.response.text(), "answer from b");
    assert_eq!(client.attempted_models(), vec!["model-a", "model-b"]);
}

#[tokio::test]
async fn test_auth_failure_stops_before_second_model() {
    let client = ScriptedClient::new(vec![Err(LlmError::Auth {
        status: 401,
        message: "invalid key".to_string(),
    })]);

    let request = CompletionRequest {
        model: String::new(),
        system_prompt: "system".to_string(),
        messages: vec![],
        tools: vec![],
        max_tokens: 1024,
    };
    let models = vec!["model-a".to_string(), "model-b".to_string(), "model-c".to_string()];

    let err = complete_with_fallback(&client, request, &models).await.unwrap_err();

    assert!(matches!(err, LlmError::Auth { status: 401, .. }));
    assert_eq!(client.attempted_models(), vec!["model-a"]);
}

// =============================================================================
// Discovery accumulation
// =============================================================================

#[tokio::test]
async fn test_discovery_findings_overwrite_not_union() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![
            Ok(response(vec![
                text("Got it."),
                ContentBlock::tool_use(
                    "t1",
                    "mark_discovery_complete",
                    serde_json::json!({ "area": "audience", "keyFindings": ["a", "b"] }),
                ),
            ])),
            Ok(response(vec![
                text("Updated."),
                ContentBlock::tool_use(
                    "t2",
                    "mark_discovery_complete",
                    serde_json::json!({ "area": "audience", "keyFindings": ["c"] }),
                ),
            ])),
        ],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();

    service.chat("user-1", &start.session_id, "first answer").await.unwrap();
    let mid = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(
        mid.business_profile.as_ref().unwrap().findings("audience").unwrap(),
        &["a".to_string(), "b".to_string()]
    );

    service.chat("user-1", &start.session_id, "second answer").await.unwrap();
    let after = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(
        after.business_profile.as_ref().unwrap().findings("audience").unwrap(),
        &["c".to_string()]
    );
}

// =============================================================================
// Stage transition idempotence
// =============================================================================

#[tokio::test]
async fn test_transition_to_current_stage_changes_nothing_but_annotation() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![
            Ok(response(vec![text("Here's the plan."), plan_tool_call()])),
            Ok(response(vec![
                text("Still in support."),
                ContentBlock::tool_use(
                    "t1",
                    "transition_to_stage",
                    serde_json::json!({ "stage": "support", "summary": "continuing support" }),
                ),
            ])),
        ],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    service.chat("user-1", &start.session_id, "plan please").await.unwrap();

    let before = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(before.stage, CoachingStage::Support);

    let chat = service
        .chat("user-1", &start.session_id, "what now?")
        .await
        .unwrap();

    let after = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(after.stage, CoachingStage::Support);
    assert_eq!(after.artifact, before.artifact);
    assert_eq!(after.business_profile, before.business_profile);
    assert!(chat.outcome.content.contains("[Stage transition: support]"));
}

// =============================================================================
// Artifact exclusivity at approval
// =============================================================================

#[tokio::test]
async fn test_approve_requires_an_artifact() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(&dir, vec![]);

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();

    let err = service.approve("user-1", &start.session_id, None).await.unwrap_err();
    assert!(err.is_precondition());
}

#[tokio::test]
async fn test_approve_with_plan_copies_plan_and_clears_legacy_outline() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(&dir, vec![Ok(response(vec![text("Plan ready."), plan_tool_call()]))]);

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    service.chat("user-1", &start.session_id, "go").await.unwrap();

    let project = service
        .approve("user-1", &start.session_id, Some("Pottery Plan"))
        .await
        .unwrap();

    assert_eq!(project.name, "Pottery Plan");
    assert!(project.plan.is_some());
    assert!(project.outline.is_none());
    assert!(project.context.is_none());
    assert_eq!(project.status, bizcoach::ProjectStatus::OutlineReady);

    let session = service.get_session("user-1", &start.session_id).await.unwrap();
    assert_eq!(session.status(), SessionStatus::Approved);
    assert_eq!(session.stage, CoachingStage::Support);
}

#[tokio::test]
async fn test_approve_with_outline_copies_outline_and_context() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![Ok(response(vec![
            text("Here's your outline."),
            outline_tool_call("A pottery studio site"),
        ]))],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    service.chat("user-1", &start.session_id, "outline please").await.unwrap();

    let project = service.approve("user-1", &start.session_id, None).await.unwrap();

    assert_eq!(project.name, "New Project");
    assert!(project.plan.is_none());
    assert_eq!(project.outline.as_ref().unwrap().summary, "A pottery studio site");
    assert!(project.context.is_some());
}

// =============================================================================
// Revise
// =============================================================================

#[tokio::test]
async fn test_revise_requires_an_outline() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(&dir, vec![]);

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();

    let err = service
        .revise("user-1", &start.session_id, "make it shorter")
        .await
        .unwrap_err();
    assert!(err.is_precondition());
}

#[tokio::test]
async fn test_revise_replaces_the_outline() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service_with(
        &dir,
        vec![
            Ok(response(vec![text("First cut."), outline_tool_call("First summary")])),
            Ok(response(vec![text("Revised."), outline_tool_call("Revised summary")])),
        ],
    );

    let start = service
        .start("user-1", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    service.chat("user-1", &start.session_id, "outline please").await.unwrap();

    let response = service
        .revise("user-1", &start.session_id, "tighter summary")
        .await
        .unwrap();
    assert_eq!(response.outcome.outline.as_ref().unwrap().summary, "Revised summary");

    let session = service.get_session("user-1", &start.session_id).await.unwrap();
    let (outline, _) = session.outline().unwrap();
    assert_eq!(outline.summary, "Revised summary");
    // Revision appended its prompt and the coach reply
    assert_eq!(session.messages.len(), 1 + 2 + 2);
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[tokio::test]
async fn test_full_coaching_flow_to_plan() {
    let dir = TempDir::new().unwrap();
    let (service, client) = service_with(
        &dir,
        vec![Ok(response(vec![
            text("Based on everything you shared, here is your strategic plan."),
            plan_tool_call(),
        ]))],
    );

    // Start: fixed opening, no model call, discovery stage
    let start = service
        .start("user-7", CoachType::Strategy, CoachingStyle::Mentor)
        .await
        .unwrap();
    assert!(
        start
            .message
            .content
            .starts_with("Thanks for choosing the Strategy & Clarity Coach.")
    );
    assert!(start.message.quick_replies.is_none());
    assert!(client.attempted_models().is_empty());

    let session = service.get_session("user-7", &start.session_id).await.unwrap();
    assert_eq!(session.stage, CoachingStage::Discovery);
    assert_eq!(session.status(), SessionStatus::InProgress);

    // One message; the model answers with text plus a plan tool call
    let chat = service
        .chat("user-7", &start.session_id, "I run a pottery studio, ready for a plan")
        .await
        .unwrap();

    assert_eq!(chat.stage, CoachingStage::Support);
    assert_eq!(chat.status, SessionStatus::OutlineReady);
    assert!(chat.outcome.content.contains("here is your strategic plan"));

    let plan = chat.outcome.plan.as_ref().unwrap();
    assert_eq!(plan.objectives.len(), 2);
    assert_eq!(plan.phases.len(), 3);
    assert_eq!(plan.metrics.len(), 3);
    assert_eq!(plan.risks.len(), 3);

    // The persisted session agrees
    let session = service.get_session("user-7", &start.session_id).await.unwrap();
    assert_eq!(session.stage, CoachingStage::Support);
    assert_eq!(session.status(), SessionStatus::OutlineReady);
    let stored_plan = session.plan().unwrap();
    assert_eq!(stored_plan.objectives.len(), 2);
    assert_eq!(stored_plan.phases.len(), 3);

    // And the brief renders from the approved project
    let project = service.approve("user-7", &start.session_id, Some("Studio")).await.unwrap();
    let brief = service.project_brief("user-7", &project.id).await.unwrap();
    assert!(brief.contains("# Strategic Plan: Studio"));
    assert!(brief.contains("Double class bookings"));

    let project = service.list_projects("user-7").await.unwrap().remove(0);
    assert!(project.brief_generated);
}
