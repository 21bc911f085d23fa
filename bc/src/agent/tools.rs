//! Coaching tool definitions
//!
//! The schemas the model sees on every turn. Tool names are the contract
//! between the model and the interpreter; the constants here are the only
//! place they are spelled out.

use crate::llm::ToolDefinition;

pub const OFFER_QUICK_REPLIES: &str = "offer_quick_replies";
pub const TRANSITION_TO_STAGE: &str = "transition_to_stage";
pub const MARK_DISCOVERY_COMPLETE: &str = "mark_discovery_complete";
pub const GENERATE_BUSINESS_PLAN: &str = "generate_business_plan";
pub const GENERATE_OUTLINE: &str = "generate_outline";

/// The full tool set offered to the coaching model
pub fn coaching_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            OFFER_QUICK_REPLIES,
            "Offer the user quick reply buttons for common responses",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "options": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "label": { "type": "string", "description": "Button text" },
                                "value": { "type": "string", "description": "Value sent when clicked" }
                            },
                            "required": ["label", "value"]
                        },
                        "description": "Quick reply options (max 6)"
                    }
                },
                "required": ["options"]
            }),
        ),
        ToolDefinition::new(
            TRANSITION_TO_STAGE,
            "Mark that you are moving to a new stage in the coaching process",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "stage": {
                        "type": "string",
                        "enum": ["discovery", "plan_generation", "support"],
                        "description": "The stage you are transitioning to"
                    },
                    "summary": {
                        "type": "string",
                        "description": "Brief summary of progress made in the previous stage"
                    }
                },
                "required": ["stage"]
            }),
        ),
        ToolDefinition::new(
            MARK_DISCOVERY_COMPLETE,
            "Mark that you have gathered sufficient information about a specific discovery area",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "area": {
                        "type": "string",
                        "description": "The discovery area (e.g. business_model, audience, revenue, bottlenecks, brand_perception, etc.)"
                    },
                    "keyFindings": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "2-3 key insights you learned about this area"
                    }
                },
                "required": ["area", "keyFindings"]
            }),
        ),
        ToolDefinition::new(
            GENERATE_BUSINESS_PLAN,
            "Generate a strategic business plan based on the discovery information gathered. Use this when you have comprehensive information and are ready to create the plan.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "plan": {
                        "type": "object",
                        "description": "The strategic business plan",
                        "properties": {
                            "objectives": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "string" },
                                        "description": { "type": "string" },
                                        "measurable": { "type": "string", "description": "How success is measured" }
                                    },
                                    "required": ["id", "description", "measurable"]
                                },
                                "description": "2-4 clear, measurable objectives aligned with user goals"
                            },
                            "strategyOverview": {
                                "type": "string",
                                "description": "1-2 paragraphs summarizing the main approach"
                            },
                            "phases": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string" },
                                        "timeframe": { "type": "string", "description": "e.g. \"0-30 days\", \"30-90 days\", \"90+ days\"" },
                                        "actions": {
                                            "type": "array",
                                            "items": {
                                                "type": "object",
                                                "properties": {
                                                    "id": { "type": "string" },
                                                    "description": { "type": "string" },
                                                    "priority": { "type": "string", "enum": ["high", "medium", "low"] }
                                                },
                                                "required": ["id", "description", "priority"]
                                            }
                                        }
                                    },
                                    "required": ["name", "timeframe", "actions"]
                                },
                                "description": "3 phases: Foundation (0-30 days), Build & Optimize (30-90 days), Scale & Refine (90+ days)"
                            },
                            "metrics": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "metric": { "type": "string" },
                                        "target": { "type": "string" },
                                        "checkpoint": { "type": "string", "description": "When to review" }
                                    },
                                    "required": ["metric", "target", "checkpoint"]
                                }
                            },
                            "risks": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "risk": { "type": "string" },
                                        "mitigation": { "type": "string" }
                                    },
                                    "required": ["risk", "mitigation"]
                                },
                                "description": "3-5 likely obstacles with suggestions to address them"
                            }
                        },
                        "required": ["objectives", "strategyOverview", "phases", "metrics", "risks"]
                    },
                    "businessProfile": {
                        "type": "object",
                        "description": "Summary of business information gathered during discovery",
                        "properties": {
                            "snapshot": { "type": "string" },
                            "goals": { "type": "array", "items": { "type": "string" } },
                            "challenges": { "type": "array", "items": { "type": "string" } },
                            "offers": { "type": "array", "items": { "type": "string" } },
                            "constraints": { "type": "string" }
                        }
                    }
                },
                "required": ["plan"]
            }),
        ),
        ToolDefinition::new(
            GENERATE_OUTLINE,
            "Generate the project outline when you have enough information. Call this when ready to present the strategic plan. (Legacy tool for web project coaching)",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "context": {
                        "type": "object",
                        "description": "Extracted context from the conversation",
                        "properties": {
                            "projectType": { "type": "string" },
                            "businessName": { "type": "string" },
                            "targetAudience": { "type": "string" },
                            "uniqueValue": { "type": "string" },
                            "primaryGoal": { "type": "string" },
                            "tone": { "type": "string" },
                            "additionalNotes": { "type": "string" }
                        },
                        "required": ["projectType", "targetAudience", "uniqueValue", "primaryGoal", "tone"]
                    },
                    "outline": {
                        "type": "object",
                        "description": "The strategic project outline",
                        "properties": {
                            "summary": { "type": "string", "description": "Brief summary of what we are building and why" },
                            "sections": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "string" },
                                        "name": { "type": "string" },
                                        "purpose": { "type": "string" },
                                        "keyElements": { "type": "array", "items": { "type": "string" } },
                                        "copyGuidance": { "type": "string" },
                                        "priority": { "type": "string", "enum": ["must-have", "recommended", "optional"] }
                                    },
                                    "required": ["id", "name", "purpose", "keyElements", "priority"]
                                }
                            },
                            "styleRecommendations": {
                                "type": "object",
                                "properties": {
                                    "tone": { "type": "string" },
                                    "colorSuggestions": { "type": "array", "items": { "type": "string" } },
                                    "layoutStyle": { "type": "string" }
                                }
                            }
                        },
                        "required": ["summary", "sections", "styleRecommendations"]
                    }
                },
                "required": ["context", "outline"]
            }),
        ),
    ]
}
