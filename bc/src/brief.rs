//! Brief generation
//!
//! Pure string templating over finalized artifacts. The outline brief
//! reproduces the build-brief document handed to the site generator; the
//! plan brief renders the strategic plan for the same download flow.

use crate::domain::{BusinessPlan, BusinessProfile, ProjectContext, ProjectOutline, SectionPriority};

/// Markdown build brief for a legacy project outline
pub fn outline_brief(outline: &ProjectOutline, context: &ProjectContext, _project_name: &str) -> String {
    let sections_text = outline
        .sections
        .iter()
        .map(|section| {
            let priority_marker = if section.priority == SectionPriority::MustHave {
                "*"
            } else {
                "-"
            };
            let mut text = format!(
                "\n### {priority_marker} {} ({})\n",
                section.name,
                section.priority.as_str()
            );
            text.push_str(&format!("**Purpose:** {}\n", section.purpose));
            text.push_str("**Key Elements:**\n");
            for element in &section.key_elements {
                text.push_str(&format!("- {element}\n"));
            }
            if let Some(guidance) = &section.copy_guidance {
                text.push_str(&format!("\n**Copy Guidance:** {guidance}\n"));
            }
            text.push_str(&format!(
                "\n**File Location:** `src/components/sections/{}.tsx`\n",
                section.id
            ));
            text
        })
        .collect::<Vec<_>>()
        .join("\n---\n");

    let colors = outline
        .style_recommendations
        .color_suggestions
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# Project Build Brief

## Business Context

**Project Type:** {project_type}
**Business Name:** {business_name}
**Target Audience:** {target_audience}
**Unique Value Proposition:** {unique_value}
**Primary Goal:** {primary_goal}
**Brand Tone:** {tone}
**Additional Notes:** {notes}

## Project Summary

{summary}

## Sections to Build
{sections_text}

## Style Guidelines

**Design Tone:** {design_tone}

**Color Palette:**
{colors}

**Layout Style:** {layout_style}

**Component Library:** Use Tailwind CSS for styling. Prefer functional components with TypeScript.

## Technical Requirements

**Framework:** Next.js 14+ (App Router)
**Styling:** Tailwind CSS
**Language:** TypeScript
**Deployment:** Vercel-ready
**Performance:** Lighthouse score > 90

## Build Instructions

1. Initialize Next.js project with TypeScript and Tailwind CSS
2. Build sections in priority order (must-have first)
3. Implement responsive design (mobile, tablet, desktop)
4. Optimize images and assets
5. Test on multiple devices and browsers

## Success Criteria

- [ ] All must-have sections implemented
- [ ] Mobile-responsive design
- [ ] Fast page load (< 3 seconds)
- [ ] Accessible (WCAG 2.1 AA)
- [ ] SEO-optimized (meta tags, structured data)
"#,
        project_type = context.project_type,
        business_name = context.business_name.as_deref().unwrap_or("Not specified"),
        target_audience = context.target_audience,
        unique_value = context.unique_value,
        primary_goal = context.primary_goal,
        tone = context.tone,
        notes = context.additional_notes.as_deref().unwrap_or("None"),
        summary = outline.summary,
        design_tone = outline.style_recommendations.tone,
        layout_style = outline.style_recommendations.layout_style,
    )
}

/// Markdown brief for a strategic business plan
pub fn plan_brief(plan: &BusinessPlan, profile: Option<&BusinessProfile>, project_name: &str) -> String {
    let mut brief = format!("# Strategic Plan: {project_name}\n\n");

    if let Some(profile) = profile {
        brief.push_str("## Business Snapshot\n\n");
        if !profile.snapshot.is_empty() {
            brief.push_str(&format!("{}\n\n", profile.snapshot));
        }
        if !profile.goals.is_empty() {
            brief.push_str("**Goals:**\n");
            for goal in &profile.goals {
                brief.push_str(&format!("- {goal}\n"));
            }
            brief.push('\n');
        }
        if !profile.challenges.is_empty() {
            brief.push_str("**Challenges:**\n");
            for challenge in &profile.challenges {
                brief.push_str(&format!("- {challenge}\n"));
            }
            brief.push('\n');
        }
        if !profile.constraints.is_empty() {
            brief.push_str(&format!("**Constraints:** {}\n\n", profile.constraints));
        }
    }

    brief.push_str("## Strategy Overview\n\n");
    brief.push_str(&format!("{}\n\n", plan.strategy_overview));

    brief.push_str("## Objectives\n\n");
    for objective in &plan.objectives {
        brief.push_str(&format!(
            "- **{}** (measured by: {})\n",
            objective.description, objective.measurable
        ));
    }
    brief.push('\n');

    brief.push_str("## Phases\n");
    for phase in &plan.phases {
        brief.push_str(&format!("\n### {} ({})\n\n", phase.name, phase.timeframe));
        for action in &phase.actions {
            brief.push_str(&format!(
                "- [{}] {} (`{}`)\n",
                match action.priority {
                    crate::domain::ActionPriority::High => "high",
                    crate::domain::ActionPriority::Medium => "medium",
                    crate::domain::ActionPriority::Low => "low",
                },
                action.description,
                action.id
            ));
        }
    }
    brief.push('\n');

    brief.push_str("## Metrics\n\n");
    for metric in &plan.metrics {
        brief.push_str(&format!(
            "- **{}** - target: {}, review: {}\n",
            metric.metric, metric.target, metric.checkpoint
        ));
    }
    brief.push('\n');

    brief.push_str("## Risks & Mitigations\n\n");
    for risk in &plan.risks {
        brief.push_str(&format!("- **{}** - {}\n", risk.risk, risk.mitigation));
    }

    brief
}

/// Machine-readable metadata for a finalized outline
pub fn outline_metadata_json(outline: &ProjectOutline, context: &ProjectContext) -> serde_json::Value {
    serde_json::json!({
        "project": {
            "type": context.project_type,
            "businessName": context.business_name,
            "targetAudience": context.target_audience,
            "uniqueValue": context.unique_value,
            "primaryGoal": context.primary_goal,
            "tone": context.tone,
        },
        "outline": {
            "summary": outline.summary,
            "sections": outline.sections,
            "styleRecommendations": outline.style_recommendations,
        },
        "generatedAt": chrono::Utc::now().to_rfc3339(),
        "version": "1.0",
    })
}
