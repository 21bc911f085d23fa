//! BizCoach CLI entry point
//!
//! Thin driver around the coaching service: resolves the acting user,
//! loads config, wires the repositories and LLM client, and maps each
//! subcommand to one service operation.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use bizcoach::cli::{Cli, Command, resolve_user};
use bizcoach::config::Config;
use bizcoach::domain::{CoachType, CoachingStyle, MessageRole};
use bizcoach::error::CoachError;
use bizcoach::llm::create_client;
use bizcoach::service::CoachingService;
use bizcoach::storage::{DocProjectRepository, DocSessionRepository};
use docstore::Store;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bizcoach")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            other => {
                eprintln!("Warning: Unknown log-level '{other}', defaulting to INFO");
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("bizcoach.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn build_service(config: &Config) -> Result<CoachingService> {
    let store = Store::open(config.storage.resolve_data_dir()).context("Failed to open data store")?;
    let llm = create_client(&config.llm).context("Failed to create LLM client")?;

    CoachingService::new(
        Arc::new(DocSessionRepository::new(store.clone())),
        Arc::new(DocProjectRepository::new(store)),
        llm,
        config.llm.clone(),
    )
}

/// Print a coach reply the way the chat UI would show it
fn print_reply(outcome: &bizcoach::TurnOutcome) {
    println!("{}", outcome.content);
    if let Some(replies) = &outcome.quick_replies {
        for reply in replies {
            println!("  [{}]", reply.label);
        }
    }
    if let Some(plan) = &outcome.plan {
        println!(
            "\n(plan generated: {} objectives, {} phases, {} metrics, {} risks)",
            plan.objectives.len(),
            plan.phases.len(),
            plan.metrics.len(),
            plan.risks.len()
        );
    }
    if let Some(outline) = &outcome.outline {
        println!("\n(outline generated: {} sections)", outline.sections.len());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    let user = resolve_user(cli.user.as_deref());
    debug!(%user, "main: acting as user");

    let service = build_service(&config)?;

    let result = run_command(&service, &user, cli.command).await;
    if let Err(err) = result {
        // The specific reason goes to the log; the terminal gets the
        // user-facing wording
        tracing::error!(error = %err, "command failed");
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run_command(service: &CoachingService, user: &str, command: Command) -> std::result::Result<(), CoachError> {
    match command {
        Command::Start { coach, style } => {
            let coach = coach
                .parse::<CoachType>()
                .map_err(CoachError::Precondition)?;
            let style = style
                .parse::<CoachingStyle>()
                .map_err(CoachError::Precondition)?;

            let response = service.start(user, coach, style).await?;
            println!("Session: {}", response.session_id);
            println!();
            println!("{}", response.message.content);
        }
        Command::Chat { session_id, message } => {
            let response = service.chat(user, &session_id, &message).await?;
            print_reply(&response.outcome);
            debug!(stage = %response.stage, status = %response.status, "chat complete");
        }
        Command::Revise { session_id, feedback } => {
            let response = service.revise(user, &session_id, &feedback).await?;
            print_reply(&response.outcome);
        }
        Command::SwitchCoach {
            session_id,
            coach,
            style,
        } => {
            let coach = coach
                .parse::<CoachType>()
                .map_err(CoachError::Precondition)?;
            let style = style
                .map(|s| s.parse::<CoachingStyle>().map_err(CoachError::Precondition))
                .transpose()?;

            let session = service.switch_coach(user, &session_id, coach, style).await?;
            println!(
                "Switched to {} coach ({} style)",
                session.coach_type.display_name(),
                session.coaching_style.display_name()
            );
        }
        Command::Approve { session_id, name } => {
            let project = service.approve(user, &session_id, name.as_deref()).await?;
            println!("Project created: {} ({})", project.name, project.id);
        }
        Command::Show { session_id } => {
            let session = service.get_session(user, &session_id).await?;
            println!("Session {}", session.id);
            println!(
                "  coach: {} ({} style)",
                session.coach_type.display_name(),
                session.coaching_style.display_name()
            );
            println!("  stage: {}", session.stage);
            println!("  status: {}", session.status());
            if let Some(created) = chrono::DateTime::from_timestamp_millis(session.created_at_ms) {
                println!("  created: {}", created.to_rfc3339());
            }
            println!("  messages:");
            for msg in &session.messages {
                let who = match msg.role {
                    MessageRole::User => "you",
                    MessageRole::Coach => "coach",
                };
                println!("    [{who}] {}", msg.content);
            }
        }
        Command::Brief { project_id } => {
            let markdown = service.project_brief(user, &project_id).await?;
            println!("{markdown}");
        }
        Command::Projects => {
            let projects = service.list_projects(user).await?;
            if projects.is_empty() {
                println!("No projects yet.");
            }
            for project in projects {
                println!("{}  {}  ({})", project.id, project.name, project.status);
            }
        }
    }
    Ok(())
}
