//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BizCoach - AI business coaching sessions from the terminal
#[derive(Parser)]
#[command(name = "bc", about = "AI business coaching session engine", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// User id to act as (defaults to $USER)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new coaching session
    Start {
        /// Coach type (strategy, brand, marketing, leadership, customer_experience)
        #[arg(long, default_value = "strategy")]
        coach: String,

        /// Coaching style (mentor, realist, strategist, accountability_partner)
        #[arg(long, default_value = "mentor")]
        style: String,
    },

    /// Send a message in an existing session
    Chat {
        /// Session id
        session_id: String,

        /// The message to send
        message: String,
    },

    /// Revise the session's outline with feedback
    Revise {
        /// Session id
        session_id: String,

        /// Feedback on the current outline
        feedback: String,
    },

    /// Switch the coach persona mid-session
    SwitchCoach {
        /// Session id
        session_id: String,

        /// New coach type
        #[arg(long)]
        coach: String,

        /// New coaching style (kept unchanged when omitted)
        #[arg(long)]
        style: Option<String>,
    },

    /// Approve the session's artifact into a project
    Approve {
        /// Session id
        session_id: String,

        /// Name for the created project
        #[arg(long)]
        name: Option<String>,
    },

    /// Show a session's state
    Show {
        /// Session id
        session_id: String,
    },

    /// Generate and print a project's brief
    Brief {
        /// Project id
        project_id: String,
    },

    /// List your projects
    Projects,
}

/// Resolve the acting user id: flag first, then $USER, then a fixed
/// local fallback
pub fn resolve_user(flag: Option<&str>) -> String {
    if let Some(user) = flag {
        return user.to_string();
    }
    std::env::var("USER").unwrap_or_else(|_| "local".to_string())
}
