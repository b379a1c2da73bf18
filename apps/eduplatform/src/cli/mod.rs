//! # EduPlatform CLI Module
//!
//! This module implements the CLI interface for EduPlatform.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `roles` - List selectable roles
//! - `permissions` - Show the permission set of a role
//! - `dashboard` - Show metric cards and the dashboard panel
//! - `view` - Show one section

mod commands;
mod render;

use clap::{Parser, Subcommand};
use eduplatform_core::{EduError, Section};
use std::path::PathBuf;

pub use commands::*;

use crate::config::{AppConfig, resolve_role};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// EduPlatform - role-based education dashboard
///
/// Shows what a student, teacher or administrator sees over the sample
/// catalog of courses, test results and students.
#[derive(Parser, Debug)]
#[command(name = "eduplatform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the TOML configuration file (optional)
    #[arg(short = 'c', long, global = true, default_value = "eduplatform.toml")]
    pub config: PathBuf,

    /// Role to view as: student, teacher or admin
    #[arg(short = 'r', long, global = true)]
    pub role: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List selectable roles
    Roles,

    /// Show the permission set of the role
    Permissions,

    /// Show the dashboard (metric cards and panel)
    Dashboard,

    /// Show one section
    View {
        /// Section: dashboard, courses, results, students, admin
        section: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), EduError> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(role) = cli.role.as_deref() {
        config.dashboard.default_role = resolve_role(role);
    }
    if cli.verbose {
        tracing::info!(
            role = %config.dashboard.default_role,
            config = %cli.config.display(),
            "Configuration resolved"
        );
    }

    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_server(&config).await
        }
        Some(Commands::Roles) => cmd_roles(&config, json_mode),
        Some(Commands::Permissions) => cmd_permissions(&config, json_mode),
        Some(Commands::Dashboard) | None => cmd_dashboard(&config, json_mode),
        Some(Commands::View { section }) => {
            let section: Section = section.parse()?;
            cmd_view(&config, json_mode, section)
        }
    }
}
