//! # EduPlatform - Role-Based Education Dashboard
//!
//! The main binary for EduPlatform.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for viewing the dashboard as any role
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               apps/eduplatform (THE BINARY)          │
//! │                                                      │
//! │   ┌─────────────┐            ┌─────────────┐         │
//! │   │    CLI      │            │  HTTP API   │         │
//! │   │   (clap)    │            │   (axum)    │         │
//! │   └──────┬──────┘            └──────┬──────┘         │
//! │          └─────────────┬────────────┘                │
//! │                        ▼                             │
//! │              ┌──────────────────┐                    │
//! │              │ eduplatform-core │                    │
//! │              │   (THE LOGIC)    │                    │
//! │              └──────────────────┘                    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! eduplatform server --host 0.0.0.0 --port 8080
//!
//! # CLI views
//! eduplatform --role teacher dashboard
//! eduplatform --role admin view students
//! eduplatform --role student --json-mode permissions
//! ```

use clap::Parser;
use eduplatform::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // EDUPLATFORM_LOG_FORMAT=json enables machine-parseable output.
    let log_format =
        std::env::var("EDUPLATFORM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "eduplatform=info,tower_http=debug".into());

    // Logs go to stderr so JSON output on stdout stays parseable.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the EduPlatform startup banner.
fn print_banner() {
    println!(
        r#"
  ╔═╗┌┬┐┬ ┬╔═╗┬  ┌─┐┌┬┐┌─┐┌─┐┬─┐┌┬┐
  ║╣  │││ │╠═╝│  ├─┤ │ ├┤ │ │├┬┘│││
  ╚═╝─┴┘└─┘╩  ┴─┘┴ ┴ ┴ └  └─┘┴└─┴ ┴

  Education Dashboard v{}

  Student • Teacher • Administrator
"#,
        env!("CARGO_PKG_VERSION")
    );
}
