//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::render;
use crate::api::{self, AppState, DashboardResponse, RolesResponse};
use crate::config::AppConfig;
use eduplatform_core::{Dashboard, EduError, Section, SectionView};
use serde::Serialize;

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), EduError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| EduError::Io(format!("JSON encoding failed: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Dashboard over the sample catalog in the configured role.
fn open_dashboard(config: &AppConfig) -> Dashboard {
    let mut dashboard = Dashboard::default();
    dashboard.select_role(config.dashboard.default_role);
    dashboard
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &AppConfig) -> Result<(), EduError> {
    println!("EduPlatform Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:         {}", config.server.host);
    println!("  Port:         {}", config.server.port);
    println!("  Default role: {}", config.dashboard.default_role);
    println!();
    println!("Endpoints:");
    println!("  GET /health              - Health check");
    println!("  GET /roles               - Selectable roles");
    println!("  GET /permissions?role=   - Permission set");
    println!("  GET /dashboard?role=     - Navigation and metrics");
    println!("  GET /sections/{{name}}?role= - Section view");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    api::run_server(&addr, AppState::from_config(config)).await
}

// =============================================================================
// ROLES COMMAND
// =============================================================================

/// List selectable roles.
pub fn cmd_roles(config: &AppConfig, json_mode: bool) -> Result<(), EduError> {
    let roles = RolesResponse::new(config.dashboard.default_role);
    if json_mode {
        return print_json(&roles);
    }
    print!("{}", render::roles(&roles));
    Ok(())
}

// =============================================================================
// PERMISSIONS COMMAND
// =============================================================================

/// Show the permission set of the configured role.
pub fn cmd_permissions(config: &AppConfig, json_mode: bool) -> Result<(), EduError> {
    let permissions = open_dashboard(config).permissions();
    if json_mode {
        return print_json(&permissions);
    }
    print!("{}", render::permissions(&permissions));
    Ok(())
}

// =============================================================================
// DASHBOARD COMMAND
// =============================================================================

/// JSON form of the dashboard command: header plus the dashboard section.
#[derive(Debug, Serialize)]
struct DashboardReport {
    header: DashboardResponse,
    view: SectionView,
}

fn dashboard_report(dashboard: &Dashboard, viewer_name: &str) -> Result<DashboardReport, EduError> {
    Ok(DashboardReport {
        header: DashboardResponse::new(&dashboard.permissions(), dashboard.metrics(), viewer_name),
        view: dashboard.view(Section::Dashboard)?,
    })
}

/// Show metric cards and the dashboard panel.
pub fn cmd_dashboard(config: &AppConfig, json_mode: bool) -> Result<(), EduError> {
    let dashboard = open_dashboard(config);

    if json_mode {
        return print_json(&dashboard_report(&dashboard, &config.dashboard.viewer_name)?);
    }

    let permissions = dashboard.permissions();

    print!(
        "{}",
        render::header(&permissions, &config.dashboard.viewer_name)
    );
    let view = dashboard.view(Section::Dashboard)?;
    print!("{}", render::section(&view));
    Ok(())
}

// =============================================================================
// VIEW COMMAND
// =============================================================================

/// Show one section, refusing sections hidden from the role.
pub fn cmd_view(config: &AppConfig, json_mode: bool, section: Section) -> Result<(), EduError> {
    let dashboard = open_dashboard(config);
    let view = dashboard.view(section)?;
    tracing::debug!(role = %dashboard.role(), section = %section, "Rendering section");

    if json_mode {
        return print_json(&view);
    }
    print!("{}", render::section(&view));
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use eduplatform_core::Role;

    fn report_json(role: Role) -> serde_json::Value {
        let mut config = AppConfig::default();
        config.dashboard.default_role = role;
        let dashboard = open_dashboard(&config);
        let report = dashboard_report(&dashboard, "Tester").expect("dashboard is always visible");
        serde_json::to_value(&report).expect("serialize")
    }

    #[test]
    fn dashboard_json_carries_panel_and_recent_results() {
        let json = report_json(Role::Teacher);

        assert_eq!(json["header"]["role"], "teacher");
        assert_eq!(json["header"]["metrics"]["kind"], "staff");
        assert_eq!(json["view"]["section"], "dashboard");
        assert_eq!(json["view"]["panel"]["panel"], "student_statistics");
        assert_eq!(json["view"]["recent_results"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn dashboard_json_student_panel() {
        let json = report_json(Role::Student);

        assert_eq!(json["view"]["panel"]["panel"], "current_courses");
        assert_eq!(json["view"]["panel"]["entries"].as_array().map(Vec::len), Some(2));
    }
}
