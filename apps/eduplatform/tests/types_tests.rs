//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use eduplatform::api::{
    DashboardResponse, ErrorResponse, HealthResponse, RoleQuery, RolesResponse,
};
use eduplatform_core::{Catalog, DashboardMetrics, Role, Section};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"healthy","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// ROLE QUERY TESTS
// =============================================================================

#[test]
fn test_role_query_optional() {
    let query: RoleQuery = serde_json::from_str("{}").unwrap();
    assert!(query.role.is_none());

    let query: RoleQuery = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
    assert_eq!(query.role.as_deref(), Some("admin"));
}

// =============================================================================
// ROLES RESPONSE TESTS
// =============================================================================

#[test]
fn test_roles_response_serialization() {
    let roles = RolesResponse::new(Role::Student);
    let json = serde_json::to_string(&roles).unwrap();

    assert!(json.contains(r#"{"role":"student","title":"Student"}"#));
    assert!(json.contains(r#"{"role":"teacher","title":"Teacher"}"#));
    assert!(json.contains(r#""default_role":"student""#));
}

// =============================================================================
// DASHBOARD RESPONSE TESTS
// =============================================================================

#[test]
fn test_dashboard_response_sections_follow_permissions() {
    let permissions = Role::Admin.permissions();
    let metrics = DashboardMetrics::compute(Role::Admin, &Catalog::sample());
    let response = DashboardResponse::new(&permissions, metrics, "Tester");

    let sections: Vec<Section> = response.sections.iter().map(|s| s.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
    assert_eq!(response.sections[4].label, "Administration");
    assert_eq!(response.viewer_name, "Tester");
}

#[test]
fn test_dashboard_response_metrics_tag() {
    let permissions = Role::Teacher.permissions();
    let metrics = DashboardMetrics::compute(Role::Teacher, &Catalog::sample());
    let response = DashboardResponse::new(&permissions, metrics, "Tester");

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["metrics"]["kind"], "staff");
    assert_eq!(json["metrics"]["total_students"], 3);
    assert_eq!(json["role"], "teacher");
}

#[test]
fn test_dashboard_response_round_trip_metrics() {
    let permissions = Role::Student.permissions();
    let metrics = DashboardMetrics::compute(Role::Student, &Catalog::sample());
    let response = DashboardResponse::new(&permissions, metrics, "Tester");

    let json = serde_json::to_string(&response).unwrap();
    let parsed: DashboardResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.metrics, metrics);
}

// =============================================================================
// ERROR RESPONSE TESTS
// =============================================================================

#[test]
fn test_error_response_serialization() {
    let error = ErrorResponse::new("Section 'admin' is not visible to role 'teacher'");
    let json = serde_json::to_string(&error).unwrap();
    assert_eq!(
        json,
        r#"{"error":"Section 'admin' is not visible to role 'teacher'"}"#
    );
}
