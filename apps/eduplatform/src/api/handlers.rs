//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every handler derives its output from the request's role on the spot.
//! The catalog in [`AppState`] is shared read-only.

use super::{
    AppState,
    types::{DashboardResponse, ErrorResponse, HealthResponse, RoleQuery, RolesResponse},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eduplatform_core::{
    DashboardMetrics, EduError, PermissionSet, Role, Section, SectionView,
};

use crate::config::resolve_role;

/// Pick the request's role, falling back to the configured default.
fn request_role(state: &AppState, query: &RoleQuery) -> Role {
    query
        .role
        .as_deref()
        .map_or(state.default_role, resolve_role)
}

/// Map a core error to an HTTP status with a JSON body.
fn error_response(err: &EduError) -> Response {
    let status = match err {
        EduError::SectionHidden { .. } => StatusCode::FORBIDDEN,
        EduError::UnknownSection(_) => StatusCode::NOT_FOUND,
        EduError::UnknownRole(_) | EduError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        EduError::Config(_) | EduError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// ROLES HANDLER
// =============================================================================

/// List the selectable roles.
pub async fn roles_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(RolesResponse::new(state.default_role)))
}

// =============================================================================
// PERMISSIONS HANDLER
// =============================================================================

/// Permission set of the requested role.
pub async fn permissions_handler(
    State(state): State<AppState>,
    Query(query): Query<RoleQuery>,
) -> impl IntoResponse {
    let role = request_role(&state, &query);
    (StatusCode::OK, Json(PermissionSet::for_role(role)))
}

// =============================================================================
// DASHBOARD HANDLER
// =============================================================================

/// Header, navigation and metric cards of the requested role.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<RoleQuery>,
) -> impl IntoResponse {
    let role = request_role(&state, &query);
    let permissions = PermissionSet::for_role(role);
    let metrics = DashboardMetrics::compute(role, &state.catalog);

    (
        StatusCode::OK,
        Json(DashboardResponse::new(
            &permissions,
            metrics,
            &state.viewer_name,
        )),
    )
}

// =============================================================================
// SECTION HANDLER
// =============================================================================

/// One section view; 403 if the role cannot see it, 404 if it does not exist.
pub async fn section_handler(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Query(query): Query<RoleQuery>,
) -> Response {
    let role = request_role(&state, &query);

    let view = section
        .parse::<Section>()
        .and_then(|s| SectionView::build(s, &PermissionSet::for_role(role), &state.catalog));

    match view {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => {
            tracing::debug!(role = %role, section = %section, "Section refused: {}", e);
            error_response(&e)
        }
    }
}
