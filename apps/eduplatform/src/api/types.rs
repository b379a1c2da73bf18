//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use eduplatform_core::{DashboardMetrics, PermissionSet, Role, Section};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ROLE QUERY
// =============================================================================

/// `?role=` query parameter accepted by role-dependent endpoints.
///
/// Absent means the configured default role; unknown text means student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

// =============================================================================
// ROLES RESPONSE
// =============================================================================

/// One entry of the role selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: Role,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleEntry>,
    pub default_role: Role,
}

impl RolesResponse {
    pub fn new(default_role: Role) -> Self {
        Self {
            roles: Role::ALL
                .into_iter()
                .map(|role| RoleEntry {
                    role,
                    title: role.title().to_string(),
                })
                .collect(),
            default_role,
        }
    }
}

// =============================================================================
// DASHBOARD RESPONSE
// =============================================================================

/// A navigation tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub section: Section,
    pub label: String,
}

/// Header, navigation and metric cards for one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub role: Role,
    pub title: String,
    pub viewer_name: String,
    pub sections: Vec<SectionEntry>,
    pub metrics: DashboardMetrics,
}

impl DashboardResponse {
    pub fn new(permissions: &PermissionSet, metrics: DashboardMetrics, viewer_name: &str) -> Self {
        Self {
            role: permissions.role,
            title: permissions.title.clone(),
            viewer_name: viewer_name.to_string(),
            sections: permissions
                .visible_sections
                .iter()
                .map(|s| SectionEntry {
                    section: *s,
                    label: s.label().to_string(),
                })
                .collect(),
            metrics,
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
