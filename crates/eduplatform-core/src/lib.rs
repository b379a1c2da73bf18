//! # eduplatform-core
//!
//! The role policy and metrics engine for EduPlatform - THE LOGIC.
//!
//! This crate turns a viewer role and a read-only catalog of courses, test
//! results and students into everything a dashboard displays: capability
//! flags, visible navigation sections, summary metrics and per-section views.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no I/O, no network dependencies
//! - Deterministic: integer arithmetic only, no floats
//! - Total: the policy resolver and the metrics aggregator never fail
//! - Read-only: catalog records are never mutated after construction

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod dashboard;
pub mod metrics;
pub mod policy;
pub mod primitives;
pub mod types;
pub mod views;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{
    Course, CourseId, CourseStatus, EduError, Percent, Role, Section, Student, StudentId,
    TestResult,
};

// =============================================================================
// RE-EXPORTS: Policy, Metrics, Views
// =============================================================================

pub use catalog::Catalog;
pub use dashboard::Dashboard;
pub use metrics::{DashboardMetrics, StaffMetrics, StudentMetrics, rounded_mean};
pub use policy::{Capability, PermissionSet};
pub use views::{
    Action, AdminView, CourseCard, CourseProgress, CoursesView, DashboardPanel, DashboardView,
    ResultScope, ResultsView, RosterEntry, SectionView, StudentProgress, StudentsView,
    SubjectProgress, SystemStatistics,
};
