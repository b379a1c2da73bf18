//! # Fixed Constants
//!
//! Compiled-in constants shared by the resolver, the aggregator and the views.
//! None of these are configurable at runtime.

use crate::types::{Role, Section};

/// Upper bound of every percentage (progress, score).
pub const MAX_PERCENT: u8 = 100;

/// Sections every role can see, in display order.
///
/// Role-specific sections are appended after these, never interleaved.
pub const BASE_SECTIONS: [Section; 3] = [Section::Dashboard, Section::Courses, Section::Results];

/// Role a fresh dashboard starts in.
pub const DEFAULT_ROLE: Role = Role::Student;

/// Number of results shown in the dashboard's "recent results" panel.
pub const RECENT_RESULTS_LIMIT: usize = 3;
