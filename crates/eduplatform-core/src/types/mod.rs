//! # Core Type Definitions
//!
//! This module contains the domain types of the EduPlatform dashboard:
//! - Identifiers (`CourseId`, `StudentId`)
//! - Bounded percentages (`Percent`)
//! - The closed viewer persona set (`Role`) and navigation sections (`Section`)
//! - Catalog records (`Course`, `TestResult`, `Student`)
//! - Error types (`EduError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Are immutable once constructed; nothing in the core mutates a record
//! - Serialize roles, sections and statuses as `snake_case` tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::primitives::MAX_PERCENT;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a course in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

/// Identifier of a student in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

// =============================================================================
// PERCENT
// =============================================================================

/// A whole percentage in `0..=100`.
///
/// Construction through [`Percent::new`] rejects out-of-range values, so a
/// `Percent` held anywhere in the core is always displayable as-is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const FULL: Self = Self(MAX_PERCENT);

    /// Create a percentage, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, EduError> {
        if value > MAX_PERCENT {
            return Err(EduError::InvalidRecord(format!(
                "percentage {} exceeds {}",
                value, MAX_PERCENT
            )));
        }
        Ok(Self(value))
    }

    /// Clamp an arbitrary integer into `0..=100`.
    #[must_use]
    pub fn saturating(value: u64) -> Self {
        Self(value.min(MAX_PERCENT as u64) as u8)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True at exactly 100%.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == MAX_PERCENT
    }
}

impl TryFrom<u8> for Percent {
    type Error = EduError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}%", self.0))
    }
}

// =============================================================================
// ROLE
// =============================================================================

/// The active viewer persona.
///
/// The set is closed: every consumer matches on it exhaustively, so adding a
/// fourth role is a compile error at each call site until handled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Takes courses and tests. Least privileged.
    #[default]
    Student,
    /// Manages students and assigns tests.
    Teacher,
    /// Manages users, courses and the system.
    Admin,
}

impl Role {
    /// Every role, in selector order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// Stable tag used in CLI arguments, query strings and JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Parse a role tag, resolving anything unknown to [`Role::Student`].
    ///
    /// Unknown input never gains privileges.
    #[must_use]
    pub fn parse_or_least_privileged(s: &str) -> Self {
        s.parse().unwrap_or(Role::Student)
    }

    /// True for the student persona; every metric branch keys off this.
    #[must_use]
    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }
}

impl FromStr for Role {
    type Err = EduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(EduError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SECTION
// =============================================================================

/// A navigation section of the dashboard.
///
/// Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Courses,
    Results,
    Students,
    Admin,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Courses,
        Section::Results,
        Section::Students,
        Section::Admin,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Courses => "courses",
            Section::Results => "results",
            Section::Students => "students",
            Section::Admin => "admin",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Courses => "Courses",
            Section::Results => "Results",
            Section::Students => "Students",
            Section::Admin => "Administration",
        }
    }
}

impl FromStr for Section {
    type Err = EduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EduError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COURSE
// =============================================================================

/// Enrollment status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Active,
    Completed,
    Available,
}

impl CourseStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Active => "In progress",
            CourseStatus::Completed => "Completed",
            CourseStatus::Available => "Available",
        }
    }
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub progress: Percent,
    pub status: CourseStatus,
    /// Tests finished so far. Never exceeds `total_tests`.
    pub tests_completed: u32,
    pub total_tests: u32,
    pub instructor: String,
    pub category: String,
}

impl Course {
    /// Check record invariants that the type system cannot express.
    pub fn validate(&self) -> Result<(), EduError> {
        if self.title.trim().is_empty() {
            return Err(EduError::InvalidRecord(format!(
                "course {:?} has an empty title",
                self.id
            )));
        }
        if self.tests_completed > self.total_tests {
            return Err(EduError::InvalidRecord(format!(
                "course '{}' has {} of {} tests completed",
                self.title, self.tests_completed, self.total_tests
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TEST RESULT
// =============================================================================

/// The outcome of one test.
///
/// `course` refers to a [`Course`] by title; nothing enforces that the course
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub course: String,
    pub score: Percent,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub passed: bool,
}

// =============================================================================
// STUDENT
// =============================================================================

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// ISO date the enrollment lapses, `YYYY-MM-DD`.
    pub expires_at: String,
    pub progress: Percent,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in EduPlatform.
///
/// The policy resolver and the metrics aggregator never fail. Errors come
/// only from parsing text, gating section views and validating records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EduError {
    /// A role tag did not name one of the three roles.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// A section tag did not name a known section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// The section exists but the role may not see it.
    #[error("Section '{section}' is not visible to role '{role}'")]
    SectionHidden { section: Section, role: Role },

    /// A catalog record violates an invariant.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A configuration value could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
