//! # Dashboard Metrics
//!
//! Summary numbers for the four dashboard cards.
//!
//! The meaning of three of the four cards depends on the role, so the result
//! is one of two named records rather than a single ambiguous shape:
//!
//! | card | student                 | teacher / admin   |
//! |------|-------------------------|-------------------|
//! | 1    | active courses          | active courses    |
//! | 2    | completed courses       | total students    |
//! | 3    | tests completed (sum)   | active students   |
//! | 4    | average score (percent) | total courses     |
//!
//! ## Arithmetic
//!
//! Integer only. The average rounds half up (`86.5 -> 87`), computed as
//! `(2 * sum + n) / (2 * n)`. The average of nothing is `0`.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{Course, CourseStatus, Percent, Role, Student, TestResult};

// =============================================================================
// AGGREGATES
// =============================================================================

/// Mean of non-negative integers, rounded half up. `0` when empty.
#[must_use]
pub fn rounded_mean<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| {
            (sum.saturating_add(v), count.saturating_add(1))
        });

    if count == 0 {
        return 0;
    }

    sum.saturating_mul(2).saturating_add(count) / count.saturating_mul(2)
}

/// Number of courses with status `active`.
#[must_use]
pub fn active_course_count(courses: &[Course]) -> usize {
    count_status(courses, CourseStatus::Active)
}

/// Number of courses with status `completed`.
#[must_use]
pub fn completed_course_count(courses: &[Course]) -> usize {
    count_status(courses, CourseStatus::Completed)
}

fn count_status(courses: &[Course], status: CourseStatus) -> usize {
    courses.iter().filter(|c| c.status == status).count()
}

/// Sum of `tests_completed` over all courses.
#[must_use]
pub fn tests_completed_total(courses: &[Course]) -> u64 {
    courses
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.tests_completed as u64))
}

/// Sum of `total_tests` over all courses.
#[must_use]
pub fn tests_total(courses: &[Course]) -> u64 {
    courses
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.total_tests as u64))
}

/// Number of students flagged active.
#[must_use]
pub fn active_student_count(students: &[Student]) -> usize {
    students.iter().filter(|s| s.active).count()
}

/// Number of results marked passed.
#[must_use]
pub fn passed_result_count(results: &[TestResult]) -> usize {
    results.iter().filter(|r| r.passed).count()
}

/// Rounded mean score across results; `0%` when there are none.
#[must_use]
pub fn average_score_percent(results: &[TestResult]) -> Percent {
    let mean = rounded_mean(results.iter().map(|r| r.score.value() as u64));
    // Mean of values <= 100 is <= 100.
    Percent::saturating(mean)
}

// =============================================================================
// METRIC RECORDS
// =============================================================================

/// Dashboard cards as shown to a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentMetrics {
    pub active_courses: usize,
    pub completed_courses: usize,
    pub tests_completed: u64,
    pub average_score_percent: Percent,
}

impl StudentMetrics {
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        Self {
            active_courses: active_course_count(catalog.courses()),
            completed_courses: completed_course_count(catalog.courses()),
            tests_completed: tests_completed_total(catalog.courses()),
            average_score_percent: average_score_percent(catalog.results()),
        }
    }
}

/// Dashboard cards as shown to teachers and administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMetrics {
    pub active_courses: usize,
    pub total_students: usize,
    pub active_students: usize,
    pub total_courses: usize,
}

impl StaffMetrics {
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        Self {
            active_courses: active_course_count(catalog.courses()),
            total_students: catalog.students().len(),
            active_students: active_student_count(catalog.students()),
            total_courses: catalog.courses().len(),
        }
    }
}

/// Role-dependent dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardMetrics {
    Student(StudentMetrics),
    Staff(StaffMetrics),
}

impl DashboardMetrics {
    /// Compute the cards for a role. Student vs everyone else.
    #[must_use]
    pub fn compute(role: Role, catalog: &Catalog) -> Self {
        match role {
            Role::Student => Self::Student(StudentMetrics::compute(catalog)),
            Role::Teacher | Role::Admin => Self::Staff(StaffMetrics::compute(catalog)),
        }
    }

    /// First card; identical for every role.
    #[must_use]
    pub fn active_courses(&self) -> usize {
        match self {
            Self::Student(m) => m.active_courses,
            Self::Staff(m) => m.active_courses,
        }
    }

    /// The four cards as `(label, value)` pairs, in display order.
    #[must_use]
    pub fn cards(&self) -> [(&'static str, String); 4] {
        match self {
            Self::Student(m) => [
                ("Active courses", m.active_courses.to_string()),
                ("Completed", m.completed_courses.to_string()),
                ("Tests completed", m.tests_completed.to_string()),
                ("Average score", m.average_score_percent.to_string()),
            ],
            Self::Staff(m) => [
                ("Active courses", m.active_courses.to_string()),
                ("Total students", m.total_students.to_string()),
                ("Active students", m.active_students.to_string()),
                ("Courses in system", m.total_courses.to_string()),
            ],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
