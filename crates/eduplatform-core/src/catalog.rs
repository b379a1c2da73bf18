//! # Catalog
//!
//! The three read-only collections the dashboard is rendered from: courses,
//! test results and the student roster.
//!
//! A catalog is validated once on construction and never mutated afterwards.
//! [`Catalog::sample`] provides the built-in sample data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{
    Course, CourseId, CourseStatus, EduError, Percent, Student, StudentId, TestResult,
};

/// Courses, results and students held for the lifetime of a view.
///
/// Deserialization goes through [`Catalog::new`], so invalid records are
/// rejected the same way as in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    courses: Vec<Course>,
    results: Vec<TestResult>,
    students: Vec<Student>,
}

/// Unchecked wire form of [`Catalog`].
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    results: Vec<TestResult>,
    #[serde(default)]
    students: Vec<Student>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = EduError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.courses, raw.results, raw.students)
    }
}

impl Catalog {
    /// Build a catalog, checking record invariants.
    ///
    /// Course ids and student ids must be unique; every course must satisfy
    /// [`Course::validate`].
    pub fn new(
        courses: Vec<Course>,
        results: Vec<TestResult>,
        students: Vec<Student>,
    ) -> Result<Self, EduError> {
        let mut course_ids = BTreeSet::new();
        for course in &courses {
            course.validate()?;
            if !course_ids.insert(course.id) {
                return Err(EduError::InvalidRecord(format!(
                    "duplicate course id {}",
                    course.id.0
                )));
            }
        }

        let mut student_ids = BTreeSet::new();
        for student in &students {
            if !student_ids.insert(student.id) {
                return Err(EduError::InvalidRecord(format!(
                    "duplicate student id {}",
                    student.id.0
                )));
            }
        }

        Ok(Self {
            courses,
            results,
            students,
        })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Find a course by its title, the key test results refer to it by.
    #[must_use]
    pub fn course_by_title(&self, title: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.title == title)
    }

    /// Distinct instructor names, sorted.
    #[must_use]
    pub fn instructors(&self) -> BTreeSet<&str> {
        self.courses.iter().map(|c| c.instructor.as_str()).collect()
    }

    /// The built-in sample data.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            courses: vec![
                sample_course(
                    1,
                    "Fundamentals of Mathematics",
                    "Core concepts of algebra and geometry",
                    75,
                    CourseStatus::Active,
                    (3, 5),
                    "Marina Petrova",
                    "Mathematics",
                ),
                sample_course(
                    2,
                    "History of Russia",
                    "From ancient times to the present day",
                    45,
                    CourseStatus::Active,
                    (2, 6),
                    "Dmitry Sidorov",
                    "History",
                ),
                sample_course(
                    3,
                    "Physics for Beginners",
                    "Foundations of mechanics and thermodynamics",
                    100,
                    CourseStatus::Completed,
                    (4, 4),
                    "Elena Kozlova",
                    "Physics",
                ),
                sample_course(
                    4,
                    "Organic Chemistry",
                    "Hydrocarbons and their derivatives",
                    0,
                    CourseStatus::Available,
                    (0, 7),
                    "Igor Volkov",
                    "Chemistry",
                ),
            ],
            results: vec![
                sample_result("Fundamentals of Mathematics", 89, "2024-08-10", true),
                sample_result("History of Russia", 76, "2024-08-09", false),
                sample_result("Physics for Beginners", 95, "2024-08-08", true),
            ],
            students: vec![
                sample_student(1, "Alexander Ivanov", "alex@example.com", true, "2024-12-31", 75),
                sample_student(2, "Maria Petrova", "maria@example.com", false, "2024-08-01", 45),
                sample_student(3, "Igor Sidorov", "igor@example.com", true, "2024-11-15", 90),
            ],
        }
    }
}

// Sample values are literals in 0..=100, so saturating never clamps them.

#[allow(clippy::too_many_arguments)]
fn sample_course(
    id: u32,
    title: &str,
    description: &str,
    progress: u8,
    status: CourseStatus,
    (tests_completed, total_tests): (u32, u32),
    instructor: &str,
    category: &str,
) -> Course {
    Course {
        id: CourseId(id),
        title: title.to_string(),
        description: description.to_string(),
        progress: Percent::saturating(progress as u64),
        status,
        tests_completed,
        total_tests,
        instructor: instructor.to_string(),
        category: category.to_string(),
    }
}

fn sample_result(course: &str, score: u8, date: &str, passed: bool) -> TestResult {
    TestResult {
        course: course.to_string(),
        score: Percent::saturating(score as u64),
        date: date.to_string(),
        passed,
    }
}

fn sample_student(
    id: u32,
    name: &str,
    email: &str,
    active: bool,
    expires_at: &str,
    progress: u8,
) -> Student {
    Student {
        id: StudentId(id),
        name: name.to_string(),
        email: email.to_string(),
        active,
        expires_at: expires_at.to_string(),
        progress: Percent::saturating(progress as u64),
    }
}

// =============================================================================
// TESTS
// =============================================================================
