//! # Property-Based Tests
//!
//! Invariants of the policy resolver and the metrics aggregator over
//! arbitrary catalogs.

use eduplatform_core::metrics::{active_course_count, average_score_percent};
use eduplatform_core::{
    Catalog, Course, CourseId, CourseStatus, DashboardMetrics, Percent, Role, Section, Student,
    StudentId, TestResult, rounded_mean,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Student), Just(Role::Teacher), Just(Role::Admin)]
}

fn status() -> impl Strategy<Value = CourseStatus> {
    prop_oneof![
        Just(CourseStatus::Active),
        Just(CourseStatus::Completed),
        Just(CourseStatus::Available),
    ]
}

fn percent() -> impl Strategy<Value = Percent> {
    (0u8..=100).prop_map(|v| Percent::new(v).expect("in range"))
}

fn courses() -> impl Strategy<Value = Vec<Course>> {
    vec((status(), percent(), 0u32..20, 0u32..20), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, progress, a, b))| Course {
                id: CourseId(i as u32),
                title: format!("Course {}", i),
                description: String::new(),
                progress,
                status,
                tests_completed: a.min(b),
                total_tests: a.max(b),
                instructor: format!("Instructor {}", i % 3),
                category: format!("Category {}", i % 4),
            })
            .collect()
    })
}

fn results() -> impl Strategy<Value = Vec<TestResult>> {
    vec((percent(), any::<bool>()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (score, passed))| TestResult {
                course: format!("Course {}", i),
                score,
                date: "2024-08-01".to_string(),
                passed,
            })
            .collect()
    })
}

fn students() -> impl Strategy<Value = Vec<Student>> {
    vec((any::<bool>(), percent()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (active, progress))| Student {
                id: StudentId(i as u32),
                name: format!("Student {}", i),
                email: format!("student{}@example.com", i),
                active,
                expires_at: "2024-12-31".to_string(),
                progress,
            })
            .collect()
    })
}

fn catalog() -> impl Strategy<Value = Catalog> {
    (courses(), results(), students()).prop_map(|(c, r, s)| Catalog::new(c, r, s).expect("valid"))
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The base sections always lead, in order, for any role.
    #[test]
    fn base_sections_are_a_prefix(role in role()) {
        let sections = role.permissions().visible_sections;
        prop_assert!(sections.len() >= 3);
        prop_assert_eq!(
            &sections[..3],
            &[Section::Dashboard, Section::Courses, Section::Results]
        );
    }

    /// Visible sections mirror the management flags exactly.
    #[test]
    fn section_visibility_matches_flags(role in role()) {
        let p = role.permissions();
        prop_assert_eq!(p.can_manage_students, p.can_view(Section::Students));
        prop_assert_eq!(p.can_manage_system, p.can_view(Section::Admin));
    }

    /// Unknown role text never gains more than the student set.
    #[test]
    fn arbitrary_role_text_is_never_privileged(text in "[a-z]{0,12}") {
        let role = Role::parse_or_least_privileged(&text);
        if !matches!(text.as_str(), "teacher" | "admin") {
            prop_assert_eq!(role, Role::Student);
        }
    }

    /// The rounded mean lies between the minimum and maximum value.
    #[test]
    fn rounded_mean_is_bounded(values in vec(0u64..=100, 1..50)) {
        let mean = rounded_mean(values.iter().copied());
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        prop_assert!(mean >= min && mean <= max);
    }

    /// Rounding half up: within half a unit of the true mean, ties go up.
    #[test]
    fn rounded_mean_rounds_half_up(values in vec(0u64..=100, 1..50)) {
        let n = values.len() as u64;
        let sum: u64 = values.iter().sum();
        let mean = rounded_mean(values.iter().copied());
        // |mean - sum/n| <= 1/2, with the tie resolved upward:
        // 2*n*mean - 2*sum in (-n, n]
        let lhs = 2 * n * mean;
        let rhs = 2 * sum;
        prop_assert!(lhs + n > rhs);
        prop_assert!(lhs <= rhs + n);
    }

    /// Metrics branch on student vs staff and never fail.
    #[test]
    fn metrics_branch_by_role(role in role(), catalog in catalog()) {
        let metrics = DashboardMetrics::compute(role, &catalog);
        prop_assert_eq!(metrics.active_courses(), active_course_count(catalog.courses()));
        match metrics {
            DashboardMetrics::Student(m) => {
                prop_assert_eq!(role, Role::Student);
                prop_assert!(m.average_score_percent.value() <= 100);
                prop_assert_eq!(m.average_score_percent, average_score_percent(catalog.results()));
            }
            DashboardMetrics::Staff(m) => {
                prop_assert_ne!(role, Role::Student);
                prop_assert!(m.active_students <= m.total_students);
                prop_assert_eq!(m.total_courses, catalog.courses().len());
            }
        }
    }

    /// Every visible section builds; every hidden one is refused.
    #[test]
    fn views_respect_visibility(role in role(), catalog in catalog()) {
        let permissions = role.permissions();
        for section in Section::ALL {
            let built = eduplatform_core::SectionView::build(section, &permissions, &catalog);
            prop_assert_eq!(built.is_ok(), permissions.can_view(section));
        }
    }
}
