//! # Section Views
//!
//! Derived view models for each navigation section, built from a
//! [`PermissionSet`] and a [`Catalog`].
//!
//! Views only describe what is shown. Every [`Action`] listed in a view is
//! inert: it names a control the role may see, nothing executes it.
//!
//! Building a section the role cannot see fails with
//! [`EduError::SectionHidden`].

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::metrics::{
    DashboardMetrics, active_student_count, average_score_percent, passed_result_count,
    tests_total,
};
use crate::policy::PermissionSet;
use crate::primitives::RECENT_RESULTS_LIMIT;
use crate::types::{
    Course, CourseId, CourseStatus, EduError, Percent, Section, StudentId, TestResult,
};

// =============================================================================
// ACTIONS
// =============================================================================

/// A control shown in a view. Inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Course cards
    ContinueLearning,
    TakeTest,
    EditCourse,
    AssignCourse,
    CreateCourse,
    // Roster
    EditStudent,
    AssignTest,
    ActivateStudent,
    RemoveStudent,
    AddStudent,
    BulkActivate,
    BulkAssignTests,
    ExportReport,
    // Administration
    CreateStudentAccount,
    CreateTeacherAccount,
    CreateAdminAccount,
    ListUsers,
    RemoveUsers,
    EditCourses,
    ManageCourseTests,
    UploadMaterials,
    RemoveCourses,
    DetailedStatistics,
}

impl Action {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Action::ContinueLearning => "Continue learning",
            Action::TakeTest => "Take test",
            Action::EditCourse => "Edit",
            Action::AssignCourse => "Assign",
            Action::CreateCourse => "Create course",
            Action::EditStudent => "Edit",
            Action::AssignTest => "Assign test",
            Action::ActivateStudent => "Activate",
            Action::RemoveStudent => "Remove",
            Action::AddStudent => "Add student",
            Action::BulkActivate => "Activate all",
            Action::BulkAssignTests => "Assign tests",
            Action::ExportReport => "Export report",
            Action::CreateStudentAccount => "Create student",
            Action::CreateTeacherAccount => "Create teacher",
            Action::CreateAdminAccount => "Create administrator",
            Action::ListUsers => "List all users",
            Action::RemoveUsers => "Remove users",
            Action::EditCourses => "Edit courses",
            Action::ManageCourseTests => "Manage course tests",
            Action::UploadMaterials => "Upload materials",
            Action::RemoveCourses => "Remove courses",
            Action::DetailedStatistics => "Detailed statistics",
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// A course line in the student's "current courses" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub id: CourseId,
    pub title: String,
    pub progress: Percent,
    pub tests_completed: u32,
    pub total_tests: u32,
}

/// A student line in the staff "student statistics" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub id: StudentId,
    pub name: String,
    pub progress: Percent,
    pub expires_at: String,
}

/// The large panel under the metric cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "panel", content = "entries", rename_all = "snake_case")]
pub enum DashboardPanel {
    /// Active courses of the student.
    CurrentCourses(Vec<CourseProgress>),
    /// Active students, for staff.
    StudentStatistics(Vec<StudentProgress>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub metrics: DashboardMetrics,
    pub panel: DashboardPanel,
    pub recent_results: Vec<TestResult>,
}

fn dashboard_view(permissions: &PermissionSet, catalog: &Catalog) -> DashboardView {
    let role = permissions.role;
    let panel = if role.is_student() {
        DashboardPanel::CurrentCourses(
            catalog
                .courses()
                .iter()
                .filter(|c| c.status == CourseStatus::Active)
                .map(|c| CourseProgress {
                    id: c.id,
                    title: c.title.clone(),
                    progress: c.progress,
                    tests_completed: c.tests_completed,
                    total_tests: c.total_tests,
                })
                .collect(),
        )
    } else {
        DashboardPanel::StudentStatistics(
            catalog
                .students()
                .iter()
                .filter(|s| s.active)
                .map(|s| StudentProgress {
                    id: s.id,
                    name: s.name.clone(),
                    progress: s.progress,
                    expires_at: s.expires_at.clone(),
                })
                .collect(),
        )
    };

    DashboardView {
        metrics: DashboardMetrics::compute(role, catalog),
        panel,
        recent_results: catalog
            .results()
            .iter()
            .take(RECENT_RESULTS_LIMIT)
            .cloned()
            .collect(),
    }
}

// =============================================================================
// COURSES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCard {
    pub course: Course,
    /// Shown only to students.
    pub progress: Option<Percent>,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursesView {
    pub courses: Vec<CourseCard>,
    /// Section-level controls, e.g. `create_course`.
    pub actions: Vec<Action>,
}

fn courses_view(permissions: &PermissionSet, catalog: &Catalog) -> CoursesView {
    let is_student = permissions.role.is_student();

    let mut card_actions = Vec::new();
    if is_student {
        card_actions.push(Action::ContinueLearning);
    } else {
        card_actions.push(Action::EditCourse);
    }
    if permissions.can_take_tests {
        card_actions.push(Action::TakeTest);
    }
    if permissions.can_assign_tests {
        card_actions.push(Action::AssignCourse);
    }

    let courses = catalog
        .courses()
        .iter()
        .map(|course| CourseCard {
            course: course.clone(),
            progress: is_student.then_some(course.progress),
            actions: card_actions.clone(),
        })
        .collect();

    let mut actions = Vec::new();
    if permissions.can_create_courses {
        actions.push(Action::CreateCourse);
    }

    CoursesView { courses, actions }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Whose results a results view describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultScope {
    Own,
    AllStudents,
}

/// Score of a subject, taken from the result of the subject's course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub subject: String,
    pub score: Percent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsView {
    pub scope: ResultScope,
    pub results: Vec<TestResult>,
    pub subject_progress: Vec<SubjectProgress>,
    pub average_score_percent: Percent,
    pub tests_passed: usize,
}

/// One entry per course category, in course order.
///
/// A subject with no result scores 0.
#[must_use]
pub fn subject_progress(catalog: &Catalog) -> Vec<SubjectProgress> {
    let mut subjects: Vec<SubjectProgress> = Vec::new();
    for course in catalog.courses() {
        if subjects.iter().any(|s| s.subject == course.category) {
            continue;
        }
        let score = catalog
            .results()
            .iter()
            .find(|r| r.course == course.title)
            .map_or(Percent::ZERO, |r| r.score);
        subjects.push(SubjectProgress {
            subject: course.category.clone(),
            score,
        });
    }
    subjects
}

fn results_view(permissions: &PermissionSet, catalog: &Catalog) -> ResultsView {
    ResultsView {
        scope: if permissions.can_view_all_results {
            ResultScope::AllStudents
        } else {
            ResultScope::Own
        },
        results: catalog.results().to_vec(),
        subject_progress: subject_progress(catalog),
        average_score_percent: average_score_percent(catalog.results()),
        tests_passed: passed_result_count(catalog.results()),
    }
}

// =============================================================================
// STUDENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub expires_at: String,
    pub progress: Percent,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentsView {
    pub roster: Vec<RosterEntry>,
    pub actions: Vec<Action>,
}

fn students_view(permissions: &PermissionSet, catalog: &Catalog) -> StudentsView {
    let roster = catalog
        .students()
        .iter()
        .map(|s| {
            let mut actions = vec![Action::EditStudent, Action::AssignTest];
            if !s.active {
                actions.push(Action::ActivateStudent);
            }
            if permissions.can_create_users {
                actions.push(Action::RemoveStudent);
            }
            RosterEntry {
                id: s.id,
                name: s.name.clone(),
                email: s.email.clone(),
                active: s.active,
                expires_at: s.expires_at.clone(),
                progress: s.progress,
                actions,
            }
        })
        .collect();

    StudentsView {
        roster,
        actions: vec![
            Action::AddStudent,
            Action::BulkActivate,
            Action::BulkAssignTests,
            Action::ExportReport,
        ],
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// System-wide counts shown on the administration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatistics {
    /// Students plus distinct instructors.
    pub total_users: usize,
    pub teachers: usize,
    pub active_students: usize,
    pub courses: usize,
    pub tests_in_courses: u64,
}

impl SystemStatistics {
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        let teachers = catalog.instructors().len();
        Self {
            total_users: catalog.students().len().saturating_add(teachers),
            teachers,
            active_students: active_student_count(catalog.students()),
            courses: catalog.courses().len(),
            tests_in_courses: tests_total(catalog.courses()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminView {
    pub user_actions: Vec<Action>,
    pub course_actions: Vec<Action>,
    pub statistics: SystemStatistics,
}

fn admin_view(catalog: &Catalog) -> AdminView {
    AdminView {
        user_actions: vec![
            Action::CreateStudentAccount,
            Action::CreateTeacherAccount,
            Action::CreateAdminAccount,
            Action::ListUsers,
            Action::RemoveUsers,
        ],
        course_actions: vec![
            Action::CreateCourse,
            Action::EditCourses,
            Action::ManageCourseTests,
            Action::UploadMaterials,
            Action::RemoveCourses,
            Action::DetailedStatistics,
        ],
        statistics: SystemStatistics::compute(catalog),
    }
}

// =============================================================================
// SECTION VIEW
// =============================================================================

/// Content of one navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionView {
    Dashboard(DashboardView),
    Courses(CoursesView),
    Results(ResultsView),
    Students(StudentsView),
    Admin(AdminView),
}

impl SectionView {
    /// Build the view of `section`, or fail if the role cannot see it.
    pub fn build(
        section: Section,
        permissions: &PermissionSet,
        catalog: &Catalog,
    ) -> Result<Self, EduError> {
        if !permissions.can_view(section) {
            return Err(EduError::SectionHidden {
                section,
                role: permissions.role,
            });
        }

        Ok(match section {
            Section::Dashboard => Self::Dashboard(dashboard_view(permissions, catalog)),
            Section::Courses => Self::Courses(courses_view(permissions, catalog)),
            Section::Results => Self::Results(results_view(permissions, catalog)),
            Section::Students => Self::Students(students_view(permissions, catalog)),
            Section::Admin => Self::Admin(admin_view(catalog)),
        })
    }

    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Self::Dashboard(_) => Section::Dashboard,
            Self::Courses(_) => Section::Courses,
            Self::Results(_) => Section::Results,
            Self::Students(_) => Section::Students,
            Self::Admin(_) => Section::Admin,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
