//! Plain-text rendering of roles, permissions and section views.
//!
//! Each function returns the full text so output can be checked in tests.

use crate::api::RolesResponse;
use eduplatform_core::{
    Action, AdminView, Capability, CoursesView, DashboardPanel, DashboardView, PermissionSet,
    ResultScope, ResultsView, SectionView, StudentsView,
};

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn action_list(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| format!("[{}]", a.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append `text` and a newline.
fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    line(out, title);
    line(out, &"=".repeat(title.chars().count()));
}

// =============================================================================
// HEADER, ROLES, PERMISSIONS
// =============================================================================

pub fn header(permissions: &PermissionSet, viewer_name: &str) -> String {
    let mut out = String::new();
    heading(&mut out, "EduPlatform");
    line(
        &mut out,
        &format!("Viewer: {} ({})", viewer_name, permissions.title),
    );
    let tabs: Vec<&str> = permissions
        .visible_sections
        .iter()
        .map(|s| s.label())
        .collect();
    line(&mut out, &format!("Tabs:   {}", tabs.join(" | ")));
    out.push('\n');
    out
}

pub fn roles(roles: &RolesResponse) -> String {
    let mut out = String::new();
    heading(&mut out, "Roles");
    for entry in &roles.roles {
        let marker = if entry.role == roles.default_role { "*" } else { " " };
        line(
            &mut out,
            &format!("{} {:<8} {}", marker, entry.role.as_str(), entry.title),
        );
    }
    out
}

pub fn permissions(permissions: &PermissionSet) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Permissions: {}", permissions.title));
    for capability in Capability::ALL {
        line(
            &mut out,
            &format!(
                "{:<18} {}",
                capability.as_str(),
                yes_no(permissions.allows(capability))
            ),
        );
    }
    let sections: Vec<&str> = permissions
        .visible_sections
        .iter()
        .map(|s| s.as_str())
        .collect();
    out.push('\n');
    line(&mut out, &format!("Sections: {}", sections.join(", ")));
    out
}

// =============================================================================
// SECTIONS
// =============================================================================

pub fn section(view: &SectionView) -> String {
    let mut out = String::new();
    heading(&mut out, view.section().label());
    match view {
        SectionView::Dashboard(v) => dashboard(&mut out, v),
        SectionView::Courses(v) => courses(&mut out, v),
        SectionView::Results(v) => results(&mut out, v),
        SectionView::Students(v) => students(&mut out, v),
        SectionView::Admin(v) => admin(&mut out, v),
    }
    out
}

fn dashboard(out: &mut String, view: &DashboardView) {
    for (label, value) in view.metrics.cards() {
        line(out, &format!("{:<18} {}", label, value));
    }
    out.push('\n');

    match &view.panel {
        DashboardPanel::CurrentCourses(entries) => {
            line(out, "Current courses:");
            for e in entries {
                line(
                    out,
                    &format!(
                        "  {:<32} {:>4}  {} of {} tests",
                        e.title, e.progress, e.tests_completed, e.total_tests
                    ),
                );
            }
        }
        DashboardPanel::StudentStatistics(entries) => {
            line(out, "Student statistics:");
            for e in entries {
                line(
                    out,
                    &format!(
                        "  {:<32} {:>4}  active until {}",
                        e.name, e.progress, e.expires_at
                    ),
                );
            }
        }
    }
    out.push('\n');

    line(out, "Recent results:");
    for r in &view.recent_results {
        let mark = if r.passed { "passed" } else { "failed" };
        line(
            out,
            &format!("  {:<32} {:>4}  {}  {}", r.course, r.score, r.date, mark),
        );
    }
}

fn courses(out: &mut String, view: &CoursesView) {
    if !view.actions.is_empty() {
        line(out, &action_list(&view.actions));
        out.push('\n');
    }
    for card in &view.courses {
        let c = &card.course;
        line(
            out,
            &format!("{} [{}] ({})", c.title, c.category, c.status.label()),
        );
        line(out, &format!("  {}", c.description));
        if let Some(progress) = card.progress {
            let done = if progress.is_full() { " - done" } else { "" };
            line(out, &format!("  Progress: {}{}", progress, done));
        }
        line(
            out,
            &format!(
                "  Instructor: {}  Tests: {}/{}",
                c.instructor, c.tests_completed, c.total_tests
            ),
        );
        line(out, &format!("  {}", action_list(&card.actions)));
    }
}

fn results(out: &mut String, view: &ResultsView) {
    let scope = match view.scope {
        ResultScope::Own => "Your results and progress",
        ResultScope::AllStudents => "Test results of all students",
    };
    line(out, scope);
    out.push('\n');
    for r in &view.results {
        let mark = if r.passed { "passed" } else { "not passed" };
        line(
            out,
            &format!("  {:<32} {:>4}  {}  {}", r.course, r.score, r.date, mark),
        );
    }
    out.push('\n');
    line(out, "Progress by subject:");
    for s in &view.subject_progress {
        line(out, &format!("  {:<16} {:>4}", s.subject, s.score));
    }
    out.push('\n');
    line(out, &format!("Average score: {}", view.average_score_percent));
    line(out, &format!("Tests passed:  {}", view.tests_passed));
}

fn students(out: &mut String, view: &StudentsView) {
    line(out, &action_list(&view.actions));
    out.push('\n');
    for e in &view.roster {
        let state = if e.active { "active" } else { "inactive" };
        line(out, &format!("{} <{}> ({})", e.name, e.email, state));
        line(
            out,
            &format!(
                "  Progress: {}  Active until: {}",
                e.progress, e.expires_at
            ),
        );
        line(out, &format!("  {}", action_list(&e.actions)));
    }
}

fn admin(out: &mut String, view: &AdminView) {
    line(out, &format!("Users:   {}", action_list(&view.user_actions)));
    line(out, &format!("Courses: {}", action_list(&view.course_actions)));
    out.push('\n');
    let s = &view.statistics;
    line(out, &format!("Total users:       {}", s.total_users));
    line(out, &format!("Teachers:          {}", s.teachers));
    line(out, &format!("Active students:   {}", s.active_students));
    line(out, &format!("Courses in system: {}", s.courses));
    line(out, &format!("Tests in courses:  {}", s.tests_in_courses));
}

// =============================================================================
// TESTS
// =============================================================================
