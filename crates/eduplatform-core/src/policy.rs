//! # Role Policy Resolver
//!
//! Maps a [`Role`] to its [`PermissionSet`]: seven capability flags, the
//! ordered list of visible sections and a display title.
//!
//! ## Rules
//!
//! | capability       | student | teacher | admin |
//! |------------------|---------|---------|-------|
//! | create users     |         |         |   x   |
//! | create courses   |         |         |   x   |
//! | view all results |         |    x    |   x   |
//! | manage system    |         |         |   x   |
//! | manage students  |         |    x    |   x   |
//! | assign tests     |         |    x    |   x   |
//! | take tests       |    x    |         |       |
//!
//! Visible sections are additive over [`BASE_SECTIONS`]: `students` is appended
//! when `manage_students` holds, then `admin` when `manage_system` holds.
//! Permission sets are never stored; they are derived on every call.

use serde::{Deserialize, Serialize};

use crate::primitives::BASE_SECTIONS;
use crate::types::{Role, Section};

// =============================================================================
// CAPABILITY
// =============================================================================

/// A single capability flag, for querying a [`PermissionSet`] generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CreateUsers,
    CreateCourses,
    ViewAllResults,
    ManageSystem,
    ManageStudents,
    AssignTests,
    TakeTests,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::CreateUsers,
        Capability::CreateCourses,
        Capability::ViewAllResults,
        Capability::ManageSystem,
        Capability::ManageStudents,
        Capability::AssignTests,
        Capability::TakeTests,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CreateUsers => "create_users",
            Capability::CreateCourses => "create_courses",
            Capability::ViewAllResults => "view_all_results",
            Capability::ManageSystem => "manage_system",
            Capability::ManageStudents => "manage_students",
            Capability::AssignTests => "assign_tests",
            Capability::TakeTests => "take_tests",
        }
    }
}

// =============================================================================
// PERMISSION SET
// =============================================================================

/// Capabilities and navigation derived from a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    pub role: Role,
    /// Display name of the role.
    pub title: String,
    pub can_create_users: bool,
    pub can_create_courses: bool,
    pub can_view_all_results: bool,
    pub can_manage_system: bool,
    pub can_manage_students: bool,
    pub can_assign_tests: bool,
    pub can_take_tests: bool,
    /// Sections in display order. Always starts with [`BASE_SECTIONS`].
    pub visible_sections: Vec<Section>,
}

/// Flag row of the lookup table, before sections are derived.
struct Flags {
    title: &'static str,
    create_users: bool,
    create_courses: bool,
    view_all_results: bool,
    manage_system: bool,
    manage_students: bool,
    assign_tests: bool,
    take_tests: bool,
}

const fn flags_for(role: Role) -> Flags {
    match role {
        Role::Student => Flags {
            title: "Student",
            create_users: false,
            create_courses: false,
            view_all_results: false,
            manage_system: false,
            manage_students: false,
            assign_tests: false,
            take_tests: true,
        },
        Role::Teacher => Flags {
            title: "Teacher",
            create_users: false,
            create_courses: false,
            view_all_results: true,
            manage_system: false,
            manage_students: true,
            assign_tests: true,
            take_tests: false,
        },
        Role::Admin => Flags {
            title: "Administrator",
            create_users: true,
            create_courses: true,
            view_all_results: true,
            manage_system: true,
            manage_students: true,
            assign_tests: true,
            take_tests: false,
        },
    }
}

impl PermissionSet {
    /// Resolve the permission set of a role. Total and side-effect free.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        let flags = flags_for(role);

        let mut visible_sections = BASE_SECTIONS.to_vec();
        if flags.manage_students {
            visible_sections.push(Section::Students);
        }
        if flags.manage_system {
            visible_sections.push(Section::Admin);
        }

        Self {
            role,
            title: flags.title.to_string(),
            can_create_users: flags.create_users,
            can_create_courses: flags.create_courses,
            can_view_all_results: flags.view_all_results,
            can_manage_system: flags.manage_system,
            can_manage_students: flags.manage_students,
            can_assign_tests: flags.assign_tests,
            can_take_tests: flags.take_tests,
            visible_sections,
        }
    }

    /// Resolve from a raw role tag; unknown tags get the student set.
    #[must_use]
    pub fn for_role_str(role: &str) -> Self {
        Self::for_role(Role::parse_or_least_privileged(role))
    }

    /// Check a single capability.
    #[must_use]
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::CreateUsers => self.can_create_users,
            Capability::CreateCourses => self.can_create_courses,
            Capability::ViewAllResults => self.can_view_all_results,
            Capability::ManageSystem => self.can_manage_system,
            Capability::ManageStudents => self.can_manage_students,
            Capability::AssignTests => self.can_assign_tests,
            Capability::TakeTests => self.can_take_tests,
        }
    }

    /// Capabilities granted, in declaration order.
    #[must_use]
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }

    /// Check whether a section is visible.
    #[must_use]
    pub fn can_view(&self, section: Section) -> bool {
        self.visible_sections.contains(&section)
    }
}

impl Role {
    /// Shorthand for [`PermissionSet::for_role`].
    #[must_use]
    pub fn permissions(self) -> PermissionSet {
        PermissionSet::for_role(self)
    }

    /// Display name of the role.
    #[must_use]
    pub fn title(self) -> &'static str {
        flags_for(self).title
    }
}

// =============================================================================
// TESTS
// =============================================================================
