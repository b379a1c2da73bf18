//! # Dashboard
//!
//! The role selector: one catalog, one active role.
//!
//! Switching roles is free and synchronous. Nothing is cached; permissions,
//! metrics and views are re-derived from the current role on every call.

use crate::catalog::Catalog;
use crate::metrics::DashboardMetrics;
use crate::policy::PermissionSet;
use crate::primitives::DEFAULT_ROLE;
use crate::types::{EduError, Role, Section};
use crate::views::SectionView;

/// A dashboard session over a read-only catalog.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    role: Role,
}

impl Dashboard {
    /// Create a dashboard in the default (student) role.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_role(catalog, DEFAULT_ROLE)
    }

    #[must_use]
    pub fn with_role(catalog: Catalog, role: Role) -> Self {
        Self { catalog, role }
    }

    /// Make `role` the active role. Any role may follow any other.
    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::for_role(self.role)
    }

    #[must_use]
    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(self.role, &self.catalog)
    }

    /// Sections the active role can open, in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.permissions().visible_sections
    }

    /// Build one section for the active role.
    pub fn view(&self, section: Section) -> Result<SectionView, EduError> {
        SectionView::build(section, &self.permissions(), &self.catalog)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_student() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.role(), Role::Student);
        assert!(dashboard.permissions().can_take_tests);
    }

    #[test]
    fn switching_rederives_everything() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.sections().len(), 3);
        assert!(matches!(dashboard.metrics(), DashboardMetrics::Student(_)));

        dashboard.select_role(Role::Admin);
        assert_eq!(dashboard.sections().len(), 5);
        assert!(matches!(dashboard.metrics(), DashboardMetrics::Staff(_)));

        dashboard.select_role(Role::Student);
        assert_eq!(dashboard.sections().len(), 3);
        assert!(dashboard.view(Section::Admin).is_err());
    }

    #[test]
    fn any_role_can_follow_any_role() {
        let mut dashboard = Dashboard::default();
        for from in Role::ALL {
            for to in Role::ALL {
                dashboard.select_role(from);
                dashboard.select_role(to);
                assert_eq!(dashboard.role(), to);
                assert_eq!(dashboard.permissions(), to.permissions());
            }
        }
    }
}
