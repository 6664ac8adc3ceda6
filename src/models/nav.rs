//! Sidebar navigation model.

use super::route::paths;

/// Semantic icon identifier for a navigation entry.
///
/// Mapped to a concrete glyph in `components::icons`, keeping the model
/// free of UI crate types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Customers,
    Alerts,
    Cases,
}

/// A single sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// Whether this entry corresponds to the current location.
    ///
    /// Exact string equality: `/customers` does not activate `/`, and an
    /// unmatched path activates nothing.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Sidebar entries, in display order. Declared once, immutable for the
/// lifetime of the app.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: paths::DASHBOARD,
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        path: paths::CUSTOMERS,
        label: "Customers",
        icon: NavIcon::Customers,
    },
    NavItem {
        path: paths::ALERTS,
        label: "Alerts",
        icon: NavIcon::Alerts,
    },
    NavItem {
        path: paths::CASES,
        label: "Cases",
        icon: NavIcon::Cases,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppRoute;

    #[test]
    fn test_nav_paths_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_nav_paths_are_routable() {
        // Every sidebar entry must land on a real page, not the fallback
        for item in NAV_ITEMS {
            assert!(!matches!(
                AppRoute::from_path(item.path),
                AppRoute::NotFound { .. }
            ));
        }
    }

    #[test]
    fn test_exactly_one_item_active_per_page() {
        for path in ["/", "/customers", "/alerts", "/cases"] {
            let active = NAV_ITEMS.iter().filter(|i| i.is_active(path)).count();
            assert_eq!(active, 1, "path {path} should activate exactly one item");
        }
    }

    #[test]
    fn test_customers_path_activates_customers_only() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|i| i.is_active("/customers"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Customers");
    }

    #[test]
    fn test_unmatched_path_activates_nothing() {
        for path in ["/reports", "/customers/42", ""] {
            assert!(NAV_ITEMS.iter().all(|i| !i.is_active(path)));
        }
    }
}
