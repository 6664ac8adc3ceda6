//! Path-based routing for dashboard navigation.

/// Location paths registered in the route table.
pub mod paths {
    pub const DASHBOARD: &str = "/";
    pub const CUSTOMERS: &str = "/customers";
    pub const ALERTS: &str = "/alerts";
    pub const CASES: &str = "/cases";
}

/// Application routes, one per page.
///
/// `NotFound` carries the unmatched path so the 404 page can display it.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Platform overview: `/`
    Dashboard,
    /// Customer onboarding and KYC status: `/customers`
    Customers,
    /// Transaction monitoring alerts: `/alerts`
    Alerts,
    /// Investigation case management: `/cases`
    Cases,
    /// Fallback for any other path.
    NotFound { path: String },
}

type Predicate = fn(&str) -> bool;
type Build = fn(&str) -> AppRoute;

/// Ordered route table, evaluated top to bottom; the first matching
/// predicate wins. The final entry accepts any path, so resolution is
/// total: every path maps to exactly one route.
static ROUTE_TABLE: &[(Predicate, Build)] = &[
    (|path| path == paths::DASHBOARD, |_| AppRoute::Dashboard),
    (|path| path == paths::CUSTOMERS, |_| AppRoute::Customers),
    (|path| path == paths::ALERTS, |_| AppRoute::Alerts),
    (|path| path == paths::CASES, |_| AppRoute::Cases),
    (
        |_| true,
        |path| AppRoute::NotFound {
            path: path.to_string(),
        },
    ),
];

impl AppRoute {
    /// Resolve a location path against the route table.
    ///
    /// An empty path (no pathname available) resolves to the dashboard.
    /// Matching is exact string equality; `/customers/` is not `/customers`.
    pub fn from_path(path: &str) -> Self {
        let path = if path.is_empty() {
            paths::DASHBOARD
        } else {
            path
        };

        ROUTE_TABLE
            .iter()
            .find(|(matches, _)| matches(path))
            .map(|(_, build)| build(path))
            .expect("route table ends with a catch-all entry")
    }

    /// The location path this route lives at.
    pub fn to_path(&self) -> &str {
        match self {
            Self::Dashboard => paths::DASHBOARD,
            Self::Customers => paths::CUSTOMERS,
            Self::Alerts => paths::ALERTS,
            Self::Cases => paths::CASES,
            Self::NotFound { path } => path,
        }
    }

    /// Get the current route from the browser location.
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }

    /// Update the browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(self.to_path()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_paths_resolve() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/customers"), AppRoute::Customers);
        assert_eq!(AppRoute::from_path("/alerts"), AppRoute::Alerts);
        assert_eq!(AppRoute::from_path("/cases"), AppRoute::Cases);
    }

    #[test]
    fn test_empty_path_is_dashboard() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
    }

    #[test]
    fn test_unmatched_paths_resolve_to_not_found() {
        for path in ["/reports", "/customers/42", "/Customers", "/cases/open"] {
            assert_eq!(
                AppRoute::from_path(path),
                AppRoute::NotFound {
                    path: path.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_matching_is_exact() {
        // Trailing slashes are distinct paths, not aliases
        assert_eq!(
            AppRoute::from_path("/customers/"),
            AppRoute::NotFound {
                path: "/customers/".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(AppRoute::Dashboard.to_path(), "/");
        assert_eq!(AppRoute::Customers.to_path(), "/customers");
        assert_eq!(AppRoute::Alerts.to_path(), "/alerts");
        assert_eq!(AppRoute::Cases.to_path(), "/cases");
        assert_eq!(
            AppRoute::NotFound {
                path: "/missing".to_string(),
            }
            .to_path(),
            "/missing"
        );
    }

    #[test]
    fn test_known_routes_round_trip() {
        for path in ["/", "/customers", "/alerts", "/cases"] {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for path in ["/", "/alerts", "/nope"] {
            assert_eq!(AppRoute::from_path(path), AppRoute::from_path(path));
        }
    }
}
