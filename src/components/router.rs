//! Application router component.
//!
//! Maps the browser location path onto page components, with the shell
//! layout wrapping every matched page.
//!
//! # Architecture
//!
//! - **The URL path is the source of truth**: the route signal is derived
//!   from `window.location.pathname` and nothing else
//! - **Shell never re-renders on navigation**: Layout is always mounted,
//!   only the content slot swaps
//! - **popstate events**: browser back/forward buttons work automatically
//! - **Totality**: the route table ends in a catch-all, so every path
//!   renders something (the 404 page for unmatched paths)

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::Layout;
use crate::models::AppRoute;
use crate::pages::{Alerts, Cases, Customers, Dashboard, NotFound};
use crate::utils::dom::scroll_content_to_top;

// ============================================================================
// Router Context
// ============================================================================

/// Context for reading the current route and navigating from any component.
///
/// Provided by [`AppRouter`] at the top of the tree so nav links and pages
/// can navigate without prop drilling.
#[derive(Clone, Copy)]
pub struct RouterContext {
    route: RwSignal<AppRoute>,
}

impl RouterContext {
    /// Navigate to a route: push it onto the browser history and update
    /// the route signal so the content slot re-renders.
    ///
    /// Navigating to the current route is a no-op (no duplicate history
    /// entries).
    pub fn navigate(&self, route: AppRoute) {
        if self.route.with(|current| *current == route) {
            return;
        }
        route.push();
        self.route.set(route);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Resolves the current path against the static route table:
/// - `/` → Dashboard
/// - `/customers` → Customers
/// - `/alerts` → Alerts
/// - `/cases` → Cases
/// - anything else → NotFound
///
/// All pages, the 404 included, render inside the shared shell.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from the current location
    let route = RwSignal::new(AppRoute::current());

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    provide_context(RouterContext { route });

    // Reset the content scroll position when the route changes
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route.get();
        if prev.is_some_and(|p| p != current) {
            scroll_content_to_top();
        }
        current
    });

    // Convert to Memo for Layout (which expects Memo<AppRoute>)
    let route_memo = Memo::new(move |_| route.get());

    view! {
        // Layout is always rendered (stable across route changes); the
        // matched page fills its content slot
        <Layout route=route_memo>
            {move || match route.get() {
                AppRoute::Dashboard => view! { <Dashboard /> }.into_any(),
                AppRoute::Customers => view! { <Customers /> }.into_any(),
                AppRoute::Alerts => view! { <Alerts /> }.into_any(),
                AppRoute::Cases => view! { <Cases /> }.into_any(),
                AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
            }}
        </Layout>
    }
}
