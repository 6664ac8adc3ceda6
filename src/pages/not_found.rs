//! 404 page rendered for unmatched paths.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Fallback page for paths outside the route table.
///
/// Renders inside the shell, so the sidebar stays available for recovery
/// navigation.
///
/// # Props
/// - `path`: the unmatched location path
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let return_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(AppRoute::Dashboard);
    };

    view! {
        <div class=css::notFound>
            <h1 class=css::notFoundCode>"404"</h1>
            <p class=css::notFoundText>"Page not found"</p>
            <p class=css::notFoundPath>{path}</p>
            <a class=css::btnPrimary href="/" on:click=return_home>
                <Icon icon=ic::HOME />
                "Return to Dashboard"
            </a>
        </div>
    }
}
