//! Shell layout: sidebar navigation plus content slot.
//!
//! The shell is mounted once and stays stable across navigation; only the
//! content slot re-renders when the route changes.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::components::router::RouterContext;
use crate::config::{APP_NAME, APP_TAGLINE, APP_VERSION};
use crate::models::{AppRoute, NAV_ITEMS, NavItem};
use crate::utils::dom::CONTENT_ID;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Two-region shell: sidebar (brand header + nav list) and main content.
///
/// # Props
/// - `route`: current application route, for active-link highlighting
/// - `children`: content rendered by the router into the main region
#[component]
pub fn Layout(route: Memo<AppRoute>, children: Children) -> impl IntoView {
    view! {
        <div class=css::shell>
            <aside class=css::sidebar>
                <div class=css::brand>
                    <h1 class=css::brandName>{APP_NAME}</h1>
                    <p class=css::brandTagline>{APP_TAGLINE}</p>
                </div>

                <nav class=css::nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=item route=route /> })
                        .collect_view()}
                </nav>

                <div class=css::version>{format!("v{APP_VERSION}")}</div>
            </aside>

            <main class=css::main id=CONTENT_ID>
                {children()}
            </main>
        </div>
    }
}

/// A single sidebar link.
///
/// Applies the active class when the item's path equals the current
/// location exactly, so at most one link is highlighted at a time.
#[component]
fn NavLink(item: &'static NavItem, route: Memo<AppRoute>) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let is_active = Memo::new(move |_| route.with(|r| item.is_active(r.to_path())));

    let link_class = move || {
        if is_active.get() {
            format!("{} {}", css::navLink, css::navLinkActive)
        } else {
            css::navLink.to_string()
        }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(AppRoute::from_path(item.path));
    };

    view! {
        <a
            class=link_class
            href=item.path
            on:click=on_click
            aria-current=move || if is_active.get() { "page" } else { "false" }
        >
            <span class=css::navIcon><Icon icon=icons::nav_icon(item.icon) /></span>
            <span class=css::navLabel>{item.label}</span>
        </a>
    }
}
