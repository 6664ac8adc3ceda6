//! Panel and metric cards shared across pages.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::models::BadgeTone;

stylance::import_crate_style!(css, "src/components/cards.module.css");

/// Bordered panel with a header row and arbitrary content.
///
/// # Props
/// - `title`: header text
/// - `action`: optional header action area (e.g. buttons)
/// - `children`: panel body
#[component]
pub fn Card(
    title: &'static str,
    #[prop(into, optional)] action: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=css::card>
            <div class=css::cardHeader>
                <h3 class=css::cardTitle>{title}</h3>
                {action}
            </div>
            {children()}
        </section>
    }
}

/// Metric summary card for the dashboard grid.
///
/// The change badge tone combines the sign of `change` with whether a drop
/// in this metric is an improvement (`positive`).
#[component]
pub fn MetricCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
    #[prop(optional)] positive: bool,
) -> impl IntoView {
    let tone = BadgeTone::for_change(change, positive);

    view! {
        <div class=css::card>
            <p class=css::metricTitle>{title}</p>
            <p class=css::metricValue>{value}</p>
            <Badge tone=tone label=change />
        </div>
    }
}
