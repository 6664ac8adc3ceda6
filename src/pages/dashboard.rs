//! Dashboard page: platform overview and key metrics.

use leptos::prelude::*;

use crate::components::cards::{Card, MetricCard};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Platform overview with the headline metric grid.
///
/// Metric values are placeholders; `positive` marks the metrics where a
/// drop is an improvement (open alerts, average risk score).
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div>
            <header class=css::pageHeader>
                <h1 class=css::pageTitle>"Dashboard"</h1>
                <p class=css::pageSubtitle>"Platform overview and key metrics"</p>
            </header>

            <div class=css::metricGrid>
                <MetricCard title="Active Customers" value="12,847" change="+5.2%" />
                <MetricCard title="Open Alerts" value="156" change="-12.3%" positive=true />
                <MetricCard title="Cases in Progress" value="42" change="+8.1%" />
                <MetricCard title="Avg Risk Score" value="0.32" change="-2.4%" positive=true />
            </div>

            <div class=css::panelGrid>
                <Card title="Recent Alerts">
                    <p class=css::placeholder>"Alert data will be displayed here."</p>
                </Card>

                <Card title="Risk Distribution">
                    <p class=css::placeholder>"Risk distribution chart will be displayed here."</p>
                </Card>
            </div>
        </div>
    }
}
