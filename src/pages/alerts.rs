//! Alerts page: transaction monitoring queue.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::badge::{Badge, RiskBadge};
use crate::components::cards::Card;
use crate::components::icons as ic;
use crate::models::{BadgeTone, RiskTier};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// A placeholder alert row. Real rows come from the monitoring service.
struct AlertRow {
    id: &'static str,
    rule: &'static str,
    severity: RiskTier,
    score: &'static str,
    status: &'static str,
    status_tone: BadgeTone,
    created: &'static str,
}

const SAMPLE_ALERTS: &[AlertRow] = &[AlertRow {
    id: "ALT-0001",
    rule: "Unusual Transaction Amount",
    severity: RiskTier::High,
    score: "0.78",
    status: "New",
    status_tone: BadgeTone::Info,
    created: "2025-01-16 10:30",
}];

/// Alert queue page.
#[component]
pub fn Alerts() -> impl IntoView {
    // Placeholder handlers (UI only)
    let on_filter = move |_: leptos::ev::MouseEvent| {
        web_sys::console::log_1(&"Filter clicked".into());
    };
    let on_export = move |_: leptos::ev::MouseEvent| {
        web_sys::console::log_1(&"Export clicked".into());
    };

    view! {
        <div>
            <header class=css::pageHeader>
                <h1 class=css::pageTitle>"Alerts"</h1>
                <p class=css::pageSubtitle>"Transaction monitoring alerts"</p>
            </header>

            <Card
                title="Alert Queue"
                action=view! {
                    <div class=css::actions>
                        <button class=css::btnSecondary on:click=on_filter>"Filter"</button>
                        <button class=css::btnPrimary on:click=on_export>
                            <Icon icon=ic::DOWNLOAD />
                            "Export"
                        </button>
                    </div>
                }
                .into_any()
            >
                <table class=css::table>
                    <thead>
                        <tr>
                            <th>"Alert ID"</th>
                            <th>"Rule"</th>
                            <th>"Severity"</th>
                            <th>"Score"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SAMPLE_ALERTS
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td class=css::mono>{row.id}</td>
                                    <td>{row.rule}</td>
                                    <td><RiskBadge tier=row.severity /></td>
                                    <td>{row.score}</td>
                                    <td><Badge tone=row.status_tone label=row.status /></td>
                                    <td>{row.created}</td>
                                    <td>
                                        <button
                                            class=css::btnSecondary
                                            on:click=|_| {
                                                web_sys::console::log_1(&"Review alert clicked".into());
                                            }
                                        >
                                            "Review"
                                        </button>
                                    </td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Card>
        </div>
    }
}
