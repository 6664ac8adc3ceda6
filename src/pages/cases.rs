//! Cases page: investigation case management.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::badge::{Badge, RiskBadge};
use crate::components::cards::Card;
use crate::components::icons as ic;
use crate::models::{BadgeTone, RiskTier};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// A placeholder case row. Real rows come from the case service.
struct CaseRow {
    number: &'static str,
    kind: &'static str,
    priority: RiskTier,
    status: &'static str,
    status_tone: BadgeTone,
    assigned_to: &'static str,
    updated: &'static str,
}

const SAMPLE_CASES: &[CaseRow] = &[CaseRow {
    number: "CASE-2025-0042",
    kind: "Suspicious Activity",
    priority: RiskTier::High,
    status: "In Progress",
    status_tone: BadgeTone::Warning,
    assigned_to: "[Analyst]",
    updated: "2025-01-16 09:15",
}];

/// Active cases page.
#[component]
pub fn Cases() -> impl IntoView {
    // Placeholder handler (UI only)
    let on_create = move |_: leptos::ev::MouseEvent| {
        web_sys::console::log_1(&"Create case clicked".into());
    };

    view! {
        <div>
            <header class=css::pageHeader>
                <h1 class=css::pageTitle>"Cases"</h1>
                <p class=css::pageSubtitle>"Investigation case management"</p>
            </header>

            <Card
                title="Active Cases"
                action=view! {
                    <button class=css::btnPrimary on:click=on_create>
                        <Icon icon=ic::PLUS />
                        "Create Case"
                    </button>
                }
                .into_any()
            >
                <table class=css::table>
                    <thead>
                        <tr>
                            <th>"Case Number"</th>
                            <th>"Type"</th>
                            <th>"Priority"</th>
                            <th>"Status"</th>
                            <th>"Assigned To"</th>
                            <th>"Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SAMPLE_CASES
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td class=css::mono>{row.number}</td>
                                    <td>{row.kind}</td>
                                    <td><RiskBadge tier=row.priority /></td>
                                    <td><Badge tone=row.status_tone label=row.status /></td>
                                    <td>{row.assigned_to}</td>
                                    <td>{row.updated}</td>
                                    <td>
                                        <button
                                            class=css::btnSecondary
                                            on:click=|_| {
                                                web_sys::console::log_1(&"Open case clicked".into());
                                            }
                                        >
                                            "Open"
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
