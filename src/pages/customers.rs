//! Customers page: onboarding and KYC status.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::badge::{Badge, RiskBadge};
use crate::components::cards::Card;
use crate::components::icons as ic;
use crate::models::{BadgeTone, RiskTier};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// A placeholder customer row. Real rows come from the identity service.
struct CustomerRow {
    id: &'static str,
    name: &'static str,
    status: &'static str,
    status_tone: BadgeTone,
    risk: RiskTier,
    created: &'static str,
}

const SAMPLE_CUSTOMERS: &[CustomerRow] = &[
    CustomerRow {
        id: "CUST-001",
        name: "[Customer Name]",
        status: "Verified",
        status_tone: BadgeTone::Success,
        risk: RiskTier::Low,
        created: "2025-01-15",
    },
    CustomerRow {
        id: "CUST-002",
        name: "[Customer Name]",
        status: "Pending",
        status_tone: BadgeTone::Warning,
        risk: RiskTier::Medium,
        created: "2025-01-14",
    },
];

/// Customer list page.
#[component]
pub fn Customers() -> impl IntoView {
    // Placeholder handler (UI only)
    let on_add = move |_: leptos::ev::MouseEvent| {
        web_sys::console::log_1(&"Add customer clicked".into());
    };

    view! {
        <div>
            <header class=css::pageHeader>
                <h1 class=css::pageTitle>"Customers"</h1>
                <p class=css::pageSubtitle>"Manage customer onboarding and KYC status"</p>
            </header>

            <Card
                title="Customer List"
                action=view! {
                    <button class=css::btnPrimary on:click=on_add>
                        <Icon icon=ic::PLUS />
                        "Add Customer"
                    </button>
                }
                .into_any()
            >
                <table class=css::table>
                    <thead>
                        <tr>
                            <th>"Customer ID"</th>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Risk Tier"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SAMPLE_CUSTOMERS
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td class=css::mono>{row.id}</td>
                                    <td>{row.name}</td>
                                    <td><Badge tone=row.status_tone label=row.status /></td>
                                    <td><RiskBadge tier=row.risk /></td>
                                    <td>{row.created}</td>
                                    <td>
                                        <button
                                            class=css::btnSecondary
                                            on:click=|_| {
                                                web_sys::console::log_1(&"View customer clicked".into());
                                            }
                                        >
                                            "View"
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
