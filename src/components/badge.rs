//! Status badge components.

use leptos::prelude::*;

use crate::models::{BadgeTone, RiskTier};

stylance::import_crate_style!(css, "src/components/badge.module.css");

/// Tone-colored badge pill.
#[component]
pub fn Badge(tone: BadgeTone, label: &'static str) -> impl IntoView {
    let tone_class = match tone {
        BadgeTone::Success => css::success,
        BadgeTone::Warning => css::warning,
        BadgeTone::Error => css::error,
        BadgeTone::Info => css::info,
    };

    view! { <span class=format!("{} {}", css::badge, tone_class)>{label}</span> }
}

/// Risk-tier badge pill (Low / Medium / High).
#[component]
pub fn RiskBadge(tier: RiskTier) -> impl IntoView {
    let tier_class = match tier {
        RiskTier::Low => css::riskLow,
        RiskTier::Medium => css::riskMedium,
        RiskTier::High => css::riskHigh,
    };

    view! { <span class=format!("{} {}", css::badge, tier_class)>{tier.label()}</span> }
}
