//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::NavIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFolder as Cases, LuGauge as Dashboard, LuHouse as Home,
        LuPlus as Plus, LuTriangleAlert as Alerts, LuUsers as Customers,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDownload as Download, BsExclamationTriangle as Alerts, BsFolder2 as Cases,
        BsHouseFill as Home, BsPeople as Customers, BsPlusLg as Plus,
        BsSpeedometer2 as Dashboard,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(CUSTOMERS, Customers);
themed_icon!(ALERTS, Alerts);
themed_icon!(CASES, Cases);
themed_icon!(HOME, Home);
themed_icon!(PLUS, Plus);
themed_icon!(DOWNLOAD, Download);

/// Map a navigation icon identifier to its themed glyph.
pub fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Dashboard => DASHBOARD,
        NavIcon::Customers => CUSTOMERS,
        NavIcon::Alerts => ALERTS,
        NavIcon::Cases => CASES,
    }
}
