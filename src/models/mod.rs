//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`] - Path-based navigation and the ordered route table
//! - [`NavItem`], [`NavIcon`] - Sidebar navigation entries
//! - [`BadgeTone`], [`RiskTier`] - Badge presentation classification

mod badge;
mod nav;
mod route;

pub use badge::{BadgeTone, RiskTier};
pub use nav::{NAV_ITEMS, NavIcon, NavItem};
pub use route::AppRoute;
