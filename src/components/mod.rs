//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Persistent shell: sidebar navigation plus content slot
//! - [`badge`] - Status and risk-tier badges
//! - [`cards`] - Panel and metric cards
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod badge;
pub mod cards;
pub mod icons;
pub mod layout;
pub mod router;

pub use router::AppRouter;
