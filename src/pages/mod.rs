//! Routed page components.
//!
//! All pages render static placeholder markup; live data wiring belongs to
//! the platform services and is out of scope for this scaffold.
//!
//! - [`Dashboard`] - Platform overview and key metrics
//! - [`Customers`] - Customer onboarding and KYC status
//! - [`Alerts`] - Transaction monitoring alert queue
//! - [`Cases`] - Investigation case management
//! - [`NotFound`] - Fallback for unmatched paths

mod alerts;
mod cases;
mod customers;
mod dashboard;
mod not_found;

pub use alerts::Alerts;
pub use cases::Cases;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
