//! Utility functions.
//!
//! - [`dom`] - Safe access to browser window/document APIs

pub mod dom;
