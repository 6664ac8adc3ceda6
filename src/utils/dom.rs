//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs.

use web_sys::Window;

/// Element id of the main content region (the shell's content slot).
pub const CONTENT_ID: &str = "main-content";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Reset the content region scroll position.
///
/// Called after navigation so a newly mounted page starts at the top.
pub fn scroll_content_to_top() {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(CONTENT_ID)
    {
        element.set_scroll_top(0);
    }
}
