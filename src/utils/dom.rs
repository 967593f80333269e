//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the `HtmlDocument` of a window (needed for `write` / `close`).
pub fn html_document(window: &Window) -> Option<HtmlDocument> {
    window.document()?.dyn_into::<HtmlDocument>().ok()
}
