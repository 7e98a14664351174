//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs, organized by concern.

mod clipboard;
mod page;

use wasm_bindgen::JsValue;

/// Readable text for a thrown JS value
pub(crate) fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use clipboard::*;
pub use page::*;
