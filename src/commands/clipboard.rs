//! Clipboard Commands
//!
//! Async clipboard write plus the manual-selection fallback.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// Write `text` with `navigator.clipboard.writeText`.
/// Errors when the API is missing (insecure context, old browser) or rejects.
pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(js_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard API unavailable".to_string());
    }

    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

/// Select everything inside `node` so the user can copy it by hand
pub fn select_contents(node: &web_sys::Node) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let selection = window
        .get_selection()
        .map_err(js_error)?
        .ok_or("selection unavailable")?;
    let range = document.create_range().map_err(js_error)?;
    range.select_node_contents(node).map_err(js_error)?;
    selection.remove_all_ranges().map_err(js_error)?;
    selection.add_range(&range).map_err(js_error)
}
