//! Thin helpers for repetitive DOM lookups in the form screens.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

/// Fetch an element by id, as a `Result` so screens can propagate a missing
/// fixed fragment instead of panicking.
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Fetch an `<input>` element by id and cast it to `HtmlInputElement`.
pub fn html_input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element_by_id(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an <input>", id)))
}

/// Hand navigation off to the browser.  Page state (including any input
/// history) is deliberately discarded by the reload.
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            crate::console_error!("navigation to {} failed: {:?}", path, err);
        }
    }
}
