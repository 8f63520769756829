//! Browser interop helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its pure, testable part (ids, names, escaping, language
//! mapping) separate from the `hydrate`-only calls into JS libraries and the
//! DOM, so SSR builds and unit tests never touch `web_sys`.

pub mod export;
pub mod highlight;
pub mod mermaid;

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
