//! Mermaid.js bridge for the architecture diagram.
//!
//! The `mermaid` global is loaded by a script tag in the HTML shell. When it
//! is missing or rejects the graph, callers show [`fallback_html`] instead.
//!
//! TRADE-OFFS
//! ==========
//! Labels are rendered as SVG `<text>` rather than `<foreignObject>` HTML so
//! the PNG export can draw the SVG onto a canvas without tainting it.

#[cfg(test)]
#[path = "mermaid_test.rs"]
mod mermaid_test;

use std::sync::atomic::{AtomicU64, Ordering};

/// Background colour behind the diagram (also used for PNG export).
pub const DIAGRAM_BACKGROUND: &str = "#1a1a2e";

static NEXT_DIAGRAM: AtomicU64 = AtomicU64::new(1);

/// Unique element id for one `mermaid.render` call.
pub fn next_diagram_id() -> String {
    format!("mermaid-{}", NEXT_DIAGRAM.fetch_add(1, Ordering::Relaxed))
}

/// Options passed to `mermaid.initialize`.
#[must_use]
pub fn mermaid_config() -> serde_json::Value {
    serde_json::json!({
        "startOnLoad": false,
        "theme": "dark",
        "securityLevel": "strict",
        "themeVariables": {
            "primaryColor": "#3b82f6",
            "primaryTextColor": "#fff",
            "primaryBorderColor": "#1e40af",
            "lineColor": "#6366f1",
            "secondaryColor": "#8b5cf6",
            "tertiaryColor": "#ec4899",
        },
        "flowchart": { "htmlLabels": false },
    })
}

/// Raw graph text wrapped for display when rendering fails.
#[must_use]
pub fn fallback_html(graph: &str) -> String {
    format!("<pre class=\"graph-viewer__fallback\">{}</pre>", escape_html(graph))
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = mermaid, js_name = initialize)]
        pub fn initialize(config: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = mermaid, js_name = render)]
        pub fn render(id: &str, text: &str) -> Result<js_sys::Promise, JsValue>;
    }
}

/// Render `graph` to SVG markup with Mermaid.
///
/// # Errors
///
/// Returns the Mermaid (or JS) error text if the library is not loaded or
/// the graph does not parse.
#[cfg(feature = "hydrate")]
pub async fn render_svg(id: &str, graph: &str) -> Result<String, String> {
    use super::js_error;
    use wasm_bindgen::JsValue;

    let config = js_sys::JSON::parse(&mermaid_config().to_string()).map_err(js_error)?;
    bindings::initialize(&config).map_err(js_error)?;

    let rendered = match bindings::render(id, graph) {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await,
        Err(e) => Err(e),
    };
    let rendered = rendered.map_err(|e| {
        remove_error_node(id);
        js_error(e)
    })?;

    js_sys::Reflect::get(&rendered, &JsValue::from_str("svg"))
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| "mermaid returned no svg".to_owned())
}

/// Mermaid leaves a `d{id}` error container in `<body>` when parsing fails.
#[cfg(feature = "hydrate")]
fn remove_error_node(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(&format!("d{id}")))
    {
        el.remove();
    }
}
