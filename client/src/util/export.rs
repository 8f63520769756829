//! Client-side PNG export of the rendered diagram.
//!
//! The SVG produced by Mermaid is serialized, loaded into an `<img>`, drawn
//! onto an offscreen canvas over the diagram background, and downloaded as a
//! data URL through a temporary anchor.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Device-pixel multiplier for the exported image.
pub const EXPORT_SCALE: f64 = 2.0;

/// Download name for a repository's diagram, e.g. `react-architecture.png`.
#[must_use]
pub fn export_file_name(repo_name: &str) -> String {
    let stem: String = repo_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '-' })
        .collect();
    let stem = stem.trim_matches(|c| c == '-' || c == '.');
    if stem.is_empty() {
        "architecture.png".to_owned()
    } else {
        format!("{stem}-architecture.png")
    }
}

/// Canvas size in pixels for a diagram of the given CSS size.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn canvas_size(width_css: f64, height_css: f64) -> (u32, u32) {
    let to_px = |v: f64| (v.max(1.0) * EXPORT_SCALE).ceil() as u32;
    (to_px(width_css), to_px(height_css))
}

/// Rasterize the `<svg>` inside `container` and download it as `file_name`.
///
/// # Errors
///
/// Returns a description of the failing step (no diagram, serialization,
/// image decode, canvas access).
#[cfg(feature = "hydrate")]
pub async fn export_png(container: &web_sys::Element, file_name: &str) -> Result<(), String> {
    use super::js_error;
    use wasm_bindgen::JsCast;

    let svg = container
        .query_selector("svg")
        .map_err(js_error)?
        .ok_or_else(|| "diagram has not rendered".to_owned())?;
    let rect = svg.get_bounding_client_rect();
    let (width, height) = (rect.width().max(1.0), rect.height().max(1.0));

    // Mermaid emits `width="100%"`; give the copy a fixed size so the image
    // decodes at the on-screen dimensions.
    let copy = svg
        .clone_node_with_deep(true)
        .map_err(js_error)?
        .dyn_into::<web_sys::Element>()
        .map_err(|_| "svg clone is not an element".to_owned())?;
    copy.set_attribute("width", &width.to_string()).map_err(js_error)?;
    copy.set_attribute("height", &height.to_string()).map_err(js_error)?;
    let _ = copy.remove_attribute("style");

    let markup = web_sys::XmlSerializer::new()
        .and_then(|s| s.serialize_to_string(&copy))
        .map_err(js_error)?;
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&markup));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/svg+xml;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let data_url = rasterize(&object_url, width, height).await;
    let _ = web_sys::Url::revoke_object_url(&object_url);
    download(&data_url?, file_name)
}

#[cfg(feature = "hydrate")]
async fn rasterize(src: &str, width: f64, height: f64) -> Result<String, String> {
    use super::js_error;
    use super::mermaid::DIAGRAM_BACKGROUND;
    use wasm_bindgen::JsCast;

    let image = web_sys::HtmlImageElement::new().map_err(js_error)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    wasm_bindgen_futures::JsFuture::from(loaded)
        .await
        .map_err(|_| "diagram image failed to load".to_owned())?;
    image.set_onload(None);
    image.set_onerror(None);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let canvas = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "canvas element unavailable".to_owned())?;
    let (px_w, px_h) = canvas_size(width, height);
    canvas.set_width(px_w);
    canvas.set_height(px_h);

    let ctx = canvas
        .get_context("2d")
        .map_err(js_error)?
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| "2d context unavailable".to_owned())?;
    ctx.set_fill_style_str(DIAGRAM_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, f64::from(px_w), f64::from(px_h));
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, f64::from(px_w), f64::from(px_h))
        .map_err(js_error)?;

    canvas.to_data_url_with_type("image/png").map_err(js_error)
}

#[cfg(feature = "hydrate")]
fn download(href: &str, file_name: &str) -> Result<(), String> {
    use super::js_error;
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let link = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element unavailable".to_owned())?;
    link.set_download(file_name);
    link.set_href(href);
    link.click();
    Ok(())
}
