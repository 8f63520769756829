//! Analysis backend base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host binary reads `ARCHAEOLOGIST_API_URL` at startup and renders it
//! into a `<meta>` tag in the HTML shell. After hydration the browser reads
//! the tag back, so one WASM bundle can target any backend without a rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the analysis backend base URL.
pub const API_URL_ENV: &str = "ARCHAEOLOGIST_API_URL";

/// Backend used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `name` attribute of the shell `<meta>` tag carrying the base URL.
pub const API_URL_META_NAME: &str = "archaeologist-api-url";

/// Backend location provided to the SSR shell via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        Self { base_url: resolve_api_base_url(raw) }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Normalize a configured base URL, falling back to [`DEFAULT_API_BASE_URL`]
/// when the value is missing or blank.
#[must_use]
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Base URL the browser should call.
///
/// Order: shell `<meta>` tag, then the compile-time env var, then the default.
#[must_use]
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_URL_META_NAME}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        resolve_api_base_url(from_meta.as_deref().or(option_env!("ARCHAEOLOGIST_API_URL")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_base_url(std::env::var(API_URL_ENV).ok().as_deref())
    }
}
