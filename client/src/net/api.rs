//! HTTP calls to the external analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls return [`ApiError::Unavailable`] since the
//! backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep the backend's `detail` text when it has one, so the
//! analysis error panel can show the real reason instead of a bare status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse};

/// File budget sent with every analysis request.
pub const ANALYZE_MAX_FILES: u32 = 15;

/// Message shown when an analysis failure carries no backend detail.
pub const ANALYZE_FALLBACK_MESSAGE: &str = "Failed to analyze repository. Please check the URL and try again.";

/// Errors from a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("backend calls are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Text for the analysis error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => ANALYZE_FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// Build the analysis request the input form submits.
#[must_use]
pub fn analysis_request(repo_url: &str) -> AnalyzeRequest {
    AnalyzeRequest { repo_url: repo_url.to_owned(), max_files: Some(ANALYZE_MAX_FILES), file_extensions: None }
}

/// Build a chat request for a question about `repo_url`.
#[must_use]
pub fn chat_request(repo_url: &str, question: &str) -> ChatRequest {
    ChatRequest { repo_url: repo_url.to_owned(), question: question.to_owned(), context: None }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Pull a human-readable reason out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "...", ...}]}`.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.first()?.get("msg")?.as_str()?.to_owned(),
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Analyze a repository via `POST /api/analyze`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn analyze_repository(request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
    post_json("/api/analyze", request).await
}

/// Ask a question about a repository via `POST /api/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn chat_about_code(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    post_json("/api/chat", request).await
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::config::api_base_url(), path);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let detail = resp.text().await.ok().as_deref().and_then(error_detail);
            log::warn!("{path} failed: status={status} detail={detail:?}");
            return Err(ApiError::Status { status, detail });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}
