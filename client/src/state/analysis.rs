//! Analysis lifecycle state for the home page.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the submit/succeed/fail/reset flow can be
//! unit tested without a browser. The page holds this in an `RwSignal` and
//! performs the network call only when `begin` hands back a request.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::api::analysis_request;
use crate::net::types::{AnalyzeRequest, AnalyzeResponse};

/// Which top-level panel the page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Waiting for a URL.
    Idle,
    Loading,
    Failed,
    Ready,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisState {
    /// URL of the repository currently analyzed (or being analyzed).
    pub repo_url: String,
    pub loading: bool,
    pub data: Option<AnalyzeResponse>,
    pub error: Option<String>,
}

impl AnalysisState {
    /// Start an analysis for `raw_url`.
    ///
    /// Returns the request to send, or `None` when the URL is blank or a
    /// request is already in flight. State is untouched in the `None` case.
    pub fn begin(&mut self, raw_url: &str) -> Option<AnalyzeRequest> {
        let url = raw_url.trim();
        if url.is_empty() || self.loading {
            return None;
        }
        self.repo_url = url.to_owned();
        self.loading = true;
        self.error = None;
        Some(analysis_request(url))
    }

    pub fn succeed(&mut self, response: AnalyzeResponse) {
        self.data = Some(response);
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Drop everything learned about the current repository.
    pub fn reset(&mut self) {
        self.data = None;
        self.repo_url.clear();
        self.error = None;
    }

    #[must_use]
    pub fn phase(&self) -> AnalysisPhase {
        if self.loading {
            AnalysisPhase::Loading
        } else if self.error.is_some() {
            AnalysisPhase::Failed
        } else if self.data.is_some() {
            AnalysisPhase::Ready
        } else {
            AnalysisPhase::Idle
        }
    }
}
