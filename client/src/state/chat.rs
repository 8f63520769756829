//! Chat transcript for questions about the analyzed repository.
//!
//! DESIGN
//! ======
//! The transcript is append-only. `epoch` changes whenever the transcript is
//! cleared, so an answer that lands after a reset is dropped instead of
//! appearing under a different repository.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::{ApiError, chat_request};
use crate::net::types::{ChatRequest, ChatResponse, CodeSnippet};

/// Assistant text used when a chat call fails for any reason.
pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I encountered an error processing your question. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub relevant_files: Vec<String>,
    pub code_snippets: Vec<CodeSnippet>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into(), relevant_files: Vec::new(), code_snippets: Vec::new() }
    }

    #[must_use]
    pub fn assistant(response: ChatResponse) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: response.answer,
            relevant_files: response.relevant_files,
            code_snippets: response.code_snippets,
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            role: ChatRole::Assistant,
            content: CHAT_FALLBACK_MESSAGE.to_owned(),
            relevant_files: Vec::new(),
            code_snippets: Vec::new(),
        }
    }
}

/// A chat request handed to the caller by [`ChatState::begin_send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingChat {
    pub epoch: u64,
    pub request: ChatRequest,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub epoch: u64,
}

impl ChatState {
    /// Append the user's turn and return the request to send.
    ///
    /// Blank input and sends while an answer is pending are ignored.
    pub fn begin_send(&mut self, input: &str, repo_url: &str) -> Option<PendingChat> {
        if input.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Some(PendingChat { epoch: self.epoch, request: chat_request(repo_url, input) })
    }

    /// Record the outcome of a send started in `epoch`.
    ///
    /// Returns `false` when the transcript was cleared in the meantime.
    pub fn finish(&mut self, epoch: u64, result: Result<ChatResponse, ApiError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let message = match result {
            Ok(response) => ChatMessage::assistant(response),
            Err(_) => ChatMessage::fallback(),
        };
        self.messages.push(message);
        self.loading = false;
        true
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
