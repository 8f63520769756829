//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analysis results and the chat surface, reading
//! shared state from Leptos context providers where they need it.

pub mod analyzed_files;
pub mod chat_panel;
pub mod code_snippet;
pub mod error_panel;
pub mod graph_viewer;
pub mod loading_state;
pub mod repo_input;
pub mod repo_overview;
pub mod tech_stack;
