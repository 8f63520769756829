//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`analysis`, `chat`) so components depend on
//! small focused models provided through Leptos context.

pub mod analysis;
pub mod chat;
