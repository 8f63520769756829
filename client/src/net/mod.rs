//! Networking modules for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two backend calls and `types` defines their wire schema.

pub mod api;
pub mod types;
