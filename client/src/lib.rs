//! # archaeologist-client
//!
//! Leptos + WASM frontend for the Legacy Code Archaeologist.
//!
//! This crate contains the page, components, transient UI state, wire types,
//! and the HTTP client for the external analysis service. Browser-only
//! interop (Mermaid rendering, syntax highlighting, PNG export) lives in
//! `util` behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
