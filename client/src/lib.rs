//! # client
//!
//! Leptos + WASM single-page application for the scientometric curation
//! platform. Replaces nothing server-side: every operation is a direct
//! call to the external REST backend (and, through it, the AI
//! classification service).
//!
//! This crate contains pages, components, application state, the typed
//! API client, and browser utility glue. Domain logic (record model,
//! status derivation, filtering) lives in the shared `records` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Trunk builds this crate with `--features csr`
/// and the generated bundle mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
