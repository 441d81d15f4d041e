//! # client
//!
//! Leptos + WASM front-end for the research group registry.
//!
//! Five routed pages (groups, inventory, planning, projects, login) render
//! static placeholder datasets through a shared table component. Button
//! actions only write a diagnostic log line; there is no network layer.

// Rendering the full routed `App` nests deeply enough to exceed the default.
#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_helpers;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
