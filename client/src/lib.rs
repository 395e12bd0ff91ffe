//! # client
//!
//! Leptos + WASM frontend for the bbmodel generator.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the generation backend. Completed models are previewed through
//! the `viewer` crate via the `ModelViewer` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive tree to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
