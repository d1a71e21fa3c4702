//! # client
//!
//! Leptos + WASM frontend for the HypeStore catalog admin.
//!
//! Pages and components render a [`catalog::CatalogState`] kept in a signal.
//! The browser-side pieces (HTTP backend, identity-provider session) live in
//! `net` and only do real work under the `hydrate` feature; on the server
//! they compile to inert stubs so SSR renders the shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
