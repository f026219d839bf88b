//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its components, the navigation-and-theme
//! controller (`util::theme`, `util::scroll`), and the content types served
//! by the server. Build with `hydrate` for the browser bundle and `ssr` for
//! server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
