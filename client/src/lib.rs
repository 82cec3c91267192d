//! # client
//!
//! Leptos + WASM frontend for the mygallery site: a header, a home page,
//! login and signup forms, and the discussion-board listing.
//!
//! The crate is compiled twice. With `ssr` the server renders the component
//! tree; with `hydrate` the browser bundle takes it over and performs the
//! network calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
