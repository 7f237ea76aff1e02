//! # origami-client
//!
//! Leptos + WASM frontend for the origami app: the play, gallery, and home
//! pages, the shared sidebar, and the HTTP client for saved creations.
//!
//! Pure state machines live in `state` and are tested without a browser;
//! `components` and `pages` bind them to signals and DOM events.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
