//! # portal-client
//!
//! Leptos + WASM frontend for the local account portal: registration, login,
//! password reset, and an admin user dashboard.
//!
//! All account data lives in browser local storage behind the
//! [`util::storage::KeyValueStore`] seam. The `hydrate` feature builds the
//! browser bundle; `ssr` builds the server-rendered shell; unit tests run with
//! neither.

pub mod accounts;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
