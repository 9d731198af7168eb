//! # marketplace-client
//!
//! Leptos + WASM frontend for the marketplace storefront.
//!
//! This crate owns the client-side session: persisted credentials, the
//! per-tab session state, the route guards that gate the buyer, seller, and
//! admin areas, and the role navigation shells those areas render in.
//! Page content beyond the auth forms lives elsewhere.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_env_or_default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
