//! # authwrap
//!
//! Leptos + WASM frontend for a token-authenticated blog application.
//!
//! The `session` module is the heart of the crate: a persisted credential
//! store over `localStorage`, an in-tab notification bus that also receives
//! the browser's cross-tab storage signal, and a reactive hook components
//! use to observe the signed-in state. Pages and components around it cover
//! registration, sign-in, password reset, a public post index and full
//! management of the signed-in account's posts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Client entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
