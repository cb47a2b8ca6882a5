//! # client
//!
//! Leptos + WASM front-end for the FYP supervisor portal.
//!
//! This crate contains the application root, route-level pages, shared
//! components, reactive state, and the browser-backed identity provider. Session
//! semantics (observer, route guard, log-out) live in `fyp-supervisor`; this
//! crate wires them into signals, effects, and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
