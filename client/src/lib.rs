//! # client
//!
//! Leptos + WASM web client for the course-enrollment application.
//!
//! This crate contains the route table wiring, pages, the session provider
//! context, the `localStorage` session backend, and the REST service layer.
//! Session, gate, and credential rules come from the `access` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
