//! # portfolio-client
//!
//! Leptos + WASM presentation layer for a system administrator portfolio
//! page. Replaces the hand-written browser script with a Rust-native UI
//! layer: theme toggle, scroll chrome, a paginated project list, a
//! decorative bubble field, and the hero terminal typing effect.
//!
//! All state logic is plain Rust that compiles and tests natively; browser
//! access is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod data;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portfolio client starting");
    leptos::mount::mount_to_body(app::App);
}
