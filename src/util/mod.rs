//! Browser integration helpers.
//!
//! Everything touching `web_sys` is gated behind the `csr` feature with
//! no-op fallbacks, so the crate compiles and tests natively.

pub mod debounce;
pub mod observer;
pub mod theme_store;
pub mod viewport;
