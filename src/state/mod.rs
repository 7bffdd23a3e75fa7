//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `pagination`, `bubbles`, ...) so
//! individual components can depend on small focused models, and every
//! model stays plain Rust that tests natively. Components hold these in
//! `RwSignal` contexts; browser side effects live in `util` and in the
//! components themselves.

pub mod bubbles;
pub mod hero;
pub mod pagination;
pub mod scroll;
pub mod theme;
