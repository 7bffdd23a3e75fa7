//! Leptos view components for the portfolio page.

pub mod back_to_top;
pub mod bubbles;
pub mod certificates;
pub mod hero;
pub mod navbar;
pub mod progress_bar;
pub mod projects;
pub mod skills;
pub mod timeline;
