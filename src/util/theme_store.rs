//! Theme preference persistence and root attribute application.
//!
//! Reads the saved theme from `localStorage` (falling back to the platform
//! `prefers-color-scheme` hint) and mirrors the active theme onto the
//! `data-theme` attribute of the `<html>` element. Requires a browser
//! environment; native builds resolve to the default theme.

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "portfolio-theme";

/// Resolve the startup theme from the stored preference, else the platform
/// hint.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let system_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());

        Theme::initial(stored.as_deref(), system_prefers_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Mirror `theme` onto the root `data-theme` attribute.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_attr());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` as the stored preference.
pub fn store(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_attr());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
