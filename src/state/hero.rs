#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::state::theme::Theme;

/// Milliseconds between typed characters.
pub const TYPE_TICK_MS: u32 = 50;

/// Delay between the terminal entering view and typing starting.
pub const TYPE_START_DELAY_MS: u32 = 1000;

/// Visibility ratio of the terminal that triggers the typing effect.
pub const TERMINAL_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Character-at-a-time reveal of the hero terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    full: String,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let total = full.chars().count();
        Self { full, shown: 0, total }
    }

    /// Reveal one more character. Returns `false` once the full text is
    /// shown; further steps are no-ops.
    pub fn step(&mut self) -> bool {
        if self.shown < self.total {
            self.shown += 1;
        }
        self.shown < self.total
    }

    /// The text revealed so far.
    pub fn visible(&self) -> String {
        self.full.chars().take(self.shown).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }
}

/// Hero background image lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundImage {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Inline opacity for the hero background image: invisible until loaded,
/// then slightly dimmer in dark mode.
pub fn image_opacity(background: BackgroundImage, theme: Theme) -> f64 {
    match (background, theme) {
        (BackgroundImage::Loaded, Theme::Light) => 0.4,
        (BackgroundImage::Loaded, Theme::Dark) => 0.3,
        _ => 0.0,
    }
}

/// Themed gradient substituted when the background image fails to load.
pub fn fallback_gradient(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "linear-gradient(135deg, rgba(245, 245, 247, 0.9) 0%, rgba(232, 232, 237, 0.9) 100%)"
        }
        Theme::Dark => {
            "linear-gradient(135deg, rgba(18, 18, 18, 0.9) 0%, rgba(26, 26, 26, 0.9) 100%)"
        }
    }
}
