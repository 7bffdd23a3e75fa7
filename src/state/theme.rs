#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Global light/dark display mode.
///
/// Persisted as a single `localStorage` key and mirrored onto the
/// `data-theme` attribute of the document root. Components read it via an
/// `RwSignal<Theme>` context; the navbar toggle is the only mutation point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme: a stored preference wins, otherwise the
    /// platform hint, otherwise light. Unrecognized stored values fall
    /// through to the platform hint.
    pub fn initial(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => {
                if system_prefers_dark {
                    Self::Dark
                } else {
                    Self::Light
                }
            }
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value stored in `localStorage` and set as the root `data-theme`
    /// attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon class for the theme toggle button.
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Accessible label describing what the toggle will switch to.
    pub fn toggle_aria_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}
