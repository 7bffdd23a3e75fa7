#[cfg(test)]
#[path = "bubbles_test.rs"]
mod bubbles_test;

use crate::state::theme::Theme;

/// Number of bubbles in the decorative field.
pub const BUBBLE_COUNT: usize = 12;

/// Quiet period after the last resize event before the field regenerates.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Delay between a theme flip and the retint pass, letting the root
/// `data-theme` attribute change propagate first.
pub const RETINT_DELAY_MS: u32 = 300;

/// Fixed tint alpha applied to every bubble in dark mode.
pub const DARK_ALPHA: f64 = 0.05;

/// How long a click "pop" lasts before the bubble reverts.
pub const POP_REVERT_MS: u32 = 500;

/// Size bucket for a bubble, drawn uniformly at generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleSize {
    Small,
    Medium,
    Large,
}

impl BubbleSize {
    /// CSS class for the size bucket.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Small => "bubble-small",
            Self::Medium => "bubble-medium",
            Self::Large => "bubble-large",
        }
    }

    /// Map a uniform `[0, 1)` draw to a size bucket.
    fn pick(r: f64) -> Self {
        match (r * 3.0) as usize {
            0 => Self::Small,
            1 => Self::Medium,
            _ => Self::Large,
        }
    }
}

/// One decorative bubble. The pool is regenerated wholesale; bubbles carry
/// no identity across regenerations.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub size: BubbleSize,
    /// Horizontal position as a percentage of the container, `[0, 100]`.
    pub pos_x: f64,
    /// Vertical position as a percentage of the container, `[0, 100]`.
    pub pos_y: f64,
    /// Animation start delay in seconds, `[0, 5)`.
    pub delay_s: f64,
    /// Animation duration in seconds, `[20, 30)`.
    pub duration_s: f64,
    /// Inline fill alpha; `None` leaves the stylesheet default.
    pub fill_alpha: Option<f64>,
    /// Inline glow (box shadow) alpha; `None` leaves the stylesheet default.
    pub glow_alpha: Option<f64>,
}

impl Bubble {
    fn generate(theme: Theme, rng: &mut impl FnMut() -> f64) -> Self {
        let size = BubbleSize::pick(rng());
        let pos_x = rng() * 100.0;
        let pos_y = rng() * 100.0;
        let delay_s = rng() * 5.0;
        let duration_s = 20.0 + rng() * 10.0;
        // Light mode gets a per-bubble translucency; dark bubbles keep the
        // stylesheet tint until a retint pass assigns one.
        let fill_alpha = (theme == Theme::Light).then(|| light_alpha(rng()));
        Self { size, pos_x, pos_y, delay_s, duration_s, fill_alpha, glow_alpha: None }
    }

    /// Inline `background` value, if a tint has been assigned.
    pub fn background(&self) -> Option<String> {
        self.fill_alpha.map(|a| format!("rgba(255, 255, 255, {a})"))
    }

    /// Inline `box-shadow` value, if a glow tint has been assigned.
    pub fn box_shadow(&self) -> Option<String> {
        self.glow_alpha.map(|a| {
            format!("inset 0 0 20px rgba(255, 255, 255, {a}), 0 0 30px rgba(255, 255, 255, {a})")
        })
    }
}

/// Map a uniform `[0, 1)` draw to the light-mode tint range `[0.1, 0.3)`.
fn light_alpha(r: f64) -> f64 {
    r * 0.2 + 0.1
}

/// The decorative bubble pool.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BubbleField {
    pub bubbles: Vec<Bubble>,
}

impl BubbleField {
    /// Discard any existing pool and build a fresh one of `count` bubbles.
    ///
    /// `rng` draws uniform values from `[0, 1)`; every positional and timing
    /// field is drawn independently, so regeneration looks organic rather
    /// than identical.
    pub fn generate(count: usize, theme: Theme, rng: &mut impl FnMut() -> f64) -> Self {
        Self { bubbles: (0..count).map(|_| Bubble::generate(theme, rng)).collect() }
    }

    /// Recompute every bubble's tint for `theme`.
    ///
    /// Dark applies the fixed low alpha to fill and glow alike. Light draws
    /// a fresh independent alpha per bubble — re-randomized, never restored
    /// from the value chosen at creation.
    pub fn retint(&mut self, theme: Theme, rng: &mut impl FnMut() -> f64) {
        for bubble in &mut self.bubbles {
            let alpha = match theme {
                Theme::Dark => DARK_ALPHA,
                Theme::Light => light_alpha(rng()),
            };
            bubble.fill_alpha = Some(alpha);
            bubble.glow_alpha = Some(alpha);
        }
    }
}

/// Inline transform for a click "pop": each `[0, 1)` draw maps to a pixel
/// offset in `[-25, 25)`.
pub fn pop_transform(rx: f64, ry: f64) -> String {
    let x = rx * 50.0 - 25.0;
    let y = ry * 50.0 - 25.0;
    format!("translate({x}px, {y}px) scale(1.3)")
}
