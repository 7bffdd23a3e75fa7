#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset above which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// How far above a section's top edge it becomes the "active" section.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;

/// Measured top edge of one `<section id=..>`, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
}

/// View-sync state derived from the window scroll position.
///
/// One window `scroll` listener updates this; the progress bar, the
/// back-to-top button, and the nav-link highlight all subscribe to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Percentage of the scrollable range covered, `[0, 100]`.
    pub progress_pct: f64,
    pub back_to_top_visible: bool,
    /// Id of the section currently considered in view, if any.
    pub active_section: Option<String>,
}

impl ScrollState {
    /// Recompute all derived fields from fresh viewport measurements.
    pub fn update(
        &mut self,
        scroll_y: f64,
        scroll_height: f64,
        client_height: f64,
        sections: &[SectionMetrics],
    ) {
        self.progress_pct = progress_pct(scroll_y, scroll_height, client_height);
        self.back_to_top_visible = scroll_y > BACK_TO_TOP_THRESHOLD;
        self.active_section = active_section(scroll_y, sections).map(str::to_owned);
    }
}

/// Percentage of the scrollable range covered, clamped to `[0, 100]`.
/// Zero when the page does not scroll at all.
pub fn progress_pct(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// The last section (document order) whose top edge has scrolled within the
/// activation offset.
pub fn active_section(scroll_y: f64, sections: &[SectionMetrics]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET)
        .map(|s| s.id.as_str())
}
