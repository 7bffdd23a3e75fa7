use super::*;

fn sections() -> Vec<SectionMetrics> {
    [("home", 0.0), ("experience", 600.0), ("projects", 1400.0)]
        .into_iter()
        .map(|(id, top)| SectionMetrics { id: id.to_owned(), top })
        .collect()
}

#[test]
fn progress_is_zero_when_page_does_not_scroll() {
    assert_eq!(progress_pct(0.0, 800.0, 800.0), 0.0);
    assert_eq!(progress_pct(10.0, 500.0, 800.0), 0.0);
}

#[test]
fn progress_covers_the_scrollable_range() {
    assert_eq!(progress_pct(500.0, 1800.0, 800.0), 50.0);
    assert_eq!(progress_pct(1000.0, 1800.0, 800.0), 100.0);
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(progress_pct(1200.0, 1800.0, 800.0), 100.0);
    assert_eq!(progress_pct(-50.0, 1800.0, 800.0), 0.0);
}

#[test]
fn back_to_top_shows_past_the_threshold() {
    let mut state = ScrollState::default();
    state.update(BACK_TO_TOP_THRESHOLD, 2000.0, 800.0, &sections());
    assert!(!state.back_to_top_visible);

    state.update(BACK_TO_TOP_THRESHOLD + 1.0, 2000.0, 800.0, &sections());
    assert!(state.back_to_top_visible);
}

#[test]
fn active_section_picks_the_last_one_reached() {
    let s = sections();
    assert_eq!(active_section(0.0, &s), Some("home"));
    assert_eq!(active_section(399.0, &s), Some("home"));
    assert_eq!(active_section(400.0, &s), Some("experience"));
    assert_eq!(active_section(5000.0, &s), Some("projects"));
}

#[test]
fn no_sections_means_no_active_link() {
    assert_eq!(active_section(500.0, &[]), None);
}

#[test]
fn update_recomputes_every_field() {
    let mut state = ScrollState::default();
    state.update(700.0, 2200.0, 800.0, &sections());
    assert_eq!(state.progress_pct, 50.0);
    assert!(state.back_to_top_visible);
    assert_eq!(state.active_section.as_deref(), Some("experience"));
}
