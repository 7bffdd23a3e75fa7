use super::*;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn stored_preference_wins_over_platform_hint() {
    assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
    assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn platform_hint_applies_without_stored_value() {
    assert_eq!(Theme::initial(None, true), Theme::Dark);
    assert_eq!(Theme::initial(None, false), Theme::Light);
}

#[test]
fn unrecognized_stored_value_falls_through_to_hint() {
    assert_eq!(Theme::initial(Some("solarized"), true), Theme::Dark);
    assert_eq!(Theme::initial(Some(""), false), Theme::Light);
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn stored_attr_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::initial(Some(theme.as_attr()), false), theme);
    }
}

#[test]
fn toggle_icon_reflects_current_theme() {
    assert_eq!(Theme::Dark.toggle_icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.toggle_icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.toggle_aria_label(), "Switch to light mode");
    assert_eq!(Theme::Light.toggle_aria_label(), "Switch to dark mode");
}
