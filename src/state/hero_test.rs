use super::*;

#[test]
fn typewriter_reveals_one_char_per_step() {
    let mut t = Typewriter::new("hi");
    assert_eq!(t.visible(), "");
    assert!(!t.is_complete());

    assert!(t.step());
    assert_eq!(t.visible(), "h");

    assert!(!t.step());
    assert_eq!(t.visible(), "hi");
    assert!(t.is_complete());
}

#[test]
fn typewriter_is_idempotent_once_complete() {
    let mut t = Typewriter::new("ok");
    t.step();
    t.step();
    assert!(!t.step());
    assert_eq!(t.visible(), "ok");
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let mut t = Typewriter::new("déjà");
    t.step();
    t.step();
    assert_eq!(t.visible(), "dé");
    t.step();
    t.step();
    assert_eq!(t.visible(), "déjà");
    assert!(t.is_complete());
}

#[test]
fn empty_text_is_complete_immediately() {
    let mut t = Typewriter::new("");
    assert!(t.is_complete());
    assert!(!t.step());
    assert_eq!(t.visible(), "");
}

#[test]
fn image_opacity_depends_on_load_state_and_theme() {
    assert_eq!(image_opacity(BackgroundImage::Loading, Theme::Light), 0.0);
    assert_eq!(image_opacity(BackgroundImage::Failed, Theme::Dark), 0.0);
    assert_eq!(image_opacity(BackgroundImage::Loaded, Theme::Light), 0.4);
    assert_eq!(image_opacity(BackgroundImage::Loaded, Theme::Dark), 0.3);
}

#[test]
fn fallback_gradient_is_themed() {
    assert!(fallback_gradient(Theme::Light).contains("rgba(245, 245, 247, 0.9)"));
    assert!(fallback_gradient(Theme::Dark).contains("rgba(18, 18, 18, 0.9)"));
}
