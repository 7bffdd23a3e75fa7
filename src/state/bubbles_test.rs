use super::*;

/// Deterministic uniform source cycling through a fixed sequence.
fn seq(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn generate_yields_exactly_the_requested_count() {
    let mut rng = seq(vec![0.5]);
    let field = BubbleField::generate(BUBBLE_COUNT, Theme::Dark, &mut rng);
    assert_eq!(field.bubbles.len(), 12);
}

#[test]
fn generated_fields_stay_in_range() {
    let mut rng = seq(vec![0.0, 0.17, 0.42, 0.61, 0.986, 0.33, 0.74]);
    let field = BubbleField::generate(BUBBLE_COUNT, Theme::Light, &mut rng);
    for bubble in &field.bubbles {
        assert!((0.0..=100.0).contains(&bubble.pos_x));
        assert!((0.0..=100.0).contains(&bubble.pos_y));
        assert!((0.0..5.0).contains(&bubble.delay_s));
        assert!((20.0..30.0).contains(&bubble.duration_s));
    }
}

#[test]
fn size_buckets_cover_the_unit_interval() {
    assert_eq!(BubbleSize::pick(0.0), BubbleSize::Small);
    assert_eq!(BubbleSize::pick(0.32), BubbleSize::Small);
    assert_eq!(BubbleSize::pick(0.34), BubbleSize::Medium);
    assert_eq!(BubbleSize::pick(0.65), BubbleSize::Medium);
    assert_eq!(BubbleSize::pick(0.67), BubbleSize::Large);
    assert_eq!(BubbleSize::pick(0.999), BubbleSize::Large);
}

#[test]
fn dark_generation_leaves_tint_to_the_stylesheet() {
    let mut rng = seq(vec![0.4, 0.8]);
    let field = BubbleField::generate(6, Theme::Dark, &mut rng);
    for bubble in &field.bubbles {
        assert_eq!(bubble.fill_alpha, None);
        assert_eq!(bubble.glow_alpha, None);
        assert_eq!(bubble.background(), None);
        assert_eq!(bubble.box_shadow(), None);
    }
}

#[test]
fn light_generation_assigns_fill_alpha_in_range() {
    let mut rng = seq(vec![0.0, 0.25, 0.5, 0.75, 0.999]);
    let field = BubbleField::generate(6, Theme::Light, &mut rng);
    for bubble in &field.bubbles {
        let alpha = bubble.fill_alpha.expect("light bubbles carry a fill alpha");
        assert!((0.1..0.3).contains(&alpha));
        assert_eq!(bubble.glow_alpha, None);
    }
}

#[test]
fn retint_dark_applies_fixed_alpha_everywhere() {
    let mut rng = seq(vec![0.3, 0.7, 0.1]);
    let mut field = BubbleField::generate(5, Theme::Light, &mut rng);

    field.retint(Theme::Dark, &mut rng);
    for bubble in &field.bubbles {
        assert_eq!(bubble.fill_alpha, Some(DARK_ALPHA));
        assert_eq!(bubble.glow_alpha, Some(DARK_ALPHA));
    }
}

#[test]
fn retint_light_redraws_alphas_per_bubble() {
    let mut rng = seq(vec![0.5]);
    let mut field = BubbleField::generate(3, Theme::Dark, &mut rng);

    let mut retint_rng = seq(vec![0.0, 0.5, 0.9]);
    field.retint(Theme::Light, &mut retint_rng);

    let alphas: Vec<f64> =
        field.bubbles.iter().map(|b| b.fill_alpha.expect("tinted")).collect();
    for alpha in &alphas {
        assert!((0.1..0.3).contains(alpha));
    }
    // Independent draws per element.
    assert!(alphas[0] != alphas[1] && alphas[1] != alphas[2]);
    for bubble in &field.bubbles {
        assert_eq!(bubble.glow_alpha, bubble.fill_alpha);
    }
}

#[test]
fn retint_light_is_rerandomized_not_restored() {
    // Created with a high draw (alpha 0.29), retinted with a low one (0.1).
    let mut rng = seq(vec![0.95]);
    let mut field = BubbleField::generate(1, Theme::Light, &mut rng);
    let before = field.bubbles[0].fill_alpha.expect("tinted");

    let mut retint_rng = seq(vec![0.0]);
    field.retint(Theme::Light, &mut retint_rng);
    let after = field.bubbles[0].fill_alpha.expect("tinted");

    assert!((after - 0.1).abs() < 1e-9);
    assert!((before - after).abs() > 1e-3);
}

#[test]
fn inline_tint_values_format_as_css() {
    let mut rng = seq(vec![0.5]);
    let mut field = BubbleField::generate(1, Theme::Dark, &mut rng);
    field.retint(Theme::Dark, &mut rng);

    let bubble = &field.bubbles[0];
    assert_eq!(bubble.background().as_deref(), Some("rgba(255, 255, 255, 0.05)"));
    assert_eq!(
        bubble.box_shadow().as_deref(),
        Some("inset 0 0 20px rgba(255, 255, 255, 0.05), 0 0 30px rgba(255, 255, 255, 0.05)")
    );
}

#[test]
fn pop_transform_maps_draws_to_pixel_offsets() {
    assert_eq!(pop_transform(0.5, 0.5), "translate(0px, 0px) scale(1.3)");
    assert_eq!(pop_transform(0.0, 1.0), "translate(-25px, 25px) scale(1.3)");
}
