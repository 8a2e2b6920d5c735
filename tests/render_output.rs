use deckicon::{IconRenderer, Theme};
use image::Rgba;

#[test]
fn render_is_exact_square_for_all_themed_sizes() {
    let r = IconRenderer::new(Theme::rummy());
    for size in [32u32, 72, 96, 128, 144, 152, 192, 384, 512] {
        assert_eq!(r.render(size).dimensions(), (size, size), "render({size}) dimensions");
    }
}

#[test]
fn corners_transparent_disc_opaque() {
    let img = IconRenderer::new(Theme::rummy()).render(72);
    assert_eq!(img.get_pixel(0, 0).0[3], 0, "corner outside the disc stays transparent");
    assert_eq!(img.get_pixel(71, 0).0[3], 0);
    assert_eq!(img.get_pixel(36, 8).0[3], 255, "point inside the background disc is opaque");
}

#[test]
fn suit_glyphs_gate_on_threshold() {
    let r = IconRenderer::new(Theme::joker());

    // Below the 96 threshold the spade anchor shows plain face fill.
    let small = r.render(72);
    assert_eq!(
        *small.get_pixel(36, 54),
        Rgba([250, 245, 240, 255]),
        "no suit ink below the threshold"
    );

    // At 128 the anchors carry the suit colors exactly (full coverage).
    let big = r.render(128);
    assert_eq!(*big.get_pixel(64, 96), Rgba([45, 45, 60, 255]), "spade at the bottom anchor");
    assert_eq!(*big.get_pixel(32, 64), Rgba([255, 215, 0, 255]), "diamond at the left anchor");
}

#[test]
fn dice_gate_on_threshold() {
    let r = IconRenderer::new(Theme::rummy());

    // Die face interior at 128 (away from pips and outline) is the die fill.
    let big = r.render(128);
    assert_eq!(*big.get_pixel(87, 87), Rgba([255, 255, 255, 255]), "die fill at 128");

    // The equivalent spot at 96 still shows the gradient disc, not a die.
    let small = r.render(96);
    let p = small.get_pixel(65, 65);
    assert_eq!(p.0[3], 255);
    assert_ne!(*p, Rgba([255, 255, 255, 255]), "no die below the threshold");
}

#[test]
fn caption_changes_pixels_only_at_or_above_threshold() {
    let mut muted = Theme::rummy();
    muted.caption = None;
    let with = IconRenderer::new(Theme::rummy());
    let without = IconRenderer::new(muted);

    assert_ne!(
        with.render(128).as_raw(),
        without.render(128).as_raw(),
        "caption must leave ink at 128"
    );
    assert_eq!(
        with.render(96).as_raw(),
        without.render(96).as_raw(),
        "caption is absent below its threshold"
    );
}

#[test]
fn shipped_theme_file_loads_and_renders() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/themes/midnight.ron");
    let theme = Theme::load_from_file(path).expect("shipped theme descriptor must parse");

    assert_eq!(theme.name, "midnight");
    let bg = theme.background.as_ref().expect("midnight keeps a background disc");
    assert_eq!(bg.radius_frac, 0.48);
    assert_eq!(theme.caption.as_ref().map(|c| c.text.as_str()), Some("DECK"));
    // Fields the file omits inherit the rummy defaults
    assert!(theme.dice.is_some());
    assert_eq!(theme.thresholds.card_ranks, 64);

    let img = IconRenderer::new(theme).render(96);
    assert_eq!(img.dimensions(), (96, 96));
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(48, 12).0[3], 255, "background disc renders opaque");
}

#[test]
fn custom_theme_thresholds_are_respected() {
    let mut theme = Theme::rummy();
    theme.thresholds.suits = 40;
    let r = IconRenderer::new(theme);
    assert!(r.plan(48).contains(&deckicon::Layer::Suits), "lowered threshold admits suits at 48");
}
