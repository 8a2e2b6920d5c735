use deckicon::{compose_from_source, fit_dimensions};
use image::{Rgba, RgbaImage};

#[test]
fn missing_and_undecodable_sources_yield_fallback() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.png");
    let img = compose_from_source(&missing, 96);
    assert_eq!(img.dimensions(), (96, 96));
    assert_eq!(*img.get_pixel(0, 0), Rgba([88, 101, 242, 255]), "solid fallback field");

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").unwrap();
    let img = compose_from_source(&garbage, 64);
    assert_eq!(img.dimensions(), (64, 64));
    assert_eq!(*img.get_pixel(0, 0), Rgba([88, 101, 242, 255]));
    // The centered glyph leaves white ink somewhere
    assert!(img.pixels().any(|p| p.0[0] > 240 && p.0[1] > 240 && p.0[2] > 240));
}

#[test]
fn wide_source_is_fit_and_centered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.png");
    RgbaImage::from_pixel(40, 20, Rgba([255, 0, 0, 255])).save(&path).unwrap();

    let img = compose_from_source(&path, 96);
    assert_eq!(img.dimensions(), (96, 96));
    // 40x20 scales to 96x48, occupying rows 24..72
    assert_eq!(img.get_pixel(48, 10).0[3], 0, "above the centered band stays transparent");
    assert_eq!(img.get_pixel(48, 90).0[3], 0, "below the centered band stays transparent");
    let mid = img.get_pixel(48, 48);
    assert!(mid.0[3] > 250, "band interior is opaque");
    assert!(mid.0[0] > 250 && mid.0[1] < 5, "band interior keeps the source color");
}

#[test]
fn tall_source_is_fit_and_centered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tall.png");
    RgbaImage::from_pixel(16, 64, Rgba([0, 200, 0, 255])).save(&path).unwrap();

    let img = compose_from_source(&path, 128);
    // 16x64 scales to 32x128, occupying columns 48..80
    assert_eq!(img.get_pixel(10, 64).0[3], 0);
    assert_eq!(img.get_pixel(120, 64).0[3], 0);
    assert!(img.get_pixel(64, 64).0[1] > 150);
}

#[test]
fn fit_dimensions_cover_the_themed_sizes() {
    for size in [32u32, 72, 96, 128, 144, 152, 192, 384, 512] {
        let (w, h) = fit_dimensions(300, 200, size);
        assert!(w <= size && h <= size);
        // Aspect 3:2 within rounding
        assert!((w as f32 / h as f32 - 1.5).abs() < 0.1, "{size}: {w}x{h}");
    }
}
