//! Icon composition from an existing source image.
//!
//! The source is fit inside the square canvas with a uniform scale (aspect
//! ratio preserved) and centered. A source that cannot be read or decoded is
//! replaced by a deterministic fallback icon so one bad file never aborts a
//! batch.

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use log::warn;
use std::path::Path;

use crate::canvas::Canvas;
use crate::palette;
use crate::text::{self, FontSource};

/// Scaled dimensions for fitting a `w x h` source inside a `size` square:
/// `min(size/w, size/h)` on both axes, truncated, never exceeding the canvas.
/// A zero canvas holds nothing and yields `(0, 0)`.
pub fn fit_dimensions(w: u32, h: u32, size: u32) -> (u32, u32) {
    if size == 0 {
        return (0, 0);
    }
    let scale = (size as f32 / w.max(1) as f32).min(size as f32 / h.max(1) as f32);
    let nw = ((w as f32 * scale) as u32).clamp(1, size);
    let nh = ((h as f32 * scale) as u32).clamp(1, size);
    (nw, nh)
}

/// Builds a `size x size` icon from the raster file at `path`. Decode
/// failures degrade to [`fallback_icon`] instead of propagating.
pub fn compose_from_source(path: &Path, size: u32) -> RgbaImage {
    match image::open(path) {
        Ok(src) => compose_from_image(&src.to_rgba8(), size),
        Err(e) => {
            warn!("source {} not usable ({e}), rendering fallback icon", path.display());
            fallback_icon(size)
        }
    }
}

/// Fit-inside composition of an already-decoded source.
pub fn compose_from_image(src: &RgbaImage, size: u32) -> RgbaImage {
    let (sw, sh) = src.dimensions();
    if sw == 0 || sh == 0 || size == 0 {
        warn!("degenerate source ({sw}x{sh}), rendering fallback icon");
        return fallback_icon(size);
    }
    let (nw, nh) = fit_dimensions(sw, sh, size);
    let resized = imageops::resize(src, nw, nh, FilterType::Lanczos3);
    let mut out = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let ox = (size - nw) / 2;
    let oy = (size - nh) / 2;
    imageops::overlay(&mut out, &resized, ox as i64, oy as i64);
    out
}

/// Deterministic substitute icon: solid brand-color field with one centered
/// glyph. Used whenever the primary source cannot be decoded.
pub fn fallback_icon(size: u32) -> RgbaImage {
    let mut canvas = Canvas::from_image(RgbaImage::from_pixel(size, size, Rgba(palette::FALLBACK_FIELD)));
    let px = (size as f32 / 3.0).max(16.0);
    let center = size as f32 * 0.5;
    text::draw_text(&mut canvas, &FontSource::Builtin, "R", center, center, px, Rgba(palette::WHITE));
    canvas.into_image()
}
