//! Caption and rank-letter rendering.
//!
//! Glyphs come from a TrueType font when one is available and decodable;
//! otherwise from a small built-in vector stroke set. Loading never fails,
//! it only degrades (and logs), so a missing font can never sink a render.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::Rgba;
use log::warn;
use std::{fs, path::Path};

use crate::canvas::Canvas;

/// Where glyphs come from for one renderer instance.
pub enum FontSource {
    Truetype(FontVec),
    Builtin,
}

impl FontSource {
    /// Loads a TTF/OTF from disk, degrading to the built-in strokes when the
    /// path is absent, unreadable or not a parsable font.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Builtin;
        };
        match fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => Self::Truetype(font),
                Err(e) => {
                    warn!("font {} not decodable ({e}), using builtin glyphs", path.display());
                    Self::Builtin
                }
            },
            Err(e) => {
                warn!("font {} not readable ({e}), using builtin glyphs", path.display());
                Self::Builtin
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

/// Draws `text` horizontally centered at (cx, cy) with the given pixel
/// height.
pub fn draw_text(canvas: &mut Canvas, font: &FontSource, text: &str, cx: f32, cy: f32, px: f32, color: Rgba<u8>) {
    match font {
        FontSource::Truetype(f) => draw_truetype(canvas, f, text, cx, cy, px, color),
        FontSource::Builtin => draw_builtin(canvas, text, cx, cy, px, color),
    }
}

/// Stroked caption: the text is drawn at eight one-step offsets in the
/// outline color, then once more in the fill color. The drawing layer has no
/// native stroke-text, so the outline is produced by oversampling.
pub fn draw_caption_outlined(
    canvas: &mut Canvas,
    font: &FontSource,
    text: &str,
    cx: f32,
    cy: f32,
    px: f32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let step = (px / 24.0).max(1.0);
    for dy in [-1.0f32, 0.0, 1.0] {
        for dx in [-1.0f32, 0.0, 1.0] {
            if dx == 0.0 && dy == 0.0 {
                continue;
            }
            draw_text(canvas, font, text, cx + dx * step, cy + dy * step, px, outline);
        }
    }
    draw_text(canvas, font, text, cx, cy, px, fill);
}

fn draw_truetype(canvas: &mut Canvas, font: &FontVec, text: &str, cx: f32, cy: f32, px: f32, color: Rgba<u8>) {
    let scaled = font.as_scaled(PxScale::from(px));
    let width: f32 = text.chars().map(|c| scaled.h_advance(font.glyph_id(c))).sum();
    let mut pen_x = cx - width * 0.5;
    let baseline = cy + (scaled.ascent() + scaled.descent()) * 0.5;
    for c in text.chars() {
        let gid = font.glyph_id(c);
        let glyph = gid.with_scale_and_position(px, ab_glyph::point(pen_x, baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let b = outlined.px_bounds();
            outlined.draw(|gx, gy, cov| {
                canvas.blend(b.min.x as i64 + gx as i64, b.min.y as i64 + gy as i64, color, cov);
            });
        }
        pen_x += scaled.h_advance(gid);
    }
}

// Built-in glyphs: per-character stroke lists in a unit box, x and y in
// [-0.5, 0.5], y down. Crude block letters in the spirit of the old SDF
// placeholder glyphs; they cover the caption/rank characters the built-in
// themes use, everything else renders as an outlined box.

#[derive(Clone, Copy)]
enum Stroke {
    Seg((f32, f32), (f32, f32)),
    Ring((f32, f32), f32),
}

const BUILTIN_ADVANCE: f32 = 0.95;
const BUILTIN_STROKE_WIDTH: f32 = 0.16;

fn builtin_strokes(c: char) -> &'static [Stroke] {
    use Stroke::*;
    match c.to_ascii_uppercase() {
        'A' => &[
            Seg((-0.4, 0.5), (0.0, -0.5)),
            Seg((0.0, -0.5), (0.4, 0.5)),
            Seg((-0.22, 0.12), (0.22, 0.12)),
        ],
        'K' => &[
            Seg((-0.35, -0.5), (-0.35, 0.5)),
            Seg((0.35, -0.5), (-0.35, 0.05)),
            Seg((-0.12, -0.1), (0.35, 0.5)),
        ],
        'M' => &[
            Seg((-0.4, 0.5), (-0.4, -0.5)),
            Seg((-0.4, -0.5), (0.0, 0.1)),
            Seg((0.0, 0.1), (0.4, -0.5)),
            Seg((0.4, -0.5), (0.4, 0.5)),
        ],
        'Q' => &[Ring((0.0, 0.0), 0.42), Seg((0.15, 0.2), (0.45, 0.5))],
        'R' => &[
            Seg((-0.35, -0.5), (-0.35, 0.5)),
            Ring((-0.02, -0.24), 0.26),
            Seg((-0.1, 0.02), (0.35, 0.5)),
        ],
        'U' => &[
            Seg((-0.35, -0.5), (-0.35, 0.25)),
            Seg((-0.35, 0.25), (-0.15, 0.5)),
            Seg((-0.15, 0.5), (0.15, 0.5)),
            Seg((0.15, 0.5), (0.35, 0.25)),
            Seg((0.35, 0.25), (0.35, -0.5)),
        ],
        'Y' => &[
            Seg((-0.35, -0.5), (0.0, -0.05)),
            Seg((0.35, -0.5), (0.0, -0.05)),
            Seg((0.0, -0.05), (0.0, 0.5)),
        ],
        // Fallback: outlined box
        _ => &[
            Seg((-0.35, -0.5), (0.35, -0.5)),
            Seg((0.35, -0.5), (0.35, 0.5)),
            Seg((0.35, 0.5), (-0.35, 0.5)),
            Seg((-0.35, 0.5), (-0.35, -0.5)),
        ],
    }
}

fn draw_builtin(canvas: &mut Canvas, text: &str, cx: f32, cy: f32, px: f32, color: Rgba<u8>) {
    let count = text.chars().count();
    if count == 0 || px <= 0.0 {
        return;
    }
    let advance = BUILTIN_ADVANCE * px;
    let width = advance * count as f32;
    let stroke_w = (BUILTIN_STROKE_WIDTH * px).max(1.0);
    let mut pen_x = cx - width * 0.5 + advance * 0.5;
    for c in text.chars() {
        for stroke in builtin_strokes(c) {
            match *stroke {
                Stroke::Seg((ax, ay), (bx, by)) => canvas.fill_capsule(
                    pen_x + ax * px,
                    cy + ay * px,
                    pen_x + bx * px,
                    cy + by * px,
                    stroke_w,
                    color,
                ),
                Stroke::Ring((rx, ry), r) => {
                    canvas.stroke_circle(pen_x + rx * px, cy + ry * px, r * px, stroke_w, color)
                }
            }
        }
        pen_x += advance;
    }
}
