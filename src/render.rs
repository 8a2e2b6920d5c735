//! Size-parametric icon rendering.
//!
//! One renderer covers every theme: it computes a layer plan from the theme
//! and the requested size, then rasterizes the plan onto a transparent
//! canvas. Every coordinate is derived as a fraction of the canvas size, so
//! the composition holds at any requested size; decorative layers drop out
//! below their configured thresholds instead of rendering illegibly.

use image::RgbaImage;
use std::path::Path;

use crate::canvas::Canvas;
use crate::geom;
use crate::palette::rgba;
use crate::text::{self, FontSource};
use crate::theme::Theme;

/// One entry of the render plan, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Face,
    Cards,
    CardRanks,
    Suits,
    Dice,
    Caption,
}

/// Stroke width as `size / divisor`, floor-clamped so outlines stay visible
/// on tiny canvases.
pub fn stroke_width(size: u32, divisor: u32, min: f32) -> f32 {
    (size as f32 / divisor.max(1) as f32).max(min)
}

pub struct IconRenderer {
    theme: Theme,
    font: FontSource,
}

impl IconRenderer {
    /// Renderer with built-in glyphs for any text layers.
    pub fn new(theme: Theme) -> Self {
        Self { theme, font: FontSource::Builtin }
    }

    /// Renderer that rasterizes text with the font at `path`; degrades to the
    /// built-in glyphs when the font cannot be loaded.
    pub fn with_font(theme: Theme, path: Option<&Path>) -> Self {
        Self { theme, font: FontSource::load(path) }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The layers that `render(size)` will paint, in order. Threshold gating
    /// lives here so it can be asserted on without probing pixels.
    pub fn plan(&self, size: u32) -> Vec<Layer> {
        let t = &self.theme;
        let mut layers = Vec::new();
        if t.background.is_some() {
            layers.push(Layer::Background);
        }
        if t.face.is_some() {
            layers.push(Layer::Face);
        }
        if t.cards.is_some() {
            layers.push(Layer::Cards);
            if size >= t.thresholds.card_ranks {
                layers.push(Layer::CardRanks);
            }
        }
        if t.suits.is_some() && size >= t.thresholds.suits {
            layers.push(Layer::Suits);
        }
        if t.dice.is_some() && size >= t.thresholds.dice {
            layers.push(Layer::Dice);
        }
        if t.caption.is_some() && size >= t.thresholds.caption {
            layers.push(Layer::Caption);
        }
        layers
    }

    /// Renders the icon at `size x size` pixels. Infallible: any positive
    /// size produces an image, smaller sizes simply carry fewer layers.
    pub fn render(&self, size: u32) -> RgbaImage {
        let mut canvas = Canvas::new(size);
        let s = size as f32;
        let center = s * 0.5;
        for layer in self.plan(size) {
            match layer {
                Layer::Background => self.draw_background(&mut canvas, s, center),
                Layer::Face => self.draw_face(&mut canvas, size, s, center),
                Layer::Cards => self.draw_cards(&mut canvas, size, s, center, false),
                Layer::CardRanks => self.draw_cards(&mut canvas, size, s, center, true),
                Layer::Suits => self.draw_suits(&mut canvas, s, center),
                Layer::Dice => self.draw_dice(&mut canvas, size, s, center),
                Layer::Caption => self.draw_caption(&mut canvas, s, center),
            }
        }
        canvas.into_image()
    }

    fn draw_background(&self, canvas: &mut Canvas, s: f32, center: f32) {
        let Some(bg) = self.theme.background.as_ref() else { return };
        let r = bg.radius_frac * s;
        canvas.fill_radial_gradient(center, center, r, bg.inner, bg.outer);
        let w = stroke_width(s as u32, bg.outline_divisor, 1.0);
        canvas.stroke_circle(center, center, r, w, rgba(bg.outline));
    }

    fn draw_face(&self, canvas: &mut Canvas, size: u32, s: f32, center: f32) {
        let Some(face) = self.theme.face.as_ref() else { return };
        let r = face.radius_frac * s;
        let halo = (face.halo_frac * s).max(1.0);
        canvas.fill_circle(center, center, r + halo, rgba(face.halo));
        canvas.fill_circle(center, center, r, rgba(face.fill));
        canvas.stroke_circle(center, center, r, stroke_width(size, face.outline_divisor, 2.0), rgba(face.outline));

        // Smile: lower arc, friendlier than a full half circle
        let smile_r = r * 0.38;
        canvas.stroke_arc(
            center,
            center + r * 0.05,
            smile_r,
            20.0,
            160.0,
            stroke_width(size, 40, 3.0),
            rgba(face.smile),
        );

        let eye_r = (s / 20.0).max(3.0);
        let eye_y = center - r * 0.15;
        for side in [-1.0f32, 1.0] {
            let ex = center + side * r * 0.25;
            canvas.fill_circle(ex, eye_y, eye_r, rgba(face.eye));
            canvas.fill_circle(ex, eye_y, (eye_r / 3.0).max(1.0), rgba(face.highlight));
        }
    }

    fn draw_cards(&self, canvas: &mut Canvas, size: u32, s: f32, center: f32, ranks_pass: bool) {
        let Some(cards) = self.theme.cards.as_ref() else { return };
        let hw = cards.width_frac * s * 0.5;
        let hh = cards.height_frac * s * 0.5;
        let corner = stroke_width(size, cards.corner_divisor, 1.0);
        let outline_w = stroke_width(size, 128, 1.0);
        for (i, &(ox, oy)) in cards.offsets.iter().enumerate() {
            let cx = center + ox * s;
            let cy = center + oy * s;
            let tilt = cards.tilts.get(i % cards.tilts.len().max(1)).copied().unwrap_or(0.0);
            if ranks_pass {
                if let Some(&rank) = cards.ranks.get(i % cards.ranks.len().max(1)) {
                    let px = (s / 16.0).max(8.0);
                    let mut buf = [0u8; 4];
                    let rank_str: &str = rank.encode_utf8(&mut buf);
                    text::draw_text(canvas, &self.font, rank_str, cx, cy, px, rgba(cards.rank_color));
                }
            } else {
                canvas.fill_rounded_rect(cx, cy, hw, hh, corner, tilt, rgba(cards.fill));
                canvas.stroke_rounded_rect(cx, cy, hw, hh, corner, tilt, outline_w, rgba(cards.outline));
            }
        }
    }

    fn draw_suits(&self, canvas: &mut Canvas, s: f32, center: f32) {
        let Some(suits) = self.theme.suits.as_ref() else { return };
        let dist = suits.distance_frac * s;
        let glyph = (s / suits.size_divisor.max(1) as f32).max(suits.min_size);
        let b = |cx: f32, cy: f32| crate::canvas::Bounds::around(cx, cy, glyph);
        // Heart top, spade bottom, diamond left, club right
        let (hx, hy) = (center, center - dist);
        canvas.fill(b(hx, hy), rgba(suits.heart), move |x, y| geom::sd_heart(x, y, hx, hy, glyph));
        let (sx, sy) = (center, center + dist);
        canvas.fill(b(sx, sy), rgba(suits.spade), move |x, y| geom::sd_spade(x, y, sx, sy, glyph));
        let (dx, dy) = (center - dist, center);
        canvas.fill(b(dx, dy), rgba(suits.diamond), move |x, y| geom::sd_diamond(x, y, dx, dy, glyph));
        let (cx, cy) = (center + dist, center);
        canvas.fill(b(cx, cy), rgba(suits.club), move |x, y| geom::sd_club(x, y, cx, cy, glyph));
    }

    fn draw_dice(&self, canvas: &mut Canvas, size: u32, s: f32, center: f32) {
        let Some(dice) = self.theme.dice.as_ref() else { return };
        let die = s / dice.size_divisor.max(1) as f32;
        let x0 = center + dice.offset_frac * s;
        let y0 = center + dice.offset_frac * s;
        let half = die * 0.5;
        let corner = stroke_width(size, 64, 1.0);
        canvas.fill_rounded_rect(x0 + half, y0 + half, half, half, corner, 0.0, rgba(dice.fill));
        canvas.stroke_rounded_rect(
            x0 + half,
            y0 + half,
            half,
            half,
            corner,
            0.0,
            stroke_width(size, 128, 1.0),
            rgba(dice.outline),
        );

        let spacing = die / (dice.pip_cols.max(dice.pip_rows) + 1) as f32;
        let pip_r = stroke_width(size, 128, 1.0);
        for row in 0..dice.pip_rows {
            for col in 0..dice.pip_cols {
                let px = x0 + spacing * (col + 1) as f32;
                let py = y0 + spacing * (row + 1) as f32 + (die - spacing * (dice.pip_rows + 1) as f32) * 0.5;
                canvas.fill_circle(px, py, pip_r, rgba(dice.pip));
            }
        }
    }

    fn draw_caption(&self, canvas: &mut Canvas, s: f32, center: f32) {
        let Some(caption) = self.theme.caption.as_ref() else { return };
        let px = (s / caption.height_divisor.max(1) as f32).max(8.0);
        text::draw_caption_outlined(
            canvas,
            &self.font,
            &caption.text,
            center,
            caption.y_frac * s,
            px,
            rgba(caption.fill),
            rgba(caption.outline),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_width_floor_clamp() {
        assert_eq!(stroke_width(512, 64, 1.0), 8.0);
        assert_eq!(stroke_width(16, 64, 1.0), 1.0);
        assert_eq!(stroke_width(1, 128, 1.0), 1.0);
        assert_eq!(stroke_width(8, 0, 1.0), 8.0); // divisor floor
        for size in [1, 7, 32, 72, 512] {
            assert!(stroke_width(size, 128, 1.0) >= 1.0);
        }
    }

    #[test]
    fn plan_gates_layers_by_threshold() {
        let r = IconRenderer::new(Theme::rummy());
        let small = r.plan(72);
        assert!(small.contains(&Layer::Background));
        assert!(small.contains(&Layer::Cards));
        assert!(small.contains(&Layer::CardRanks), "72 >= 64 keeps rank letters");
        assert!(!small.contains(&Layer::Suits), "suits need 96");
        assert!(!small.contains(&Layer::Dice), "dice need 128");
        assert!(!small.contains(&Layer::Caption));

        let large = r.plan(128);
        assert!(large.contains(&Layer::Suits));
        assert!(large.contains(&Layer::Dice));
        assert!(large.contains(&Layer::Caption));
    }

    #[test]
    fn plan_threshold_boundaries_are_inclusive() {
        let r = IconRenderer::new(Theme::rummy());
        assert!(!r.plan(95).contains(&Layer::Suits));
        assert!(r.plan(96).contains(&Layer::Suits));
        assert!(!r.plan(63).contains(&Layer::CardRanks));
        assert!(r.plan(64).contains(&Layer::CardRanks));
    }

    #[test]
    fn joker_plan_has_face_no_cards() {
        let r = IconRenderer::new(Theme::joker());
        let plan = r.plan(192);
        assert!(plan.contains(&Layer::Face));
        assert!(plan.contains(&Layer::Suits));
        assert!(!plan.contains(&Layer::Cards));
        assert!(!plan.contains(&Layer::Background));
    }

    #[test]
    fn render_dimensions_match_request() {
        let r = IconRenderer::new(Theme::rummy());
        for size in [1u32, 7, 32, 72, 100, 152] {
            let img = r.render(size);
            assert_eq!(img.dimensions(), (size, size), "render({size}) must be {size}x{size}");
        }
    }

    #[test]
    fn off_list_sizes_degrade_not_fail() {
        let r = IconRenderer::new(Theme::rummy());
        let img = r.render(33);
        assert_eq!(img.dimensions(), (33, 33));
        // Background disc still present
        assert!(img.get_pixel(16, 16).0[3] > 0);
    }
}
