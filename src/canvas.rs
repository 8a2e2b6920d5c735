//! Supersampled SDF rasterization onto an RGBA canvas.
//!
//! Shapes are painted by evaluating a signed-distance function at sub-pixel
//! sample offsets and converting the clamped distance into edge coverage.
//! Coverage then drives a src-over blend, so successive draw calls layer the
//! way the icon scripts layered PIL draw operations.

use image::{Rgba, RgbaImage};

use crate::geom;

/// 2x2 sub-pixel sample grid (pixel-relative offsets).
pub const SAMPLE_OFFSETS: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Pixel rectangle a draw call needs to touch, in canvas coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    /// Square bounds of half side `extent` around a center, padded one pixel
    /// so anti-aliased edges are never clipped.
    pub fn around(cx: f32, cy: f32, extent: f32) -> Self {
        let e = extent + 1.0;
        Self { x0: cx - e, y0: cy - e, x1: cx + e, y1: cy + e }
    }

    pub fn of_points(pts: &[(f32, f32)]) -> Self {
        let mut b = Self { x0: f32::MAX, y0: f32::MAX, x1: -f32::MAX, y1: -f32::MAX };
        for &(x, y) in pts {
            b.x0 = b.x0.min(x);
            b.y0 = b.y0.min(y);
            b.x1 = b.x1.max(x);
            b.y1 = b.y1.max(y);
        }
        b.pad(1.0)
    }

    pub fn pad(self, p: f32) -> Self {
        Self { x0: self.x0 - p, y0: self.y0 - p, x1: self.x1 + p, y1: self.y1 + p }
    }
}

pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Transparent square canvas.
    pub fn new(size: u32) -> Self {
        Self { img: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])) }
    }

    pub fn from_image(img: RgbaImage) -> Self {
        Self { img }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Src-over blend of `color` at the given coverage. Out-of-bounds writes
    /// are silently dropped so callers never have to pre-clip.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let a = (color.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * (1.0 - a)).round() as u8;
        }
        let da = dst.0[3] as f32 / 255.0;
        dst.0[3] = ((a + da * (1.0 - a)) * 255.0).round() as u8;
    }

    /// Fills the region where `sdf` is negative, anti-aliased over the
    /// supersample grid. Distances are in pixels.
    pub fn fill<F>(&mut self, bounds: Bounds, color: Rgba<u8>, sdf: F)
    where
        F: Fn(f32, f32) -> f32,
    {
        self.fill_shaded(bounds, sdf, |_, _| color);
    }

    /// Like [`fill`](Self::fill) but the color is computed per pixel center
    /// (used for the gradient background disc).
    pub fn fill_shaded<F, S>(&mut self, bounds: Bounds, sdf: F, shade: S)
    where
        F: Fn(f32, f32) -> f32,
        S: Fn(f32, f32) -> Rgba<u8>,
    {
        if self.img.width() == 0 || self.img.height() == 0 {
            return;
        }
        let x_start = bounds.x0.floor().max(0.0) as i64;
        let y_start = bounds.y0.floor().max(0.0) as i64;
        let x_end = bounds.x1.ceil().min(self.img.width() as f32 - 1.0) as i64;
        let y_end = bounds.y1.ceil().min(self.img.height() as f32 - 1.0) as i64;
        for py in y_start..=y_end {
            for px in x_start..=x_end {
                let mut cov = 0.0;
                for (ox, oy) in SAMPLE_OFFSETS {
                    let d = sdf(px as f32 + ox, py as f32 + oy);
                    cov += (0.5 - d).clamp(0.0, 1.0);
                }
                cov /= SAMPLE_OFFSETS.len() as f32;
                if cov > 0.0 {
                    let color = shade(px as f32 + 0.5, py as f32 + 0.5);
                    self.blend(px, py, color, cov);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
        self.fill(Bounds::around(cx, cy, r), color, |x, y| geom::sd_circle(x, y, cx, cy, r));
    }

    pub fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, width: f32, color: Rgba<u8>) {
        let hw = width * 0.5;
        self.fill(Bounds::around(cx, cy, r + hw), color, |x, y| {
            geom::sd_circle(x, y, cx, cy, r).abs() - hw
        });
    }

    /// Disc whose color runs from `inner` at the center to `outer` at the rim.
    pub fn fill_radial_gradient(&mut self, cx: f32, cy: f32, r: f32, inner: [u8; 4], outer: [u8; 4]) {
        self.fill_shaded(
            Bounds::around(cx, cy, r),
            |x, y| geom::sd_circle(x, y, cx, cy, r),
            |x, y| crate::palette::lerp(inner, outer, (x - cx).hypot(y - cy) / r.max(1e-3)),
        );
    }

    /// Rounded rectangle, optionally tilted by rotating the sample point.
    pub fn fill_rounded_rect(
        &mut self,
        cx: f32,
        cy: f32,
        hw: f32,
        hh: f32,
        corner: f32,
        tilt_deg: f32,
        color: Rgba<u8>,
    ) {
        let extent = hw.hypot(hh);
        self.fill(Bounds::around(cx, cy, extent), color, move |x, y| {
            let (rx, ry) = geom::rotate_about(x, y, cx, cy, tilt_deg);
            geom::sd_rounded_box(rx, ry, cx, cy, hw, hh, corner)
        });
    }

    pub fn stroke_rounded_rect(
        &mut self,
        cx: f32,
        cy: f32,
        hw: f32,
        hh: f32,
        corner: f32,
        tilt_deg: f32,
        width: f32,
        color: Rgba<u8>,
    ) {
        let hwid = width * 0.5;
        let extent = hw.hypot(hh) + hwid;
        self.fill(Bounds::around(cx, cy, extent), color, move |x, y| {
            let (rx, ry) = geom::rotate_about(x, y, cx, cy, tilt_deg);
            geom::sd_rounded_box(rx, ry, cx, cy, hw, hh, corner).abs() - hwid
        });
    }

    /// Stroked line with round caps.
    pub fn fill_capsule(&mut self, ax: f32, ay: f32, bx: f32, by: f32, width: f32, color: Rgba<u8>) {
        let hw = width * 0.5;
        let b = Bounds::of_points(&[(ax, ay), (bx, by)]).pad(hw);
        self.fill(b, color, move |x, y| geom::sd_segment(x, y, ax, ay, bx, by) - hw);
    }

    /// Circular arc stroke with round caps. Angles are degrees in raster
    /// orientation (y down, 0 deg at three o'clock, increasing clockwise),
    /// matching the smile arcs in the icon scripts; requires
    /// `0 <= start < end <= 360`.
    pub fn stroke_arc(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        start_deg: f32,
        end_deg: f32,
        width: f32,
        color: Rgba<u8>,
    ) {
        let hw = width * 0.5;
        let (s0, c0) = start_deg.to_radians().sin_cos();
        let (s1, c1) = end_deg.to_radians().sin_cos();
        let cap_a = (cx + r * c0, cy + r * s0);
        let cap_b = (cx + r * c1, cy + r * s1);
        self.fill(Bounds::around(cx, cy, r + hw), color, move |x, y| {
            let mut ang = (y - cy).atan2(x - cx).to_degrees();
            if ang < 0.0 {
                ang += 360.0;
            }
            if ang >= start_deg && ang <= end_deg {
                ((x - cx).hypot(y - cy) - r).abs() - hw
            } else {
                let da = (x - cap_a.0).hypot(y - cap_a.1);
                let db = (x - cap_b.0).hypot(y - cap_b.1);
                da.min(db) - hw
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(4);
        let img = c.into_image();
        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn fill_circle_covers_center_not_corner() {
        let mut c = Canvas::new(16);
        c.fill_circle(8.0, 8.0, 5.0, Rgba([255, 0, 0, 255]));
        let img = c.into_image();
        assert_eq!(*img.get_pixel(8, 8), Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn out_of_bounds_blend_is_dropped() {
        let mut c = Canvas::new(4);
        c.blend(-1, 0, Rgba([255, 255, 255, 255]), 1.0);
        c.blend(0, 99, Rgba([255, 255, 255, 255]), 1.0);
        // Fill with bounds hanging off every edge
        c.fill_circle(0.0, 0.0, 10.0, Rgba([0, 255, 0, 255]));
        assert_eq!(c.into_image().dimensions(), (4, 4));
    }

    #[test]
    fn gradient_endpoints() {
        let mut c = Canvas::new(64);
        c.fill_radial_gradient(32.0, 32.0, 30.0, [0, 0, 0, 255], [255, 255, 255, 255]);
        let img = c.into_image();
        let center = img.get_pixel(32, 32);
        let edge = img.get_pixel(32, 4); // near the rim, still inside
        assert!(center.0[0] < 16, "center should be near the inner color");
        assert!(edge.0[0] > 180, "rim should be near the outer color");
    }

    #[test]
    fn zero_size_canvas_draws_nothing() {
        let mut c = Canvas::new(0);
        c.fill_circle(0.0, 0.0, 5.0, Rgba([255, 0, 0, 255]));
        assert_eq!(c.into_image().dimensions(), (0, 0));
    }
}
