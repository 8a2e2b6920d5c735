//! Signed-distance primitives used by the canvas rasterizer.
//! Convention: negative inside, positive outside, distances in pixels.

use std::f32::consts::FRAC_1_SQRT_2;

#[inline]
pub fn sd_circle(x: f32, y: f32, cx: f32, cy: f32, r: f32) -> f32 {
    (x - cx).hypot(y - cy) - r
}

/// Box SDF centered at (cx, cy) with half extents (hw, hh).
pub fn sd_box(x: f32, y: f32, cx: f32, cy: f32, hw: f32, hh: f32) -> f32 {
    let qx = (x - cx).abs() - hw;
    let qy = (y - cy).abs() - hh;
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside
}

/// Rounded box: box shrunk by the corner radius, then inflated back.
pub fn sd_rounded_box(x: f32, y: f32, cx: f32, cy: f32, hw: f32, hh: f32, cr: f32) -> f32 {
    let cr = cr.min(hw).min(hh);
    sd_box(x, y, cx, cy, hw - cr, hh - cr) - cr
}

/// Unsigned distance to the segment (ax, ay)-(bx, by).
pub fn sd_segment(x: f32, y: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let vx = bx - ax;
    let vy = by - ay;
    let wx = x - ax;
    let wy = y - ay;
    let ll = vx * vx + vy * vy;
    let t = if ll <= 1e-6 { 0.0 } else { ((vx * wx + vy * wy) / ll).clamp(0.0, 1.0) };
    (wx - vx * t).hypot(wy - vy * t)
}

/// Rotates the sample point about (cx, cy) by `deg` (clockwise in raster space).
/// Evaluating a shape SDF at the rotated point renders the shape tilted the
/// opposite way, so callers pass the desired tilt directly.
pub fn rotate_about(x: f32, y: f32, cx: f32, cy: f32, deg: f32) -> (f32, f32) {
    let a = deg.to_radians();
    let (s, c) = a.sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    (cx + dx * c - dy * s, cy + dx * s + dy * c)
}

/// Even-odd polygon SDF: parity for the inside test, min distance to edges
/// for the magnitude.
pub fn sd_polygon(x: f32, y: f32, pts: &[(f32, f32)]) -> f32 {
    if pts.len() < 3 {
        return f32::MAX;
    }
    let mut inside = false;
    let mut min_d = f32::MAX;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (ax, ay) = pts[j];
        let (bx, by) = pts[i];
        if ((ay > y) != (by > y)) && (x < (bx - ax) * (y - ay) / (by - ay + 1e-6) + ax) {
            inside = !inside;
        }
        min_d = min_d.min(sd_segment(x, y, ax, ay, bx, by));
        j = i;
    }
    if inside {
        -min_d
    } else {
        min_d
    }
}

// Card-suit shapes. Each is centered at (cx, cy) and fits a box of side `s`.
// Unions are min() over the component SDFs.

/// Heart: two lobes plus a triangle tip.
pub fn sd_heart(x: f32, y: f32, cx: f32, cy: f32, s: f32) -> f32 {
    let lobe_r = s * 0.27;
    let lobe_y = cy - s * 0.125;
    let left = sd_circle(x, y, cx - s * 0.25, lobe_y, lobe_r);
    let right = sd_circle(x, y, cx + s * 0.25, lobe_y, lobe_r);
    let tip = sd_polygon(
        x,
        y,
        &[
            (cx - s * 0.5, cy - s / 24.0),
            (cx, cy + s * 0.5),
            (cx + s * 0.5, cy - s / 24.0),
        ],
    );
    left.min(right).min(tip)
}

/// Diamond: L1 ball with corners at s/2, rescaled toward Euclidean distance.
pub fn sd_diamond(x: f32, y: f32, cx: f32, cy: f32, s: f32) -> f32 {
    (((x - cx).abs() + (y - cy).abs()) - s * 0.5) * FRAC_1_SQRT_2
}

/// Spade: the five-point silhouette from the icon scripts.
pub fn sd_spade(x: f32, y: f32, cx: f32, cy: f32, s: f32) -> f32 {
    sd_polygon(
        x,
        y,
        &[
            (cx, cy - s * 0.5),
            (cx - s / 3.0, cy),
            (cx - s / 6.0, cy + s * 0.25),
            (cx + s / 6.0, cy + s * 0.25),
            (cx + s / 3.0, cy),
        ],
    )
}

/// Club: three leaves plus a stem.
pub fn sd_club(x: f32, y: f32, cx: f32, cy: f32, s: f32) -> f32 {
    let r = s * 0.2;
    let top = sd_circle(x, y, cx, cy - s / 3.0, r);
    let left = sd_circle(x, y, cx - s / 3.0, cy, r);
    let right = sd_circle(x, y, cx + s / 3.0, cy, r);
    let stem = sd_box(x, y, cx, cy + s / 6.0, s * 0.1, s / 6.0);
    top.min(left).min(right).min(stem)
}
