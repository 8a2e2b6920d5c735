//! Centralized icon color palettes & helpers.
//! Single source of truth for the built-in themes and the fallback icon.

use image::Rgba;

// Card/dice theme (blue deck).
pub const DECK_PRIMARY: [u8; 4] = [30, 64, 175, 255];
pub const DECK_SECONDARY: [u8; 4] = [59, 130, 246, 255];
pub const DECK_ACCENT: [u8; 4] = [255, 255, 255, 255];
pub const DECK_CARD: [u8; 4] = [248, 250, 252, 255];

// Joker face theme (warm palette).
pub const JOKER_BG: [u8; 4] = [45, 45, 60, 255];
pub const JOKER_FACE: [u8; 4] = [250, 245, 240, 255];
pub const JOKER_SMILE: [u8; 4] = [220, 20, 60, 255];
pub const JOKER_EYE: [u8; 4] = [70, 130, 180, 255];
pub const JOKER_GOLD: [u8; 4] = [255, 215, 0, 255];

/// Solid field behind the fallback glyph when a source image cannot be used.
pub const FALLBACK_FIELD: [u8; 4] = [88, 101, 242, 255];

pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Suit colors in heart, diamond, spade, club order.
pub const SUIT_COLORS: [[u8; 4]; 4] = [JOKER_SMILE, JOKER_GOLD, JOKER_BG, JOKER_EYE];

#[inline]
pub fn rgba(c: [u8; 4]) -> Rgba<u8> {
    Rgba(c)
}

/// Returns a suit color for arbitrary index, wrapping around the table.
#[inline]
pub fn suit_color_for_index(i: usize) -> [u8; 4] {
    SUIT_COLORS[i % SUIT_COLORS.len()]
}

/// Channel-wise linear interpolation, `t` clamped to [0, 1].
pub fn lerp(a: [u8; 4], b: [u8; 4], t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for (i, o) in out.iter_mut().enumerate() {
        *o = (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    }
    Rgba(out)
}
