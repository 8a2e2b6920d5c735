//! Theme descriptors for the parametric icon renderer.
//!
//! A [`Theme`] captures everything that differed between the old per-theme
//! icon scripts: palette, which decorative layers exist, the minimum-size
//! thresholds gating them, and the proportionality constants. All lengths are
//! fractions of the canvas size; nothing in a theme is an absolute pixel
//! value.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::palette;

/// Minimum canvas sizes below which a decorative layer is skipped. The values
/// are empirically chosen per theme (strokes and glyphs go sub-pixel below
/// them); they are configuration, not derived quantities.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Thresholds {
    pub card_ranks: u32,
    pub suits: u32,
    pub dice: u32,
    pub caption: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { card_ranks: 64, suits: 96, dice: 128, caption: 128 }
    }
}

/// Gradient background disc with an outlined rim.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundStyle {
    pub radius_frac: f32,
    pub inner: [u8; 4],
    pub outer: [u8; 4],
    pub outline: [u8; 4],
    pub outline_divisor: u32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            radius_frac: 0.45,
            inner: palette::DECK_SECONDARY,
            outer: palette::DECK_PRIMARY,
            outline: palette::DECK_ACCENT,
            outline_divisor: 64,
        }
    }
}

/// Smiling face (Joker theme): halo disc, outlined face, smile arc, eyes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FaceStyle {
    pub radius_frac: f32,
    /// Halo inset as a fraction of the canvas size. The original script used
    /// an absolute 8 px here, which broke proportional scaling; the fraction
    /// keeps the halo visible at every size.
    pub halo_frac: f32,
    pub halo: [u8; 4],
    pub fill: [u8; 4],
    pub outline: [u8; 4],
    pub outline_divisor: u32,
    pub smile: [u8; 4],
    pub eye: [u8; 4],
    pub highlight: [u8; 4],
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            radius_frac: 0.38,
            halo_frac: 0.03,
            halo: palette::JOKER_BG,
            fill: palette::JOKER_FACE,
            outline: palette::JOKER_GOLD,
            outline_divisor: 80,
            smile: palette::JOKER_SMILE,
            eye: palette::JOKER_EYE,
            highlight: palette::WHITE,
        }
    }
}

/// Fanned mini playing cards with rank letters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CardStyle {
    pub width_frac: f32,
    pub height_frac: f32,
    pub corner_divisor: u32,
    pub fill: [u8; 4],
    pub outline: [u8; 4],
    pub rank_color: [u8; 4],
    pub ranks: Vec<char>,
    /// Card-center offsets from the canvas center, as fractions of size.
    pub offsets: Vec<(f32, f32)>,
    /// Tilt per card in degrees, cycled over the offsets.
    pub tilts: Vec<f32>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            width_frac: 1.0 / 6.0,
            height_frac: 0.25,
            corner_divisor: 32,
            fill: palette::DECK_CARD,
            outline: palette::DECK_ACCENT,
            rank_color: palette::DECK_PRIMARY,
            ranks: vec!['A', 'K', 'Q'],
            offsets: vec![(-0.125, 0.0), (0.125, 0.0), (0.0, 0.125)],
            tilts: vec![-12.0, 12.0, 0.0],
        }
    }
}

/// Four suit glyphs placed around the center (heart top, spade bottom,
/// diamond left, club right).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SuitStyle {
    /// Anchor distance from the canvas center, as a fraction of size.
    pub distance_frac: f32,
    pub size_divisor: u32,
    pub min_size: f32,
    pub heart: [u8; 4],
    pub diamond: [u8; 4],
    pub spade: [u8; 4],
    pub club: [u8; 4],
}

impl Default for SuitStyle {
    fn default() -> Self {
        Self {
            distance_frac: 0.25,
            size_divisor: 20,
            min_size: 6.0,
            heart: palette::suit_color_for_index(0),
            diamond: palette::suit_color_for_index(1),
            spade: palette::suit_color_for_index(2),
            club: palette::suit_color_for_index(3),
        }
    }
}

/// Single die showing a pip grid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DiceStyle {
    /// Top-left corner offset from the canvas center, as a fraction of size.
    pub offset_frac: f32,
    pub size_divisor: u32,
    pub fill: [u8; 4],
    pub outline: [u8; 4],
    pub pip: [u8; 4],
    pub pip_rows: u32,
    pub pip_cols: u32,
}

impl Default for DiceStyle {
    fn default() -> Self {
        Self {
            offset_frac: 1.0 / 6.0,
            size_divisor: 12,
            fill: palette::DECK_ACCENT,
            outline: palette::DECK_PRIMARY,
            pip: palette::DECK_PRIMARY,
            // A six
            pip_rows: 2,
            pip_cols: 3,
        }
    }
}

/// Outlined caption near the bottom edge.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CaptionStyle {
    pub text: String,
    pub fill: [u8; 4],
    pub outline: [u8; 4],
    pub height_divisor: u32,
    /// Vertical center of the caption as a fraction of size.
    pub y_frac: f32,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            text: "RUMMY".into(),
            fill: palette::DECK_ACCENT,
            outline: palette::DECK_PRIMARY,
            height_divisor: 9,
            y_frac: 0.86,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub background: Option<BackgroundStyle>,
    pub face: Option<FaceStyle>,
    pub cards: Option<CardStyle>,
    pub suits: Option<SuitStyle>,
    pub dice: Option<DiceStyle>,
    pub caption: Option<CaptionStyle>,
    pub thresholds: Thresholds,
}

impl Default for Theme {
    fn default() -> Self {
        Self::rummy()
    }
}

impl Theme {
    /// Blue deck theme: gradient disc, fanned cards, a die, suits and a
    /// caption.
    pub fn rummy() -> Self {
        Self {
            name: "rummy".into(),
            background: Some(BackgroundStyle::default()),
            face: None,
            cards: Some(CardStyle::default()),
            suits: Some(SuitStyle { distance_frac: 0.34, ..SuitStyle::default() }),
            dice: Some(DiceStyle::default()),
            caption: Some(CaptionStyle::default()),
            thresholds: Thresholds::default(),
        }
    }

    /// Friendly Joker face with suit glyphs around it.
    pub fn joker() -> Self {
        Self {
            name: "joker".into(),
            background: None,
            face: Some(FaceStyle::default()),
            cards: None,
            suits: Some(SuitStyle::default()),
            dice: None,
            caption: None,
            thresholds: Thresholds::default(),
        }
    }

    /// Looks up a built-in theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "rummy" => Some(Self::rummy()),
            "joker" => Some(Self::joker()),
            _ => None,
        }
    }

    /// Loads a theme from a RON file. Missing fields fall back to the rummy
    /// defaults via `serde(default)`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("read theme {}: {e}", path.as_ref().display()))?;
        ron::from_str(&data).map_err(|e| anyhow::anyhow!("parse theme RON: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rummy() {
        let t = Theme::default();
        assert_eq!(t.name, "rummy");
        assert!(t.background.is_some() && t.cards.is_some() && t.dice.is_some());
        assert!(t.face.is_none());
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(Theme::builtin("joker").unwrap().name, "joker");
        assert!(Theme::builtin("tarot").is_none());
    }

    #[test]
    fn partial_ron_overlays_defaults() {
        let t: Theme = ron::from_str(r#"(name: "custom", thresholds: (suits: 48))"#).unwrap();
        assert_eq!(t.name, "custom");
        assert_eq!(t.thresholds.suits, 48);
        // Untouched fields keep the rummy defaults
        assert_eq!(t.thresholds.dice, 128);
        assert!(t.cards.is_some());
    }

    #[test]
    fn suit_defaults_follow_palette_table() {
        let s = SuitStyle::default();
        assert_eq!([s.heart, s.diamond, s.spade, s.club], palette::SUIT_COLORS);
    }

    #[test]
    fn joker_halo_is_proportional() {
        let f = Theme::joker().face.unwrap();
        assert!(f.halo_frac > 0.0 && f.halo_frac < 0.1);
    }
}
