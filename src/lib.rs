//! Procedural app-icon rendering: card, dice and Joker motifs drawn at any
//! pixel size, plus fit-inside composition from an existing source image.

pub mod canvas;
pub mod compose;
pub mod geom;
pub mod palette;
pub mod render;
pub mod text;
pub mod theme;

// Curated re-exports
pub use compose::{compose_from_source, fallback_icon, fit_dimensions};
pub use render::{stroke_width, IconRenderer, Layer};
pub use theme::{Theme, Thresholds};
