#![deny(unsafe_code)]
//! Perceptual color engine for the basemap renderer.
//!
//! Converts between OKLCH and 8-bit sRGB in both directions. Every color
//! produced by [`oklch_to_srgb8`] is displayable: out-of-gamut requests are
//! mapped back into sRGB by reducing chroma. [`ColorValue`] parses the
//! `oklch(L C H)` / `#rrggbb` strings found in hand-written palettes.

pub mod color;
pub mod error;
mod log;
pub mod value;

pub use color::{
    oklch_to_srgb8, oklch_to_srgb8_batch, srgb8_to_oklch, srgb8_to_oklch_batch, srgb_to_oklch,
    LinearRgb, OkLab, OkLch, Srgb, Srgb8,
};
pub use error::ColorError;
pub use value::{oklch_to_hex, resolve_colors, ColorValue};
