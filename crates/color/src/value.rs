//! Color strings as callers write them: `oklch(L C H)` or `#rrggbb`.
//!
//! Hand-maintained palettes mix both notations and often give lightness as a
//! percentage, so parsing normalizes `L > 1` by dividing by 100 before the
//! value ever reaches the conversion engine.

use crate::color::{oklch_to_srgb8, OkLch, Srgb8};
use crate::error::ColorError;
use crate::log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A parsed color string.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// `oklch(L C H)` with L already normalized to [0, 1].
    Oklch(OkLch),
    /// A validated `#rrggbb` literal, kept exactly as written.
    Hex(String),
}

impl ColorValue {
    /// Parses `oklch(L C H)`, `oklch(L,C,H)` or `#rrggbb`.
    ///
    /// Lightness may be written as a fraction, as a bare percentage (`64.2`)
    /// or with a `%` suffix.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.starts_with('#') {
            Srgb8::from_hex(s)?;
            return Ok(ColorValue::Hex(s.to_string()));
        }

        let inner = s
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("oklch("))
            .and_then(|_| s[6..].strip_suffix(')'))
            .ok_or_else(|| {
                ColorError::InvalidColor(format!("expected oklch(L C H) or #rrggbb, got {s:?}"))
            })?;

        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [l, c, h] = parts.as_slice() else {
            return Err(ColorError::InvalidColor(format!(
                "expected 3 oklch components, got {} in {s:?}",
                parts.len()
            )));
        };

        let l = match l.strip_suffix('%') {
            Some(pct) => parse_component(pct, s)? / 100.0,
            None => normalize_luminance(parse_component(l, s)?),
        };
        Ok(ColorValue::Oklch(OkLch {
            l,
            c: parse_component(c, s)?,
            h: parse_component(h, s)?,
        }))
    }

    /// Resolves to a lowercase `#rrggbb` string. Hex literals pass through unchanged.
    pub fn to_hex(&self) -> Result<String, ColorError> {
        match self {
            ColorValue::Oklch(c) => Ok(oklch_to_srgb8(*c)?.to_hex()),
            ColorValue::Hex(hex) => Ok(hex.clone()),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::parse(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Oklch(c) => write!(f, "oklch({} {} {})", c.l, c.c, c.h),
            ColorValue::Hex(hex) => f.write_str(hex),
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorValue::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_component(text: &str, whole: &str) -> Result<f64, ColorError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidColor(format!("invalid number {text:?} in {whole:?}")))
}

/// Divides percentage-style lightness by 100. Values already in [0, 1] are
/// left alone, so normalizing twice is harmless.
fn normalize_luminance(l: f64) -> f64 {
    if l > 1.0 {
        warn!(l, "luminance given as a percentage, dividing by 100");
        l / 100.0
    } else {
        l
    }
}

/// Converts a raw OKLCH triple to `#rrggbb`, normalizing percentage lightness.
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> Result<String, ColorError> {
    let color = OkLch {
        l: normalize_luminance(l),
        c,
        h,
    };
    Ok(oklch_to_srgb8(color)?.to_hex())
}

/// Converts a name -> color string table into a name -> `#rrggbb` table.
///
/// Errors name the offending entry.
pub fn resolve_colors(
    colors: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, ColorError> {
    colors
        .iter()
        .map(|(name, value)| {
            ColorValue::parse(value)
                .and_then(|v| v.to_hex())
                .map(|hex| (name.clone(), hex))
                .map_err(|e| match e {
                    ColorError::InvalidColor(msg) => {
                        ColorError::InvalidColor(format!("{name}: {msg}"))
                    }
                    ColorError::InvalidInput(msg) => {
                        ColorError::InvalidInput(format!("{name}: {msg}"))
                    }
                })
        })
        .collect()
}
