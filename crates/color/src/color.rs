//! Color types and the OKLCH ⇄ sRGB conversion pipeline.
//!
//! Provides the color types (`Srgb8`, `Srgb`, `LinearRgb`, `OkLab`, `OkLch`)
//! and pure conversion functions between them. Uses `f64` throughout.
//!
//! The forward direction (`oklch_to_srgb8`) never returns an undisplayable
//! color: out-of-gamut requests are pulled back into sRGB by reducing chroma
//! with a bisection search, keeping lightness and hue fixed.

use crate::error::ColorError;
use crate::log::debug;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bisection stops once the chroma interval is narrower than this.
///
/// The largest chroma inside sRGB is about 0.3224; rounding the search range
/// up to 0.5 and splitting it 2^13 times gives 1/2^14.
pub const GAMUT_RESOLUTION: f64 = 1.0 / (1 << 14) as f64;

/// Chroma below this is treated as achromatic (hue and chroma reported as 0).
pub const ACHROMATIC_EPSILON: f64 = 1e-10;

/// Luminance this far outside [0, 1] is still accepted and clamped.
pub const LUMINANCE_TOLERANCE: f64 = 1e-9;

/// Channels this far outside [0, 1] still count as in gamut.
///
/// Round-tripping a dark 8-bit color leaves channels like `-1.4e-18`; those
/// are clipped, not sent through chroma reduction.
pub const GAMUT_TOLERANCE: f64 = 1e-9;

/// Builds a matrix from its rows so the constants read like the published tables.
const fn from_rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(m[0][0], m[1][0], m[2][0]),
        DVec3::new(m[0][1], m[1][1], m[2][1]),
        DVec3::new(m[0][2], m[1][2], m[2][2]),
    )
}

const OKLAB_TO_CLMS: DMat3 = from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.291485548],
]);

const LMS_TO_LINEAR: DMat3 = from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.707614701],
]);

const LINEAR_TO_LMS: DMat3 = from_rows([
    [0.4122214708018041, 0.53633253634543, 0.05144599285276585],
    [0.2119034982505858, 0.6806995451361225, 0.1073969566132915],
    [0.08830246188874209, 0.2817188376235317, 0.6299787004877261],
]);

const CLMS_TO_OKLAB: DMat3 = from_rows([
    [0.2104542682745812, 0.7936177747300267, -0.004072043004608028],
    [1.977998532388508, -2.428592241936286, 0.4505937095477779],
    [0.02590404248765818, 0.7827717124269177, -0.8086757549145759],
]);

/// 8-bit sRGB color, the displayable output of the engine.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Gamma-encoded sRGB with components nominally in [0, 1].
///
/// Values outside [0, 1] are out of gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab). Hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb8, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb8 { r, g, b })
    }

    /// Lowercase `#rrggbb`, each channel zero-padded to two digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scales each channel to [0, 1].
    pub fn to_unit(self) -> Srgb {
        Srgb {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
        }
    }

    /// Quantizes a [0, 1] color to 8 bits, clipping anything outside the range.
    ///
    /// Exact halves round away from zero (`126.5` becomes 127), not to even.
    pub fn from_unit(c: Srgb) -> Srgb8 {
        let c = c.clip();
        Srgb8 {
            r: (c.r * 255.0).round() as u8,
            g: (c.g * 255.0).round() as u8,
            b: (c.b * 255.0).round() as u8,
        }
    }
}

impl Serialize for Srgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Srgb {
    /// Clamps each channel to [0, 1]. NaN channels become 0.
    pub fn clip(self) -> Srgb {
        let clip = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Srgb {
            r: clip(self.r),
            g: clip(self.g),
            b: clip(self.b),
        }
    }
}

/// True when every channel lies in [0, 1], give or take [`GAMUT_TOLERANCE`].
pub fn is_in_gamut(c: Srgb) -> bool {
    [c.r, c.g, c.b]
        .iter()
        .all(|v| (-GAMUT_TOLERANCE..=1.0 + GAMUT_TOLERANCE).contains(v))
}

/// Applies inverse sRGB gamma to a single component, preserving sign.
fn srgb_component_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.04045 {
        c / 12.92
    } else {
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to a single linear component, preserving sign.
fn linear_component_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.0031308 {
        c * 12.92
    } else {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma. No clipping.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab: LMS matrix, cube root, OKLab matrix.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let lms = LINEAR_TO_LMS * DVec3::new(c.r, c.g, c.b);
    let clms = DVec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    let lab = CLMS_TO_OKLAB * clms;
    OkLab {
        l: lab.x,
        a: lab.y,
        b: lab.z,
    }
}

/// Converts OKLab to linear RGB: cube-root LMS matrix, cube, RGB matrix.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let clms = OKLAB_TO_CLMS * DVec3::new(c.l, c.a, c.b);
    let rgb = LMS_TO_LINEAR * (clms * clms * clms);
    LinearRgb {
        r: rgb.x,
        g: rgb.y,
        b: rgb.z,
    }
}

/// Converts OKLab to OKLCh.
///
/// Colors with chroma below [`ACHROMATIC_EPSILON`] are reported with chroma
/// and hue both 0, since their hue is meaningless.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let chroma = c.a.hypot(c.b);
    if chroma < ACHROMATIC_EPSILON {
        return OkLch {
            l: c.l,
            c: 0.0,
            h: 0.0,
        };
    }
    // rem_euclid rounds tiny negative angles up to exactly 360.0
    let h = c.b.atan2(c.a).to_degrees().rem_euclid(360.0);
    OkLch {
        l: c.l,
        c: chroma,
        h: if h >= 360.0 { 0.0 } else { h },
    }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// sRGB to OKLCh via the chain sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// 8-bit sRGB to OKLCh. Channels are normalized by 255 first.
pub fn srgb8_to_oklch(c: Srgb8) -> OkLch {
    srgb_to_oklch(c.to_unit())
}

/// Forward evaluation OKLCh -> OKLab -> linear -> sRGB, without clipping or
/// gamut mapping. The result may be out of gamut.
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)))
}

/// Converts OKLCh to a displayable 8-bit sRGB color.
///
/// In-gamut colors are rounded directly. Out-of-gamut colors keep their
/// lightness and hue while chroma is bisected down to the largest value that
/// still lands inside sRGB. Colors that are out of gamut even as a pure gray
/// are clipped channel-wise.
///
/// Returns `ColorError::InvalidInput` for luminance outside [0, 1] (callers
/// must divide percentage-style luminance by 100 first), negative chroma, or
/// NaN and infinite components.
pub fn oklch_to_srgb8(c: OkLch) -> Result<Srgb8, ColorError> {
    let c = validate(c)?;
    let srgb = oklch_to_srgb(c);
    if is_in_gamut(srgb) {
        return Ok(Srgb8::from_unit(srgb));
    }
    Ok(Srgb8::from_unit(gamut_map(c, srgb)))
}

/// Element-wise [`oklch_to_srgb8`]. Output order and length match the input;
/// the first invalid color fails the whole batch.
pub fn oklch_to_srgb8_batch(colors: &[OkLch]) -> Result<Vec<Srgb8>, ColorError> {
    colors.iter().map(|&c| oklch_to_srgb8(c)).collect()
}

/// Element-wise [`srgb8_to_oklch`].
pub fn srgb8_to_oklch_batch(colors: &[Srgb8]) -> Vec<OkLch> {
    colors.iter().map(|&c| srgb8_to_oklch(c)).collect()
}

fn validate(c: OkLch) -> Result<OkLch, ColorError> {
    if !(c.l.is_finite() && c.c.is_finite() && c.h.is_finite()) {
        return Err(ColorError::InvalidInput(format!(
            "non-finite component in oklch({} {} {})",
            c.l, c.c, c.h
        )));
    }
    if c.l < -LUMINANCE_TOLERANCE || c.l > 1.0 + LUMINANCE_TOLERANCE {
        return Err(ColorError::InvalidInput(format!(
            "luminance {} outside [0, 1]",
            c.l
        )));
    }
    if c.c < 0.0 {
        return Err(ColorError::InvalidInput(format!(
            "chroma {} must be nonnegative",
            c.c
        )));
    }
    Ok(OkLch {
        l: c.l.clamp(0.0, 1.0),
        ..c
    })
}

/// Pulls an out-of-gamut color back into sRGB.
///
/// Treats gamut membership as monotonic in chroma at fixed lightness and hue.
/// That holds for the sRGB solid in practice but is not proven for every hue.
fn gamut_map(c: OkLch, unmapped: Srgb) -> Srgb {
    let gray = oklch_to_srgb(OkLch { c: 0.0, ..c });
    if !is_in_gamut(gray) {
        debug!(l = c.l, "achromatic color out of gamut, clipping");
        return unmapped.clip();
    }

    let mut start = 0.0;
    let mut end = c.c;
    let mut last_good = 0.0;
    while end - start > GAMUT_RESOLUTION {
        let mid = start + (end - start) / 2.0;
        if is_in_gamut(oklch_to_srgb(OkLch { c: mid, ..c })) {
            start = mid;
            last_good = mid;
        } else {
            end = mid;
        }
    }

    debug!(
        requested = c.c,
        mapped = last_good,
        "reduced chroma into sRGB gamut"
    );
    oklch_to_srgb(OkLch { c: last_good, ..c }).clip()
}
