//! Per-path presentation attributes carried alongside the geometry.

use crate::error::PathError;
use crate::log::warn;
use serde::{Deserialize, Serialize};

/// Fill, stroke and stroke width of one path.
///
/// Missing values default to `none`, `none` and `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "none".to_string(),
            stroke_width: 0.0,
        }
    }
}

impl Style {
    /// Parses a `style` attribute such as `fill:#000000;stroke-width:0.264583`.
    ///
    /// Unknown keys are ignored, empty entries are skipped.
    pub fn parse(style: &str) -> Result<Style, PathError> {
        let mut out = Style::default();
        for entry in style.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once(':')
                .ok_or_else(|| PathError::MalformedStyle(entry.to_string()))?;
            let value = value.trim();
            match key.trim() {
                "fill" => out.fill = value.to_string(),
                "stroke" => out.stroke = value.to_string(),
                "stroke-width" => out.stroke_width = parse_width(value, entry)?,
                _ => {}
            }
        }
        Ok(out)
    }

    /// Builds the style of a `<path>` element from its attributes.
    ///
    /// A `style` attribute longer than two characters wins outright;
    /// otherwise the individual `fill`, `stroke` and `stroke-width`
    /// attributes are used, each defaulting when absent.
    pub fn from_attributes(
        style: Option<&str>,
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_width: Option<&str>,
    ) -> Result<Style, PathError> {
        if let Some(style) = style.filter(|s| s.trim().len() > 2) {
            return Style::parse(style);
        }

        let mut out = Style::default();
        match fill {
            Some(fill) => out.fill = fill.trim().to_string(),
            None => {
                warn!("no fill found in path");
            }
        }
        match stroke {
            Some(stroke) => out.stroke = stroke.trim().to_string(),
            None => {
                warn!("no stroke found in path");
            }
        }
        match stroke_width {
            Some(width) => out.stroke_width = parse_width(width.trim(), width)?,
            None => {
                warn!("no stroke-width found in path");
            }
        }
        Ok(out)
    }

    /// Recolors the fill. `"none"` means "keep the original".
    pub fn with_fill(mut self, fill: &str) -> Style {
        if fill != "none" {
            self.fill = fill.to_string();
        }
        self
    }
}

/// Accepts a plain number or one with a `px` suffix.
fn parse_width(value: &str, entry: &str) -> Result<f64, PathError> {
    let number = value.strip_suffix("px").unwrap_or(value);
    number
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| PathError::MalformedNumber {
            segment: entry.to_string(),
            token: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none_none_zero() {
        let s = Style::default();
        assert_eq!(s.fill, "none");
        assert_eq!(s.stroke, "none");
        assert_eq!(s.stroke_width, 0.0);
    }

    #[test]
    fn parse_reads_known_keys() {
        let s = Style::parse("fill:#000000;stroke-width:0.264583").unwrap();
        assert_eq!(s.fill, "#000000");
        assert_eq!(s.stroke, "none");
        assert_eq!(s.stroke_width, 0.264583);
    }

    #[test]
    fn parse_tolerates_trailing_semicolon_and_unknown_keys() {
        let s = Style::parse("fill:#ff0000; opacity:0.5; stroke:#00ff00;").unwrap();
        assert_eq!(s.fill, "#ff0000");
        assert_eq!(s.stroke, "#00ff00");
    }

    #[test]
    fn parse_accepts_px_widths() {
        assert_eq!(Style::parse("stroke-width:2px").unwrap().stroke_width, 2.0);
    }

    #[test]
    fn parse_rejects_entries_without_colon() {
        let err = Style::parse("fill:#000;bogus").unwrap_err();
        assert!(matches!(err, PathError::MalformedStyle(ref e) if e == "bogus"), "got {err:?}");
    }

    #[test]
    fn parse_rejects_bad_width() {
        let err = Style::parse("stroke-width:thick").unwrap_err();
        assert!(matches!(err, PathError::MalformedNumber { .. }), "got {err:?}");
    }

    #[test]
    fn style_attribute_wins_over_individual_attributes() {
        let s = Style::from_attributes(Some("fill:#123456"), Some("#ffffff"), None, None).unwrap();
        assert_eq!(s.fill, "#123456");
    }

    #[test]
    fn trivial_style_attribute_falls_back_to_attributes() {
        let s = Style::from_attributes(Some(""), Some("#ffffff"), Some("#000000"), Some("1.5"))
            .unwrap();
        assert_eq!(
            s,
            Style {
                fill: "#ffffff".into(),
                stroke: "#000000".into(),
                stroke_width: 1.5,
            }
        );
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let s = Style::from_attributes(None, Some("#ffffff"), None, None).unwrap();
        assert_eq!(s.fill, "#ffffff");
        assert_eq!(s.stroke, "none");
        assert_eq!(s.stroke_width, 0.0);
    }

    #[test]
    fn with_fill_overrides_unless_none() {
        let base = Style::parse("fill:#000000").unwrap();
        assert_eq!(base.clone().with_fill("#3a89fa").fill, "#3a89fa");
        assert_eq!(base.with_fill("none").fill, "#000000");
    }

    #[test]
    fn deserializes_with_defaults() {
        let s: Style = serde_json::from_str(r##"{"fill":"#3a89fa","stroke-width":0.5}"##).unwrap();
        assert_eq!(s.fill, "#3a89fa");
        assert_eq!(s.stroke, "none");
        assert_eq!(s.stroke_width, 0.5);
    }
}
