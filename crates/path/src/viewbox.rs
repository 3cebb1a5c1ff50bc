//! The `viewBox` of an imported asset.

use crate::error::PathError;
use crate::log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parses `"min-x min-y width height"`, separated by spaces or commas.
    pub fn parse(value: &str) -> Result<ViewBox, PathError> {
        let malformed = |token: &str| PathError::MalformedNumber {
            segment: value.to_string(),
            token: token.to_string(),
        };

        let tokens: Vec<&str> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 4 {
            return Err(malformed(value.trim()));
        }

        let mut numbers = [0.0; 4];
        for (slot, token) in numbers.iter_mut().zip(&tokens) {
            *slot = token
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| malformed(token))?;
        }
        let [min_x, min_y, width, height] = numbers;
        Ok(ViewBox {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// True when the box starts at the origin and has the given size.
    pub fn matches(&self, width: f64, height: f64) -> bool {
        self.min_x == 0.0 && self.min_y == 0.0 && self.width == width && self.height == height
    }
}

/// Checks that `view_box` is `0 0 width height`.
///
/// A mismatch or an unparseable value is only reported; the caller keeps
/// going with the geometry as it is.
pub fn check_viewbox(view_box: &str, width: f64, height: f64) -> bool {
    match ViewBox::parse(view_box) {
        Ok(vb) if vb.matches(width, height) => true,
        Ok(_) => {
            warn!(view_box, width, height, "viewBox does not match the document size");
            false
        }
        Err(_) => {
            warn!(view_box, "unreadable viewBox, expected four numbers");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_and_comma_separated() {
        let expected = ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 210.0,
            height: 297.0,
        };
        assert_eq!(ViewBox::parse("0 0 210 297").unwrap(), expected);
        assert_eq!(ViewBox::parse("0,0,210,297").unwrap(), expected);
        assert_eq!(ViewBox::parse(" 0, 0  210\t297 ").unwrap(), expected);
    }

    #[test]
    fn rejects_wrong_count_and_bad_numbers() {
        assert!(ViewBox::parse("0 0 210").is_err());
        assert!(ViewBox::parse("0 0 210 297 1").is_err());
        let err = ViewBox::parse("0 0 wide 297").unwrap_err();
        assert!(
            matches!(err, PathError::MalformedNumber { ref token, .. } if token == "wide"),
            "got {err:?}"
        );
    }

    #[test]
    fn matches_requires_origin_and_size() {
        let vb = ViewBox::parse("0 0 100 50").unwrap();
        assert!(vb.matches(100.0, 50.0));
        assert!(!vb.matches(100.0, 60.0));
        assert!(!ViewBox::parse("1 0 100 50").unwrap().matches(100.0, 50.0));
    }

    #[test]
    fn check_viewbox_never_fails() {
        assert!(check_viewbox("0 0 24 24", 24.0, 24.0));
        assert!(!check_viewbox("0 0 48 48", 24.0, 24.0));
        assert!(!check_viewbox("garbage", 24.0, 24.0));
    }
}
