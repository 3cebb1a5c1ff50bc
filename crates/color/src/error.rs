//! Error types for the color engine.

use thiserror::Error;

/// Errors produced by color conversion and color string parsing.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Luminance outside [0, 1], negative chroma, or a non-finite component.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_includes_message() {
        let err = ColorError::InvalidInput("luminance 1.1 outside [0, 1]".into());
        let msg = format!("{err}");
        assert!(msg.contains("invalid input"), "missing prefix in: {msg}");
        assert!(msg.contains("1.1"), "missing value in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = ColorError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
