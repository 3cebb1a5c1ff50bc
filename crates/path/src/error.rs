//! Error types for path parsing.

use thiserror::Error;

/// Errors produced while parsing path data or path styles.
///
/// All of these are fatal for the asset being imported: nothing is emitted
/// for a path that fails to parse.
#[derive(Debug, Error)]
pub enum PathError {
    /// A coordinate token was not a finite decimal or exponential numeral.
    #[error("malformed number {token:?} in segment {segment:?}")]
    MalformedNumber { segment: String, token: String },

    /// A well-formed numeral too large to represent as a finite `f64`.
    #[error("number {token:?} in segment {segment:?} is out of range")]
    NumberOutOfRange { segment: String, token: String },

    /// A segment's coordinate count is not a whole number of invocations.
    #[error("{command} takes coordinates in groups of {expected}, got {got}")]
    ArityMismatch {
        command: char,
        expected: usize,
        got: usize,
    },

    /// The segment uses a relative (lowercase) command, which is unsupported.
    #[error("relative path commands are not supported: {segment:?}")]
    RelativeCommand { segment: String },

    /// A style attribute entry was not a `key:value` pair.
    #[error("malformed style entry: {0:?}")]
    MalformedStyle(String),
}
