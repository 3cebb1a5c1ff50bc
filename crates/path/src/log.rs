//! Crate-private `warn!` for recoverable oddities in imported SVG data.
//!
//! Forwards to `tracing` with the `tracing` feature; expands to nothing
//! without it, so it may only appear as a statement.

#[cfg(feature = "tracing")]
pub(crate) use tracing::warn;

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($event:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use warn_ as warn;
