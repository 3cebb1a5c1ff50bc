//! Crate-private `debug!`/`warn!`.
//!
//! These forward to `tracing` when the `tracing` feature is on. Without it
//! they swallow their arguments, so call them in statement position only.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($event:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($event:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use warn_ as warn;
