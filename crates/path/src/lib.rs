#![deny(unsafe_code)]
//! SVG path data for the basemap renderer.
//!
//! A `d` attribute goes through three steps: [`tokenize`] splits it at
//! command letters, [`split_implicit_moves`] expands `M` runs into explicit
//! line-tos, and [`parse_coordinates`] turns each piece into typed
//! [`Segment`]s. [`emit`] then replays the segments on any [`DrawSink`],
//! for example an [`SvgPathWriter`].
//!
//! Only absolute commands are supported.

pub mod error;
mod log;
pub mod segment;
pub mod sink;
pub mod style;
pub mod tokenize;
pub mod viewbox;
pub mod writer;

pub use error::PathError;
pub use segment::{parse_coordinates, parse_path, Command, Segment};
pub use sink::{draw_path, emit, DrawSink, Transform};
pub use style::Style;
pub use tokenize::{normalize_whitespace, split_implicit_moves, tokenize};
pub use viewbox::{check_viewbox, ViewBox};
pub use writer::SvgPathWriter;
