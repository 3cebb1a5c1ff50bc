//! Re-emitting parsed segments through a drawing API.
//!
//! [`DrawSink`] is the seam between the parser and whatever canvas the caller
//! draws on. The style and the optional [`Transform`] are handed to the sink
//! once per path, so it applies them to the whole path as a unit; segment
//! coordinates are passed through untouched.

use crate::error::PathError;
use crate::segment::{parse_path, Command, Segment};
use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Translation followed by uniform scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Places an asset of `source_width` at `(x, y)`, scaled to `target_width`.
    pub fn fit(x: f64, y: f64, target_width: f64, source_width: f64) -> Self {
        Self {
            x,
            y,
            scale: target_width / source_width,
        }
    }

    /// Maps a point from path space to canvas space.
    pub fn apply(&self, px: f64, py: f64) -> (f64, f64) {
        (self.x + px * self.scale, self.y + py * self.scale)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {}) scale({})",
            self.x, self.y, self.scale
        )
    }
}

/// A drawing surface that accepts explicit absolute path commands.
pub trait DrawSink {
    /// Starts a path drawn with `style`, with `transform` applied to all of it.
    fn begin_path(&mut self, style: &Style, transform: Option<&Transform>);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);

    /// Smooth cubic: the first control point mirrors the previous curve's.
    fn smooth_to(&mut self, x2: f64, y2: f64, x: f64, y: f64);

    #[allow(clippy::too_many_arguments)]
    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    );

    fn horizontal_to(&mut self, x: f64);

    fn vertical_to(&mut self, y: f64);

    fn close(&mut self);

    /// Finishes the path started by [`DrawSink::begin_path`].
    fn end_path(&mut self);
}

/// Sends `segments` to `sink` as one path.
///
/// Every segment is checked before anything is drawn, so a segment with the
/// wrong coordinate count leaves the sink untouched.
pub fn emit<S: DrawSink + ?Sized>(
    sink: &mut S,
    segments: &[Segment],
    style: &Style,
    transform: Option<&Transform>,
) -> Result<(), PathError> {
    for segment in segments {
        segment.check_arity()?;
    }

    sink.begin_path(style, transform);
    for segment in segments {
        match (segment.command, segment.coords.as_slice()) {
            (Command::MoveTo, &[x, y]) => sink.move_to(x, y),
            (Command::LineTo, &[x, y]) => sink.line_to(x, y),
            (Command::CubicTo, &[x1, y1, x2, y2, x, y]) => sink.cubic_to(x1, y1, x2, y2, x, y),
            (Command::QuadTo, &[x1, y1, x, y]) => sink.quad_to(x1, y1, x, y),
            (Command::SmoothTo, &[x2, y2, x, y]) => sink.smooth_to(x2, y2, x, y),
            (Command::ArcTo, &[rx, ry, rotation, large_arc, sweep, x, y]) => {
                sink.arc_to(rx, ry, rotation, large_arc != 0.0, sweep != 0.0, x, y)
            }
            (Command::HorizontalTo, &[x]) => sink.horizontal_to(x),
            (Command::VerticalTo, &[y]) => sink.vertical_to(y),
            (Command::Close, &[]) => sink.close(),
            // arity was checked above
            _ => {}
        }
    }
    sink.end_path();
    Ok(())
}

/// Parses `d` and draws it into `sink`, returning the parsed segments.
///
/// Nothing reaches the sink when parsing fails.
pub fn draw_path<S: DrawSink + ?Sized>(
    sink: &mut S,
    d: &str,
    style: &Style,
    transform: Option<&Transform>,
) -> Result<Vec<Segment>, PathError> {
    let segments = parse_path(d)?;
    emit(sink, &segments, style, transform)?;
    Ok(segments)
}
