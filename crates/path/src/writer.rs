//! A [`DrawSink`] that writes SVG `<path>` elements.
//!
//! Paths are re-serialized with one explicit command letter per segment, so
//! the output has no implicit repetition left in it. The transform goes into
//! the element's `transform` attribute rather than into the coordinates.

use crate::sink::{DrawSink, Transform};
use crate::style::Style;
use std::fmt::Write;

/// Collects `<path>` elements, one per `begin_path`/`end_path` pair.
#[derive(Debug, Default)]
pub struct SvgPathWriter {
    elements: Vec<String>,
    data: String,
    attributes: String,
}

impl SvgPathWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the finished elements in drawing order.
    pub fn finish(self) -> Vec<String> {
        self.elements
    }

    /// Wraps the finished elements in a `<g>` with the given id.
    pub fn finish_group(self, id: &str) -> String {
        let mut out = format!("<g id=\"{}\">", escape_attribute(id));
        for element in &self.elements {
            out.push_str(element);
        }
        out.push_str("</g>");
        out
    }

    fn push(&mut self, letter: char, coords: &[f64]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        for (i, c) in coords.iter().enumerate() {
            if i > 0 {
                self.data.push(',');
            }
            // writing to a String cannot fail
            let _ = write!(self.data, "{c}");
        }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

impl DrawSink for SvgPathWriter {
    fn begin_path(&mut self, style: &Style, transform: Option<&Transform>) {
        self.data.clear();
        self.attributes = format!(
            " fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            escape_attribute(&style.fill),
            escape_attribute(&style.stroke),
            style.stroke_width
        );
        if let Some(transform) = transform {
            let _ = write!(self.attributes, " transform=\"{transform}\"");
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push('L', &[x, y]);
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.push('C', &[x1, y1, x2, y2, x, y]);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.push('Q', &[x1, y1, x, y]);
    }

    fn smooth_to(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        self.push('S', &[x2, y2, x, y]);
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        self.push('A', &[rx, ry, rotation, flag(large_arc), flag(sweep), x, y]);
    }

    fn horizontal_to(&mut self, x: f64) {
        self.push('H', &[x]);
    }

    fn vertical_to(&mut self, y: f64) {
        self.push('V', &[y]);
    }

    fn close(&mut self) {
        self.push('Z', &[]);
    }

    fn end_path(&mut self) {
        self.elements.push(format!(
            "<path d=\"{}\"{}/>",
            self.data, self.attributes
        ));
        self.data.clear();
        self.attributes.clear();
    }
}
