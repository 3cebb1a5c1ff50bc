//! Path commands, parsed segments, and coordinate parsing.
//!
//! A [`Segment`] is one explicit drawing command with exactly one arity's
//! worth of coordinates. Implicit repetition in the source (`C` followed by
//! twelve numbers, `M` followed by several pairs) is expanded here so later
//! stages never see it.

use crate::error::PathError;
use crate::tokenize::{split_implicit_moves, tokenize};
use std::fmt;

/// Absolute path commands understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveTo,
    LineTo,
    CubicTo,
    QuadTo,
    SmoothTo,
    ArcTo,
    HorizontalTo,
    VerticalTo,
    Close,
}

impl Command {
    /// Maps an uppercase command letter to its command. Lowercase `z` is
    /// accepted as `Z`; every other lowercase (relative) letter is rejected.
    pub fn from_letter(c: char) -> Option<Command> {
        match c {
            'M' => Some(Command::MoveTo),
            'L' => Some(Command::LineTo),
            'C' => Some(Command::CubicTo),
            'Q' => Some(Command::QuadTo),
            'S' => Some(Command::SmoothTo),
            'A' => Some(Command::ArcTo),
            'H' => Some(Command::HorizontalTo),
            'V' => Some(Command::VerticalTo),
            'Z' | 'z' => Some(Command::Close),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Command::MoveTo => 'M',
            Command::LineTo => 'L',
            Command::CubicTo => 'C',
            Command::QuadTo => 'Q',
            Command::SmoothTo => 'S',
            Command::ArcTo => 'A',
            Command::HorizontalTo => 'H',
            Command::VerticalTo => 'V',
            Command::Close => 'Z',
        }
    }

    /// Number of coordinates consumed by one invocation.
    pub fn arity(self) -> usize {
        match self {
            Command::MoveTo | Command::LineTo => 2,
            Command::CubicTo => 6,
            Command::QuadTo | Command::SmoothTo => 4,
            Command::ArcTo => 7,
            Command::HorizontalTo | Command::VerticalTo => 1,
            Command::Close => 0,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One explicit drawing command.
///
/// Segments produced by this crate always satisfy
/// `coords.len() == command.arity()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub command: Command,
    pub coords: Vec<f64>,
}

impl Segment {
    pub fn new(command: Command, coords: Vec<f64>) -> Self {
        Self { command, coords }
    }

    /// Checks the one-invocation arity invariant.
    pub fn check_arity(&self) -> Result<(), PathError> {
        if self.coords.len() == self.command.arity() {
            Ok(())
        } else {
            Err(PathError::ArityMismatch {
                command: self.command.letter(),
                expected: self.command.arity(),
                got: self.coords.len(),
            })
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Letters of the relative commands this parser refuses.
const RELATIVE_LETTERS: &[char] = &['m', 'l', 'c', 'q', 's', 'a', 'h', 'v', 't'];

/// True when the first letter in `token` is a relative command letter.
/// Looking at the first letter only keeps `NaN` and `inf` out of it.
fn starts_relative_command(token: &str) -> bool {
    token
        .chars()
        .find(char::is_ascii_alphabetic)
        .is_some_and(|c| RELATIVE_LETTERS.contains(&c))
}

/// Parses one coordinate. `inf` and `NaN` spellings are malformed; a digit
/// string that overflows to infinity (`1e400`) is out of range.
fn parse_number(token: &str, segment: &str) -> Result<f64, PathError> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(v) if v.is_infinite() && trimmed.contains(|c: char| c.is_ascii_digit()) => {
            Err(PathError::NumberOutOfRange {
                segment: segment.to_string(),
                token: token.to_string(),
            })
        }
        _ if starts_relative_command(trimmed) => Err(PathError::RelativeCommand {
            segment: segment.to_string(),
        }),
        _ => Err(PathError::MalformedNumber {
            segment: segment.to_string(),
            token: token.to_string(),
        }),
    }
}

/// Parses one comma-separated segment such as `C1,2,3,4,5,6` into explicit
/// segments, one per arity's worth of coordinates, in source order.
///
/// Extra pairs after `M` continue as `L`. Fails with
/// `PathError::ArityMismatch` when the coordinate count is not a positive
/// multiple of the arity (or when `Z` carries coordinates).
pub fn parse_coordinates(segment: &str) -> Result<Vec<Segment>, PathError> {
    let mut chars = segment.chars();
    let Some(letter) = chars.next() else {
        return Ok(Vec::new());
    };
    let Some(command) = Command::from_letter(letter) else {
        return Err(if RELATIVE_LETTERS.contains(&letter) {
            PathError::RelativeCommand {
                segment: segment.to_string(),
            }
        } else {
            PathError::MalformedNumber {
                segment: segment.to_string(),
                token: letter.to_string(),
            }
        });
    };

    let body = chars.as_str().trim();
    let coords = if body.is_empty() {
        Vec::new()
    } else {
        body.split(',')
            .map(|token| parse_number(token, segment))
            .collect::<Result<Vec<f64>, PathError>>()?
    };

    let arity = command.arity();
    let mismatch = || PathError::ArityMismatch {
        command: command.letter(),
        expected: arity,
        got: coords.len(),
    };
    if arity == 0 {
        if !coords.is_empty() {
            return Err(mismatch());
        }
        return Ok(vec![Segment::new(command, coords)]);
    }
    if coords.is_empty() || coords.len() % arity != 0 {
        return Err(mismatch());
    }

    Ok(coords
        .chunks(arity)
        .enumerate()
        .map(|(i, chunk)| {
            let command = match command {
                Command::MoveTo if i > 0 => Command::LineTo,
                other => other,
            };
            Segment::new(command, chunk.to_vec())
        })
        .collect())
}

/// Parses a whole `d` attribute into explicit segments.
///
/// Any malformed segment fails the whole path; no partial output is returned.
pub fn parse_path(d: &str) -> Result<Vec<Segment>, PathError> {
    let mut segments = Vec::new();
    for raw in tokenize(d) {
        for piece in split_implicit_moves(&raw) {
            segments.extend(parse_coordinates(&piece)?);
        }
    }
    Ok(segments)
}
