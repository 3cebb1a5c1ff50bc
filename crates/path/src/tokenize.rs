//! Splitting raw `d` strings into per-command segments.
//!
//! The tokenizer is a two-state machine over the input characters: it scans
//! for the first command letter, then accumulates characters into the current
//! segment until the next command letter closes it. One pass, no backtracking.
//!
//! Only absolute commands are recognized. Lowercase `z` is folded to `Z`;
//! other lowercase letters are left in the segment text and rejected later
//! by coordinate parsing.

use crate::log::warn;
use crate::segment::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningForCommand,
    AccumulatingSegment,
}

/// Splits a path string into raw segments, one per command letter.
///
/// Each segment starts with its (uppercase) command letter and holds the
/// numeric text up to the next letter, already passed through
/// [`normalize_whitespace`]. Tabs and newlines count as spaces. Anything
/// before the first command letter is dropped.
pub fn tokenize(d: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut state = State::ScanningForCommand;
    let mut dropped = String::new();

    for ch in d.chars() {
        let ch = match ch {
            'z' => 'Z',
            c if c.is_whitespace() => ' ',
            c => c,
        };

        if Command::from_letter(ch).is_some() {
            if state == State::AccumulatingSegment {
                segments.push(normalize_whitespace(&current));
                current.clear();
            }
            state = State::AccumulatingSegment;
            current.push(ch);
            continue;
        }

        match state {
            State::ScanningForCommand => dropped.push(ch),
            State::AccumulatingSegment => current.push(ch),
        }
    }

    if state == State::AccumulatingSegment {
        segments.push(normalize_whitespace(&current));
    }
    if !dropped.trim().is_empty() {
        warn!(text = %dropped.trim(), "discarding path data before the first command");
    }
    segments
}

/// Removes whitespace directly after the command letter and trims trailing
/// whitespace. Separators between coordinates are left as they are.
///
/// `"M 1,2 3,4 "` becomes `"M1,2 3,4"`.
pub fn normalize_whitespace(segment: &str) -> String {
    let mut chars = segment.chars();
    let normalized = match chars.next() {
        Some(letter) if Command::from_letter(letter).is_some() => {
            format!("{letter}{}", chars.as_str().trim_start())
        }
        _ => segment.to_string(),
    };
    normalized.trim_end().to_string()
}

/// Expands the implicit line-to form `M x,y x,y ...` and normalizes
/// separators.
///
/// A segment that starts with `M`, contains a space, and has more than one
/// comma is split at its spaces into `M<first pair>` followed by one
/// `L<pair>` per remaining pair. Any other segment has its spaces turned into
/// commas and is returned on its own.
pub fn split_implicit_moves(segment: &str) -> Vec<String> {
    let implicit_lines =
        segment.starts_with('M') && segment.contains(' ') && segment.matches(',').count() > 1;
    if !implicit_lines {
        return vec![segment.replace(' ', ",")];
    }

    let mut pieces = segment.split(' ').filter(|p| !p.is_empty());
    let mut out = Vec::new();
    if let Some(first) = pieces.next() {
        out.push(first.to_string());
    }
    out.extend(pieces.map(|pair| format!("L{pair}")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_all(d: &str) -> Vec<String> {
        tokenize(d)
            .iter()
            .flat_map(|raw| split_implicit_moves(raw))
            .collect()
    }

    #[test]
    fn normalize_whitespace_drops_space_after_letter() {
        assert_eq!(
            normalize_whitespace("M 106.14893,154.92896 105.12057,156.28805 "),
            "M106.14893,154.92896 105.12057,156.28805"
        );
        assert_eq!(normalize_whitespace("C 37.81 0.104 "), "C37.81 0.104");
        assert_eq!(normalize_whitespace("Z "), "Z");
    }

    #[test]
    fn normalize_whitespace_keeps_internal_separators() {
        assert_eq!(normalize_whitespace("L1 2"), "L1 2");
        assert_eq!(normalize_whitespace("L1,2 3,4"), "L1,2 3,4");
    }

    #[test]
    fn tokenize_splits_at_every_command_letter() {
        assert_eq!(
            tokenize("M 1,2 L 3,4 C 5,6 7,8 9,10 Z"),
            vec!["M1,2", "L3,4", "C5,6 7,8 9,10", "Z"]
        );
    }

    #[test]
    fn tokenize_folds_lowercase_close() {
        assert_eq!(tokenize("M1,2 L3,4 z"), vec!["M1,2", "L3,4", "Z"]);
    }

    #[test]
    fn tokenize_treats_newlines_as_spaces() {
        assert_eq!(tokenize("M1,2\n\tL3,4\n"), vec!["M1,2", "L3,4"]);
    }

    #[test]
    fn tokenize_drops_text_before_first_command() {
        assert_eq!(tokenize("  M1,2"), vec!["M1,2"]);
        assert_eq!(tokenize("9,9 M1,2"), vec!["M1,2"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn tokenize_keeps_exponents_inside_segments() {
        assert_eq!(tokenize("M1e2,2E-1 L3,4"), vec!["M1e2,2E-1", "L3,4"]);
    }

    #[test]
    fn split_implicit_moves_expands_pairs() {
        assert_eq!(
            split_implicit_moves("M106.14893,154.92896 105.12057,156.28805"),
            vec!["M106.14893,154.92896", "L105.12057,156.28805"]
        );
    }

    #[test]
    fn split_implicit_moves_skips_empty_pieces() {
        assert_eq!(
            split_implicit_moves("M1,2  3,4"),
            vec!["M1,2", "L3,4"]
        );
    }

    #[test]
    fn split_implicit_moves_normalizes_other_segments() {
        assert_eq!(
            split_implicit_moves("C507.12735,71.109224 498.21223,1371.7897 1357.2055,1366.1024"),
            vec!["C507.12735,71.109224,498.21223,1371.7897,1357.2055,1366.1024"]
        );
        assert_eq!(split_implicit_moves("M40.071 0.082"), vec!["M40.071,0.082"]);
        assert_eq!(split_implicit_moves("Z"), vec!["Z"]);
    }

    #[test]
    fn separates_compact_multi_subpath_string() {
        let d = "M233.14606,2008.031C659.81265,2747.0389999999998,1783.8721,2105.1105,1357.2055,1366.1024C1781.7582,619.3380099999999,2919.4029,1263.3265999999999,2484.9812,2004.3931M1366.1206,76.818124C507.12735,71.109224,498.21223,1371.7897,1357.2055,1366.1024M2637.1773000000003,1366.1184C2648.5952,-351.86798,65.859465,-351.90088,77.233765,1366.0864C88.458065,3061.4318,2625.91,3061.4641,2637.1773,1366.1184Z";
        assert_eq!(
            split_all(d),
            vec![
                "M233.14606,2008.031",
                "C659.81265,2747.0389999999998,1783.8721,2105.1105,1357.2055,1366.1024",
                "C1781.7582,619.3380099999999,2919.4029,1263.3265999999999,2484.9812,2004.3931",
                "M1366.1206,76.818124",
                "C507.12735,71.109224,498.21223,1371.7897,1357.2055,1366.1024",
                "M2637.1773000000003,1366.1184",
                "C2648.5952,-351.86798,65.859465,-351.90088,77.233765,1366.0864",
                "C88.458065,3061.4318,2625.91,3061.4641,2637.1773,1366.1184",
                "Z",
            ]
        );
    }

    #[test]
    fn separates_mixed_line_runs_and_verticals() {
        let d = "M 115.52497,142.25383 C 115.44127,142.41816 115.3224,142.56184 115.1777,142.67553 L 114.49352,143.20985 114.16485,144.01395 V 145.87228 Z";
        assert_eq!(
            split_all(d),
            vec![
                "M115.52497,142.25383",
                "C115.44127,142.41816,115.3224,142.56184,115.1777,142.67553",
                "L114.49352,143.20985,114.16485,144.01395",
                "V145.87228",
                "Z",
            ]
        );
    }

    #[test]
    fn separates_space_delimited_path_with_lowercase_close() {
        let d = "M 98.625 26.939453 L 98.625 27.460938 C 98.754125 27.545773 98.879194 27.632457 99 27.722656 C 98.900475 27.452483 98.774716 27.19101 98.625 26.939453 z";
        assert_eq!(
            split_all(d),
            vec![
                "M98.625,26.939453",
                "L98.625,27.460938",
                "C98.754125,27.545773,98.879194,27.632457,99,27.722656",
                "C98.900475,27.452483,98.774716,27.19101,98.625,26.939453",
                "Z",
            ]
        );
    }
}
