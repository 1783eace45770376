//! Independent ways of cutting raw model output into candidate tips.
//!
//! Each strategy returns cleaned, non-empty candidates in source order and
//! never looks at how many tips the caller needs.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::text_utils::clean_candidate;

/// A `N.` marker followed by whitespace or the end of the text.
///
/// The number may not follow a letter, digit or period, so decimals such as
/// `1.5` never start a marker while `**1. ` does.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w.])(\d+\.)(?:\s|$)").expect("enumeration marker pattern is valid")
});

/// Text following each `N. ` marker, up to the next marker or the end.
///
/// Anything before the first marker is ignored.
pub fn numbered_segments(raw: &str) -> Vec<String> {
    // (start of the number, end of the marker)
    let markers: Vec<(usize, usize)> = MARKER
        .captures_iter(raw)
        .filter_map(|caps| Some((caps.get(1)?.start(), caps.get(0)?.end())))
        .collect();
    let segments: Vec<String> = markers
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, text_start))| {
            let end = markers.get(i + 1).map_or(raw.len(), |&(next, _)| next);
            clean_candidate(&raw[text_start..end])
        })
        .collect();
    trace!(count = segments.len(), "numbered segments");
    segments
}

pub fn line_segments(raw: &str) -> Vec<String> {
    let segments: Vec<String> = raw.lines().filter_map(clean_candidate).collect();
    trace!(count = segments.len(), "line segments");
    segments
}

/// Split on runs of `.`, `!` and `?`.
///
/// Pieces that are only a number, such as the `1` left over from `1. Tip`,
/// are dropped.
pub fn sentence_segments(raw: &str) -> Vec<String> {
    let segments: Vec<String> = raw
        .split(['.', '!', '?'])
        .filter_map(clean_candidate)
        .filter(|s| !s.chars().all(|c| c.is_ascii_digit()))
        .collect();
    trace!(count = segments.len(), "sentence segments");
    segments
}
