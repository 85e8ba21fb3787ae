// src/utils/text.rs
//! Small text-window helpers shared by the section locator and the case
//! extractor. Offsets are byte offsets into `&str`; radii are in characters.

use regex::Regex;

/// Byte bounds of the window spanning `radius` characters either side of
/// the byte range `start..end`, clamped to the text bounds.
///
/// `start` and `end` must lie on char boundaries (regex match offsets do).
pub fn window_bounds(text: &str, start: usize, end: usize, radius: usize) -> (usize, usize) {
    let lo = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let hi = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    (lo, hi)
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds a case-insensitive pattern for a literal phrase, tolerating any
/// run of whitespace (including line breaks) between its words.
pub fn flexible_phrase_pattern(phrase: &str) -> String {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    format!(r"(?i){}", words.join(r"\s+"))
}

/// Value of the first capture group when the pattern has one, otherwise the
/// whole match. Empty captures count as absent.
pub fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    let caps = re.captures(haystack)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    let value = m.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
