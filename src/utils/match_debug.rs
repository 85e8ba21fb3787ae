// src/utils/match_debug.rs
use std::fs;
use std::path::Path;

use crate::extractors::models::Section;
use crate::extractors::patterns::PatternSet;
use crate::utils::error::StorageError;

/// Kind of a highlighted match, used as its CSS class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Start,
    End,
    Role,
    Case,
}

impl HighlightKind {
    fn css_class(self) -> &'static str {
        match self {
            HighlightKind::Start => "highlight-start",
            HighlightKind::End => "highlight-end",
            HighlightKind::Role => "highlight-role",
            HighlightKind::Case => "highlight-case",
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Every marker and case-identifier match in `text`, sorted by position.
pub fn collect_highlights(text: &str, patterns: &PatternSet) -> Vec<(usize, usize, HighlightKind)> {
    let mut highlights = Vec::new();
    let mut add = |re: &regex::Regex, kind| {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), kind));
        }
    };

    add(&patterns.start_marker, HighlightKind::Start);
    add(&patterns.end_marker, HighlightKind::End);
    for marker in &patterns.role_markers {
        add(&marker.pattern, HighlightKind::Role);
    }
    add(&patterns.cases.case_identifier, HighlightKind::Case);

    highlights.sort_by_key(|h| h.0); // Sort by position
    highlights
}

/// Renders `text` as an HTML fragment with highlighted spans.
/// Overlapping highlights keep the earliest one.
pub fn render_highlighted(text: &str, highlights: &[(usize, usize, HighlightKind)]) -> String {
    let mut html = String::new();
    let mut last_pos = 0;

    for &(start, end, kind) in highlights {
        if start < last_pos {
            continue;
        }
        html.push_str(&escape_html(&text[last_pos..start]));
        html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}\">",
            kind.css_class(),
            start,
            end
        ));
        html.push_str(&escape_html(&text[start..end]));
        html.push_str("</span>");
        last_pos = end;
    }

    html.push_str(&escape_html(&text[last_pos..]));
    html
}

/// Writes an HTML page showing each located section with its markers and
/// case identifiers highlighted.
pub fn save_sections_debug_html(
    sections: &[Section],
    patterns: &PatternSet,
    path: &Path,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    debug_html.push_str("pre { white-space: pre-wrap; }\n");
    debug_html.push_str(".highlight-start { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-end { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-role { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-case { background-color: #90EE90; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    if sections.is_empty() {
        debug_html.push_str("<p>No section located.</p>\n");
    }
    for (idx, section) in sections.iter().enumerate() {
        debug_html.push_str(&format!(
            "<h2>Section {} &mdash; pages {:?}, role {}</h2>\n<pre>",
            idx + 1,
            section.pages,
            section.role
        ));
        let highlights = collect_highlights(&section.text, patterns);
        debug_html.push_str(&render_highlighted(&section.text, &highlights));
        debug_html.push_str("</pre>\n");
    }

    debug_html.push_str("</body>\n</html>");
    fs::write(path, debug_html)?;

    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}
