// src/extractors/summary.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::models::LegalSuitsSummary;

// Summary tables usually read "Legal Suits 3"
static LEGAL_SUITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Legal\s+Suits\s+(\d+)").expect("Failed to compile LEGAL_SUITS_RE")
});

// Line breaks sometimes glue or split the words, or add a colon
static LEGAL_SUITS_LOOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Legal\s*Suits[\s:]*?(\d+)").expect("Failed to compile LEGAL_SUITS_LOOSE_RE")
});

/// Finds the headline legal-suit count in a report's full text.
///
/// Returns `None` when no summary line is present; callers decide whether
/// that means zero.
pub fn legal_suits_count(text: &str) -> Option<LegalSuitsSummary> {
    let summary = [&*LEGAL_SUITS_RE, &*LEGAL_SUITS_LOOSE_RE]
        .into_iter()
        .find_map(|re| {
            let caps = re.captures(text)?;
            let count = caps.get(1)?.as_str().parse::<u32>().ok()?;
            Some(LegalSuitsSummary {
                count,
                matched: caps.get(0)?.as_str().to_string(),
            })
        });

    match &summary {
        Some(s) => tracing::debug!("Legal suits summary: {} ('{}')", s.count, s.matched),
        None => tracing::debug!("No legal suits summary line found"),
    }
    summary
}
