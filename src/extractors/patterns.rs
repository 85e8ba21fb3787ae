// src/extractors/patterns.rs

// --- Imports ---
use crate::config::ExtractionConfig;
use crate::extractors::models::Role;
use crate::utils::error::ExtractError;
use crate::utils::text::flexible_phrase_pattern;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// --- Default Pattern Set (Lazy Static) ---
static DEFAULT_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(&ExtractionConfig::default())
        .expect("Failed to compile default extraction patterns")
});

// --- Data Structures ---

/// A compiled role marker.
#[derive(Debug, Clone)]
pub struct RoleMarkerPattern {
    pub pattern: Regex,
    pub role: Role,
}

/// Patterns searched for inside a single case's window.
#[derive(Debug, Clone)]
pub struct CasePatterns {
    pub case_identifier: Regex,
    pub court: Regex,
    pub plaintiff: Regex,
    pub status: Regex,
    pub hearing_date: Regex,
}

/// Party blocks tested for the company name under NAME_MATCH.
#[derive(Debug, Clone)]
pub struct RoleBlockPatterns {
    pub plaintiff: Regex,
    pub defendant: Regex,
}

/// All compiled patterns, built once per configuration and shared read-only.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub start_marker: Regex,
    pub end_marker: Regex,
    pub role_markers: Vec<RoleMarkerPattern>,
    pub cases: CasePatterns,
    pub role_blocks: RoleBlockPatterns,
}

impl PatternSet {
    /// Compiles every pattern in `config`, naming the option on failure.
    ///
    /// Section and role markers always match case-insensitively; attribute
    /// and party-block patterns are compiled as written (add `(?i)` to relax them).
    pub fn compile(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        let role_markers = config
            .role_markers
            .iter()
            .map(|m| -> Result<RoleMarkerPattern, ExtractError> {
                Ok(RoleMarkerPattern {
                    pattern: build("role_markers", &flexible_phrase_pattern(&m.marker), true)?,
                    role: m.role,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            start_marker: build("start_marker", &config.start_marker, true)?,
            end_marker: build("end_marker", &config.end_marker, true)?,
            role_markers,
            cases: CasePatterns {
                case_identifier: build("case_identifier_pattern", &config.case_identifier_pattern, false)?,
                court: build("court_pattern", &config.court_pattern, false)?,
                plaintiff: build("plaintiff_pattern", &config.plaintiff_pattern, false)?,
                status: build("status_pattern", &config.status_pattern, false)?,
                hearing_date: build("hearing_date_pattern", &config.hearing_date_pattern, false)?,
            },
            role_blocks: RoleBlockPatterns {
                plaintiff: build("plaintiff_block_pattern", &config.plaintiff_block_pattern, false)?,
                defendant: build("defendant_block_pattern", &config.defendant_block_pattern, false)?,
            },
        })
    }

    /// The default credit-report patterns.
    pub fn defaults() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

fn build(name: &str, pattern: &str, case_insensitive: bool) -> Result<Regex, ExtractError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| ExtractError::InvalidPattern {
            name: name.to_string(),
            source,
        })
}
