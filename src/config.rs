// src/config.rs
//! Extraction configuration: every marker and pattern the core uses, plus
//! the window radius and role policy. Loaded from an optional JSON file and
//! overridden field by field from the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extractors::models::Role;
use crate::utils::error::AppError;

pub const DEFAULT_WINDOW_RADIUS: usize = 400;

/// How a case's role is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RolePolicyKind {
    /// Role comes from "subject as ..." markers in the section text.
    #[default]
    MarkerScan,
    /// Role comes from finding the company name in the Plaintiff/Defendant blocks.
    NameMatch,
}

/// A literal phrase that, when found in a section, sets its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMarker {
    pub marker: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub start_marker: String,
    pub end_marker: String,
    pub role_markers: Vec<RoleMarker>,
    pub case_identifier_pattern: String,
    pub court_pattern: String,
    pub plaintiff_pattern: String,
    pub status_pattern: String,
    pub hearing_date_pattern: String,
    /// Party blocks searched for the company name under NAME_MATCH. Matched
    /// case-sensitively so upper-case headings are not taken for blocks.
    pub plaintiff_block_pattern: String,
    pub defendant_block_pattern: String,
    pub window_radius: usize,
    pub role_policy: RolePolicyKind,
    pub company_name: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            start_marker: r"SECTION\s+3\s*:\s*LITIGATION\s+INFORMATION".to_string(),
            end_marker: r"SECTION\s+4\s*:".to_string(),
            role_markers: vec![
                RoleMarker {
                    marker: "Subject as Defendant".to_string(),
                    role: Role::Defendant,
                },
                RoleMarker {
                    marker: "Subject as Plaintiff".to_string(),
                    role: Role::Plaintiff,
                },
            ],
            case_identifier_pattern: r"BK-[A-Z0-9\-/]+-\d{4}".to_string(),
            // Up to three location words, kept only when they end the line
            court_pattern: r"(?m)((?:SESSIONS|MAGISTRATES?|HIGH)\s+COURT(?:(?:[ \t]+[A-Z]+){0,3}[ \t\r]*$)?)"
                .to_string(),
            plaintiff_pattern: r"(?s)Plaintiff\s+(.+?)\s+Local\s+No".to_string(),
            status_pattern: r"Case\s+Status\s+([A-Z]+)".to_string(),
            hearing_date_pattern: r"Hearing\s+Date\s+(\d{1,2}\s+[A-Za-z]+\s+\d{4})".to_string(),
            plaintiff_block_pattern: r"(?s)\bPlaintiff\s+(.+?)\s+Local\s+No".to_string(),
            defendant_block_pattern: r"(?s)\bDefendant\s+(.+?)\s+Local\s+No".to_string(),
            window_radius: DEFAULT_WINDOW_RADIUS,
            role_policy: RolePolicyKind::MarkerScan,
            company_name: None,
        }
    }
}

impl ExtractionConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("Invalid config file '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Loaded extraction config from {}", path.display());
        Ok(config)
    }
}
