// src/extractors/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which party the report's subject plays within a section or case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Defendant,
    Plaintiff,
    #[default]
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Defendant => "DEFENDANT",
            Role::Plaintiff => "PLAINTIFF",
            Role::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// One located occurrence of the target section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub text: String,    // constituent page texts, newline-joined in page order
    pub pages: Vec<u32>, // page numbers, ascending
    pub role: Role,      // last role marker seen before the section closed
}

/// A single legal case found inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintiff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_date: Option<String>,
    pub role: Role,
    pub section_index: u32,     // 1-based position of the owning section
    pub section_pages: Vec<u32>, // copied from the owning section
}

impl CaseRecord {
    /// A record with only the identifier and role set.
    pub fn new(case_no: impl Into<String>, role: Role) -> Self {
        Self {
            case_no: case_no.into(),
            court: None,
            plaintiff: None,
            status: None,
            hearing_date: None,
            role,
            section_index: 1,
            section_pages: Vec::new(),
        }
    }
}

/// Headline "Legal Suits N" figure from a report summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSuitsSummary {
    pub count: u32,
    pub matched: String, // the text that produced the count, for auditing
}

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LitigationReport {
    pub source: String, // input the pages came from; empty when extracted from bare pages
    pub sections: Vec<Section>,
    pub cases: Vec<CaseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_suits: Option<LegalSuitsSummary>,
}

impl LitigationReport {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// True when no section was located at all ("section not found").
    pub fn section_not_found(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&Role::Defendant).unwrap(), "\"DEFENDANT\"");
        assert_eq!(Role::default(), Role::Unknown);
        assert_eq!(Role::Plaintiff.to_string(), "PLAINTIFF");
    }

    #[test]
    fn absent_case_fields_are_omitted_from_json() {
        let record = CaseRecord::new("BK-A1-2023", Role::Unknown);
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("court"));
        assert!(!obj.contains_key("hearing_date"));
        assert_eq!(obj["case_no"], "BK-A1-2023");
        assert_eq!(obj["role"], "UNKNOWN");
    }
}
