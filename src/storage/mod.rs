// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::models::{LitigationReport, Role};
use crate::policy::ParameterResult;
use crate::utils::error::StorageError;

/// Section metadata written to the report (the text itself is saved separately).
#[derive(Debug, Serialize)]
struct SectionMeta<'a> {
    index: usize,
    pages: &'a [u32],
    role: Role,
    text_length: usize,
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory for one document's outputs: /base_dir/<stem>/
    pub fn document_dir(&self, stem: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the case records as a pretty JSON array.
    pub fn save_cases(&self, stem: &str, report: &LitigationReport) -> Result<PathBuf, StorageError> {
        let file_path = self.document_dir(stem)?.join(format!("{}_legal_suits.json", stem));
        write_json(&file_path, &report.cases)?;
        tracing::info!("Saved {} case records to {}", report.cases.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves the full report: section metadata, cases, summary and policy rows.
    pub fn save_report(
        &self,
        stem: &str,
        bank: &str,
        report: &LitigationReport,
        evaluation: &[ParameterResult],
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.document_dir(stem)?.join(format!("{}_report.json", stem));

        let sections: Vec<SectionMeta> = report
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| SectionMeta {
                index: idx + 1,
                pages: &s.pages,
                role: s.role,
                text_length: s.text.len(),
            })
            .collect();

        let document = serde_json::json!({
            "source": report.source,
            "bank": bank,
            "section_found": !report.section_not_found(),
            "sections": sections,
            "legal_suits": report.legal_suits,
            "case_count": report.cases.len(),
            "cases": report.cases,
            "evaluation": evaluation,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        write_json(&file_path, &document)?;
        tracing::info!("Saved report to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves each section's raw text as <stem>_section_<n>.txt.
    pub fn save_section_text(&self, stem: &str, report: &LitigationReport) -> Result<Vec<PathBuf>, StorageError> {
        let dir = self.document_dir(stem)?;
        let mut paths = Vec::with_capacity(report.sections.len());
        for (idx, section) in report.sections.iter().enumerate() {
            let file_path = dir.join(format!("{}_section_{}.txt", stem, idx + 1));
            fs::write(&file_path, &section.text).map_err(StorageError::IoError)?;
            paths.push(file_path);
        }
        tracing::debug!("Saved {} section text files under {}", paths.len(), dir.display());
        Ok(paths)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(path, body).map_err(StorageError::IoError)
}
