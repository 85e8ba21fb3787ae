// src/pipeline.rs
//! Runs one document through page extraction and litigation extraction as an
//! isolated unit of work.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::document::{provider_for_path, Page};
use crate::extractors::{LitigationExtractor, LitigationReport};
use crate::utils::error::AppError;

/// Result of processing one input file.
#[derive(Debug)]
pub struct ProcessedDocument {
    pub path: PathBuf,
    pub pages: Vec<Page>,
    pub report: LitigationReport,
}

impl ProcessedDocument {
    /// File stem used to name output files.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }
}

/// Reads `path`, converts it to pages and extracts litigation facts.
///
/// Decoding and pattern matching are CPU-bound and run on the blocking pool.
pub async fn process_document(
    path: &Path,
    extractor: Arc<LitigationExtractor>,
) -> Result<ProcessedDocument, AppError> {
    let provider = provider_for_path(path)?;
    let bytes = tokio::fs::read(path).await?;
    tracing::info!("Read {} ({} bytes) with {} provider", path.display(), bytes.len(), provider.name());
    let source = path.display().to_string();

    let (pages, report) = tokio::task::spawn_blocking(move || {
        let pages = provider.pages(&bytes)?;
        let report = extractor.extract(&pages).with_source(source);
        Ok::<_, AppError>((pages, report))
    })
    .await
    .map_err(|e| AppError::Processing(format!("extraction task for {} failed: {}", path.display(), e)))??;

    tracing::info!(
        "{}: {} pages, {} sections, {} cases",
        path.display(),
        pages.len(),
        report.sections.len(),
        report.cases.len()
    );

    Ok(ProcessedDocument {
        path: path.to_path_buf(),
        pages,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::utils::error::DocumentError;

    fn extractor() -> Arc<LitigationExtractor> {
        Arc::new(LitigationExtractor::from_config(&ExtractionConfig::default()).unwrap())
    }

    #[test]
    fn processes_json_pages_file() {
        let path = std::env::temp_dir().join(format!("litigation_pipeline_{}.json", std::process::id()));
        let pages = serde_json::json!([
            {"page_number": 1, "text": "SECTION 3: LITIGATION INFORMATION\nSubject as Defendant\nBK-Q1-2019\nCase Status ACTIVE"},
            {"page_number": 2, "text": "SECTION 4: TRADE"}
        ]);
        std::fs::write(&path, pages.to_string()).unwrap();

        let doc = tokio_test::block_on(process_document(&path, extractor())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.report.sections[0].pages, vec![1, 2]);
        assert_eq!(doc.report.cases[0].case_no, "BK-Q1-2019");
        assert_eq!(doc.report.cases[0].status.as_deref(), Some("ACTIVE"));
        assert_eq!(doc.report.source, path.display().to_string());
        assert!(doc.stem().starts_with("litigation_pipeline_"));
    }

    #[test]
    fn unsupported_extension_fails_before_reading() {
        let err = tokio_test::block_on(process_document(Path::new("missing.txt"), extractor())).unwrap_err();
        assert!(matches!(err, AppError::Document(DocumentError::UnsupportedFormat(_))));
    }
}
