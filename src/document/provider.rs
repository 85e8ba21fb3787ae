// src/document/provider.rs
//! Page text providers: turn raw document bytes into ordered [`Page`]s.
//!
//! The extraction core never sees document bytes; everything it consumes
//! comes through one of these adapters.

use std::path::Path;

use crate::document::models::Page;
use crate::utils::error::DocumentError;

/// Converts a document into ordered `(page_number, text)` pairs, dropping
/// pages with no extractable text.
pub trait PageTextProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn pages(&self, bytes: &[u8]) -> Result<Vec<Page>, DocumentError>;
}

/// Decodes PDFs with `pdf-extract`'s re-exported lopdf document, one page at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageProvider;

impl PageTextProvider for PdfPageProvider {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn pages(&self, bytes: &[u8]) -> Result<Vec<Page>, DocumentError> {
        let doc = pdf_extract::Document::load_mem(bytes)
            .map_err(|e| DocumentError::Decode(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        tracing::debug!("PDF has {} pages", page_numbers.len());

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            // Text decoding can panic on malformed content streams
            let extracted = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                doc.extract_text(&[page_number])
            }));
            match extracted {
                Ok(Ok(text)) if !text.trim().is_empty() => pages.push(Page::new(page_number, text)),
                Ok(Ok(_)) => tracing::debug!("Page {} has no text, dropping", page_number),
                // A single undecodable page is treated like an empty one
                Ok(Err(e)) => tracing::warn!("Failed to extract text from page {}: {}", page_number, e),
                Err(_) => tracing::warn!("Text extraction panicked on page {}", page_number),
            }
        }

        if pages.is_empty() {
            return Err(DocumentError::NoText(
                "no page produced text (scanned PDF?)".to_string(),
            ));
        }
        Ok(pages)
    }
}

/// Reads pages that were already extracted elsewhere, as a JSON array of
/// `{"page_number": n, "text": "..."}` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPageProvider;

impl PageTextProvider for JsonPageProvider {
    fn name(&self) -> &'static str {
        "json"
    }

    fn pages(&self, bytes: &[u8]) -> Result<Vec<Page>, DocumentError> {
        let mut pages: Vec<Page> = serde_json::from_slice(bytes)?;
        let total = pages.len();
        pages.retain(|p| p.page_number >= 1 && !p.text.trim().is_empty());
        pages.sort_by_key(|p| p.page_number);

        if pages.len() < total {
            tracing::debug!("Dropped {} blank or unnumbered pages", total - pages.len());
        }
        Ok(pages)
    }
}

/// Picks a provider from the file extension (`.pdf` or `.json`).
pub fn provider_for_path(path: &Path) -> Result<Box<dyn PageTextProvider>, DocumentError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => Ok(Box::new(PdfPageProvider)),
        Some("json") => Ok(Box::new(JsonPageProvider)),
        _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_provider_sorts_and_drops_blank_pages() {
        let json = r#"[
            {"page_number": 3, "text": "third"},
            {"page_number": 1, "text": "first"},
            {"page_number": 2, "text": "   \n "}
        ]"#;
        let pages = JsonPageProvider.pages(json.as_bytes()).unwrap();
        assert_eq!(pages, vec![Page::new(1, "first"), Page::new(3, "third")]);
    }

    #[test]
    fn json_provider_rejects_malformed_input() {
        let err = JsonPageProvider.pages(b"{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn pdf_provider_rejects_garbage_bytes() {
        let err = PdfPageProvider.pages(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Decode(_)));
    }

    #[test]
    fn provider_chosen_by_extension() {
        assert_eq!(provider_for_path(Path::new("report.PDF")).unwrap().name(), "pdf");
        assert_eq!(provider_for_path(Path::new("pages.json")).unwrap().name(), "json");
        assert!(matches!(
            provider_for_path(Path::new("report.docx")),
            Err(DocumentError::UnsupportedFormat(_))
        ));
    }
}
