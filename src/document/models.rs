// src/document/models.rs
use serde::{Deserialize, Serialize};

/// One page of extracted document text.
///
/// Produced by a [`PageTextProvider`](crate::document::PageTextProvider);
/// pages whose text is blank never make it this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32, // 1-based, ascending within a document
    pub text: String,
}

impl Page {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// Joins page texts with newlines, in the order given.
pub fn join_pages(pages: &[Page]) -> String {
    pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
