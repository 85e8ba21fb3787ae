// src/document/mod.rs
pub mod models;
pub mod provider;

pub use models::{join_pages, Page};
pub use provider::{provider_for_path, JsonPageProvider, PageTextProvider, PdfPageProvider};
