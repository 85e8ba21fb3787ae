// src/lib.rs
//! Locates litigation sections in credit-bureau report pages and extracts
//! case records from them, with an optional bank policy evaluation on top.

pub mod config;
pub mod document;
pub mod extractors;
pub mod pipeline;
pub mod policy;
pub mod storage;
pub mod utils;

pub use config::{ExtractionConfig, RoleMarker, RolePolicyKind};
pub use document::Page;
pub use extractors::{CaseRecord, LitigationExtractor, LitigationReport, Role, Section};
pub use utils::AppError;
