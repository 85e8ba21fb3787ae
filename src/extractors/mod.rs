// src/extractors/mod.rs
pub mod cases;
pub mod litigation;
pub mod models;
pub mod patterns;
pub mod role;
pub mod section;
pub mod summary;

// Re-export key extraction types for convenience
pub use cases::extract_cases;
pub use litigation::LitigationExtractor;
pub use models::{CaseRecord, LegalSuitsSummary, LitigationReport, Role, Section};
pub use patterns::{CasePatterns, PatternSet, RoleBlockPatterns, RoleMarkerPattern};
pub use role::{MarkerScanRole, NameMatchRole, RoleStrategy};
pub use section::locate_sections;
pub use summary::legal_suits_count;
