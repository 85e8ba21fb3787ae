// src/extractors/litigation.rs

// --- Imports ---
use crate::config::{ExtractionConfig, RolePolicyKind};
use crate::document::{join_pages, Page};
use crate::extractors::cases;
use crate::extractors::models::{CaseRecord, LitigationReport, Role, Section};
use crate::extractors::patterns::PatternSet;
use crate::extractors::role::{strategy_for, RoleStrategy};
use crate::extractors::section;
use crate::extractors::summary;
use crate::utils::error::ExtractError;

/// The configured extraction engine: compiled patterns, one role strategy
/// and a window radius. Immutable once built, so one instance can serve many
/// documents concurrently.
#[derive(Debug)]
pub struct LitigationExtractor {
    patterns: PatternSet,
    role_strategy: Box<dyn RoleStrategy>,
    window_radius: usize,
}

impl LitigationExtractor {
    pub fn new(
        patterns: PatternSet,
        role_strategy: Box<dyn RoleStrategy>,
        window_radius: usize,
    ) -> Result<Self, ExtractError> {
        if window_radius == 0 {
            return Err(ExtractError::InvalidWindowRadius);
        }
        Ok(Self {
            patterns,
            role_strategy,
            window_radius,
        })
    }

    /// Compiles `config` and validates the role policy up front.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        let patterns = PatternSet::compile(config)?;
        let role_strategy = strategy_for(config.role_policy, config.company_name.as_deref(), &patterns.role_blocks)?;
        tracing::info!(
            "Extractor ready: role policy {:?}, window radius {}, {} role markers",
            config.role_policy,
            config.window_radius,
            patterns.role_markers.len()
        );
        Self::new(patterns, role_strategy, config.window_radius)
    }

    pub fn role_policy(&self) -> RolePolicyKind {
        self.role_strategy.policy()
    }

    pub fn window_radius(&self) -> usize {
        self.window_radius
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Every occurrence of the litigation section, in document order.
    pub fn locate_sections(&self, pages: &[Page]) -> Vec<Section> {
        section::locate_sections(
            pages,
            &self.patterns.start_marker,
            &self.patterns.end_marker,
            &self.patterns.role_markers,
        )
    }

    /// Case records in one section's text, using the configured radius.
    pub fn extract_cases(&self, section_text: &str, role: Role) -> Vec<CaseRecord> {
        cases::extract_cases(
            section_text,
            role,
            &self.patterns.cases,
            self.role_strategy.as_ref(),
            self.window_radius,
        )
    }

    /// Runs the whole pipeline over one document's pages.
    ///
    /// "Section not found" is an empty `sections` list, never an error.
    pub fn extract(&self, pages: &[Page]) -> LitigationReport {
        let sections = self.locate_sections(pages);
        if sections.is_empty() {
            tracing::info!("Litigation section not found in {} pages", pages.len());
        }

        let mut all_cases = Vec::new();
        for (idx, section) in sections.iter().enumerate() {
            let section_index = idx as u32 + 1;
            let mut found = self.extract_cases(&section.text, section.role);
            tracing::info!(
                "Section {} (pages {:?}, role {}): {} cases",
                section_index,
                section.pages,
                section.role,
                found.len()
            );
            for record in &mut found {
                record.section_index = section_index;
                record.section_pages = section.pages.clone();
            }
            all_cases.extend(found);
        }

        LitigationReport {
            source: String::new(),
            sections,
            cases: all_cases,
            legal_suits: summary::legal_suits_count(&join_pages(pages)),
        }
    }
}
