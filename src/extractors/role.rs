// src/extractors/role.rs
//! Role strategies: decide which party the report subject plays in a case.
//! Exactly one strategy is active per extractor.

use std::fmt;

use regex::Regex;

use crate::config::RolePolicyKind;
use crate::extractors::models::Role;
use crate::extractors::patterns::RoleBlockPatterns;
use crate::utils::error::ExtractError;
use crate::utils::text::normalize_whitespace;

pub trait RoleStrategy: Send + Sync + fmt::Debug {
    fn policy(&self) -> RolePolicyKind;

    /// Role for one case, given its owning section's role and the text that
    /// belongs to the case.
    fn resolve(&self, section_role: Role, window: &str) -> Role;
}

/// Uses the role found by scanning the section for "subject as ..." markers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerScanRole;

impl RoleStrategy for MarkerScanRole {
    fn policy(&self) -> RolePolicyKind {
        RolePolicyKind::MarkerScan
    }

    fn resolve(&self, section_role: Role, _window: &str) -> Role {
        section_role
    }
}

/// Looks for a company name in the Plaintiff blocks, then the Defendant blocks.
#[derive(Debug, Clone)]
pub struct NameMatchRole {
    company: String, // uppercased, whitespace-normalized
    blocks: RoleBlockPatterns,
}

impl NameMatchRole {
    pub fn new(company_name: &str, blocks: RoleBlockPatterns) -> Result<Self, ExtractError> {
        let company = normalize_whitespace(company_name).to_uppercase();
        if company.is_empty() {
            return Err(ExtractError::MissingCompanyName);
        }
        Ok(Self { company, blocks })
    }

    /// True when any block `re` finds in `text` names the company.
    fn any_block_names(&self, re: &Regex, text: &str) -> bool {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .any(|block| normalize_whitespace(block.as_str()).to_uppercase().contains(&self.company))
    }
}

impl RoleStrategy for NameMatchRole {
    fn policy(&self) -> RolePolicyKind {
        RolePolicyKind::NameMatch
    }

    fn resolve(&self, _section_role: Role, window: &str) -> Role {
        if self.any_block_names(&self.blocks.plaintiff, window) {
            Role::Plaintiff
        } else if self.any_block_names(&self.blocks.defendant, window) {
            Role::Defendant
        } else {
            Role::Unknown
        }
    }
}

/// Builds the strategy for `policy`, failing fast when NAME_MATCH has no company.
pub fn strategy_for(
    policy: RolePolicyKind,
    company_name: Option<&str>,
    blocks: &RoleBlockPatterns,
) -> Result<Box<dyn RoleStrategy>, ExtractError> {
    match policy {
        RolePolicyKind::MarkerScan => {
            if company_name.is_some() {
                tracing::debug!("company_name is ignored under MARKER_SCAN");
            }
            Ok(Box::new(MarkerScanRole))
        }
        RolePolicyKind::NameMatch => {
            let name = company_name.ok_or(ExtractError::MissingCompanyName)?;
            Ok(Box::new(NameMatchRole::new(name, blocks.clone())?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::patterns::PatternSet;

    const WINDOW: &str = "Plaintiff ACME SDN BHD Local No 123 Defendant JOHN DOE Local No 456";

    fn name_match(company: &str) -> NameMatchRole {
        NameMatchRole::new(company, PatternSet::defaults().role_blocks).unwrap()
    }

    #[test]
    fn name_match_finds_plaintiff_then_defendant() {
        assert_eq!(name_match("ACME SDN BHD").resolve(Role::Unknown, WINDOW), Role::Plaintiff);
        assert_eq!(name_match("John  Doe").resolve(Role::Unknown, WINDOW), Role::Defendant);
        assert_eq!(name_match("GLOBEX BHD").resolve(Role::Defendant, WINDOW), Role::Unknown);
    }

    #[test]
    fn name_match_handles_wrapped_blocks() {
        let window = "Plaintiff\nACME\n  SDN BHD\nLocal No 9";
        assert_eq!(name_match("acme sdn bhd").resolve(Role::Unknown, window), Role::Plaintiff);
    }

    #[test]
    fn upper_case_role_heading_is_not_a_party_block() {
        let window = "CASES WITH SUBJECT AS DEFENDANT\nBK-A1-2023\n\
                      Plaintiff JANE DOE Local No 5\nDefendant ACME SDN BHD Local No 6";
        assert_eq!(name_match("ACME SDN BHD").resolve(Role::Unknown, window), Role::Defendant);
        assert_eq!(name_match("JANE DOE").resolve(Role::Unknown, window), Role::Plaintiff);
    }

    #[test]
    fn every_defendant_block_is_tested() {
        // The mixed-case heading opens a block that ends at the Plaintiff's anchor
        let window = "Subject as Defendant\nBK-A1-2023\n\
                      Plaintiff JANE DOE Local No 5\nDefendant ACME SDN BHD Local No 6";
        assert_eq!(name_match("ACME SDN BHD").resolve(Role::Unknown, window), Role::Defendant);
    }

    #[test]
    fn block_patterns_come_from_config() {
        let config = crate::config::ExtractionConfig {
            plaintiff_block_pattern: r"(?s)Claimant:\s*(.+?)\s+Ref".into(),
            defendant_block_pattern: r"(?s)Respondent:\s*(.+?)\s+Ref".into(),
            ..Default::default()
        };
        let blocks = PatternSet::compile(&config).unwrap().role_blocks;
        let acme = NameMatchRole::new("ACME", blocks).unwrap();
        let window = "Claimant: BANK ONE Ref 1\nRespondent: ACME Ref 2";
        assert_eq!(acme.resolve(Role::Unknown, window), Role::Defendant);
    }

    #[test]
    fn marker_scan_keeps_section_role() {
        assert_eq!(MarkerScanRole.resolve(Role::Defendant, WINDOW), Role::Defendant);
    }

    #[test]
    fn name_match_without_company_fails_fast() {
        let blocks = PatternSet::defaults().role_blocks;
        assert!(matches!(
            strategy_for(RolePolicyKind::NameMatch, None, &blocks),
            Err(ExtractError::MissingCompanyName)
        ));
        assert!(matches!(
            strategy_for(RolePolicyKind::NameMatch, Some("   "), &blocks),
            Err(ExtractError::MissingCompanyName)
        ));
        let s = strategy_for(RolePolicyKind::NameMatch, Some("ACME"), &blocks).unwrap();
        assert_eq!(s.policy(), RolePolicyKind::NameMatch);
    }
}
