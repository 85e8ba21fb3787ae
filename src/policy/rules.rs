// src/policy/rules.rs
//! Turns extracted litigation facts into per-parameter verdicts for a bank.

use serde::Serialize;

use crate::extractors::models::{LitigationReport, Role};
use crate::policy::banks::{
    BankPolicy, ParameterKind, LEGAL_STATUS_ON_LOAN, LEGAL_SUIT_DEFENDANT, NO_LEGAL_SUITS,
};

/// Case statuses that count as resolved for "Legal Status on Loan".
const RESOLVED_STATUSES: &[&str] = &["SETTLED", "WITHDRAWN", "DISMISSED", "STRUCK", "CLOSED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Pass,
    Fail,
    Conditional,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// One row of the bank's parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterResult {
    pub index: usize, // 1-based
    pub parameter: &'static str,
    pub kind: ParameterKind,
    pub criteria: &'static str,
    pub status: Option<Verdict>, // None: no facts to decide on yet
    pub detail: String,
}

/// Evaluates every parameter of `bank` against `report`.
pub fn evaluate(bank: &BankPolicy, report: &LitigationReport) -> Vec<ParameterResult> {
    bank.parameters
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let (status, detail) = if p.kind == ParameterKind::NotApplicable {
                (Some(Verdict::NotApplicable), String::new())
            } else {
                match p.parameter {
                    NO_LEGAL_SUITS => no_legal_suits(report),
                    LEGAL_SUIT_DEFENDANT => legal_suit_defendant(report),
                    LEGAL_STATUS_ON_LOAN => legal_status_on_loan(report),
                    // Trade bureau facts are not extracted from the litigation section
                    _ => (None, String::new()),
                }
            };
            ParameterResult {
                index: idx + 1,
                parameter: p.parameter,
                kind: p.kind,
                criteria: p.criteria,
                status,
                detail,
            }
        })
        .collect()
}

fn no_legal_suits(report: &LitigationReport) -> (Option<Verdict>, String) {
    let (count, source) = match &report.legal_suits {
        Some(summary) => (summary.count as usize, "report summary"),
        None => (report.cases.len(), "litigation section"),
    };
    if count == 0 {
        (
            Some(Verdict::Pass),
            format!("No legal suits detected (Legal Suits = 0, from {source})."),
        )
    } else {
        (
            Some(Verdict::Fail),
            format!("Legal suits detected (Legal Suits = {count}, from {source})."),
        )
    }
}

fn legal_suit_defendant(report: &LitigationReport) -> (Option<Verdict>, String) {
    let defendant: Vec<&str> = report
        .cases
        .iter()
        .filter(|c| c.role == Role::Defendant)
        .map(|c| c.case_no.as_str())
        .collect();
    let unknown = report.cases.iter().filter(|c| c.role == Role::Unknown).count();

    if !defendant.is_empty() {
        (
            Some(Verdict::Fail),
            format!("Subject is defendant in {} case(s): {}.", defendant.len(), defendant.join(", ")),
        )
    } else if report.cases.is_empty() {
        (Some(Verdict::Pass), "No legal cases found.".to_string())
    } else if unknown > 0 {
        (
            Some(Verdict::Conditional),
            format!("{unknown} case(s) with undetermined role; manual review needed."),
        )
    } else {
        (
            Some(Verdict::Pass),
            format!("Subject is plaintiff in all {} case(s).", report.cases.len()),
        )
    }
}

fn legal_status_on_loan(report: &LitigationReport) -> (Option<Verdict>, String) {
    if report.cases.is_empty() {
        return (Some(Verdict::Pass), "No legal cases found.".to_string());
    }

    let open: Vec<String> = report
        .cases
        .iter()
        .filter(|c| {
            !c.status
                .as_deref()
                .is_some_and(|s| RESOLVED_STATUSES.contains(&s.to_uppercase().as_str()))
        })
        .map(|c| format!("{} ({})", c.case_no, c.status.as_deref().unwrap_or("status unknown")))
        .collect();

    if open.is_empty() {
        (Some(Verdict::Pass), "All cases settled or closed.".to_string())
    } else {
        (
            Some(Verdict::Conditional),
            format!("Settlement required for: {}.", open.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::models::{CaseRecord, LegalSuitsSummary};
    use crate::policy::banks::bank_policy;
    use pretty_assertions::assert_eq;

    fn case(id: &str, role: Role, status: Option<&str>) -> CaseRecord {
        let mut c = CaseRecord::new(id, role);
        c.status = status.map(str::to_string);
        c
    }

    fn statuses(rows: &[ParameterResult]) -> Vec<Option<Verdict>> {
        rows.iter().map(|r| r.status).collect()
    }

    #[test]
    fn clean_report_passes() {
        let report = LitigationReport {
            legal_suits: Some(LegalSuitsSummary {
                count: 0,
                matched: "Legal Suits 0".into(),
            }),
            ..LitigationReport::default()
        };
        let rows = evaluate(bank_policy("RHB Bank").unwrap(), &report);
        assert_eq!(
            statuses(&rows),
            vec![Some(Verdict::Pass), Some(Verdict::Pass), None, Some(Verdict::Pass)]
        );
        assert!(rows[0].detail.contains("Legal Suits = 0"));
    }

    #[test]
    fn defendant_case_fails_and_open_case_needs_settlement() {
        let report = LitigationReport {
            cases: vec![
                case("BK-A1-2023", Role::Defendant, Some("ACTIVE")),
                case("BK-B2-2022", Role::Plaintiff, Some("Settled")),
            ],
            ..LitigationReport::default()
        };
        let rows = evaluate(bank_policy("CIMB Bank").unwrap(), &report);
        assert_eq!(
            statuses(&rows),
            vec![Some(Verdict::Fail), Some(Verdict::Fail), None, Some(Verdict::Conditional)]
        );
        assert!(rows[0].detail.contains("from litigation section"));
        assert!(rows[1].detail.contains("BK-A1-2023"));
        assert_eq!(rows[3].detail, "Settlement required for: BK-A1-2023 (ACTIVE).");
    }

    #[test]
    fn unknown_roles_are_conditional() {
        let report = LitigationReport {
            cases: vec![case("BK-A1-2023", Role::Unknown, None)],
            ..LitigationReport::default()
        };
        let rows = evaluate(bank_policy("SME Bank").unwrap(), &report);
        assert_eq!(rows[1].status, Some(Verdict::Conditional));
        assert_eq!(rows[3].detail, "Settlement required for: BK-A1-2023 (status unknown).");
    }

    #[test]
    fn not_applicable_rows_are_marked() {
        let rows = evaluate(bank_policy("Maybank").unwrap(), &LitigationReport::default());
        assert_eq!(rows[2].status, Some(Verdict::NotApplicable));
        assert_eq!(rows[2].detail, "");
        assert_eq!(rows[2].index, 3);
    }
}
