// src/policy/banks.rs
//! Static per-bank lending policy table. Loaded once; never touched by the
//! extraction core.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use crate::utils::error::PolicyError;

pub const NO_LEGAL_SUITS: &str = "No Legal Suits at All";
pub const LEGAL_SUIT_DEFENDANT: &str = "Legal Suit (Defendant)";
pub const TRADE_BUREAU: &str = "Trade Bureau";
pub const LEGAL_STATUS_ON_LOAN: &str = "Legal Status on Loan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    Preference,
    #[serde(rename = "Strict 2")]
    Strict2,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterKind::Preference => "Preference",
            ParameterKind::Strict2 => "Strict 2",
            ParameterKind::NotApplicable => "Not Applicable",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyParameter {
    pub parameter: &'static str,
    pub kind: ParameterKind,
    pub criteria: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankPolicy {
    pub bank: &'static str,
    pub parameters: Vec<PolicyParameter>,
}

fn param(parameter: &'static str, kind: ParameterKind, criteria: &'static str) -> PolicyParameter {
    PolicyParameter {
        parameter,
        kind,
        criteria,
    }
}

static BANK_POLICIES: Lazy<Vec<BankPolicy>> = Lazy::new(|| {
    use ParameterKind::*;

    // (bank, defendant criteria, trade bureau kind + criteria, loan criteria, no-suits criteria)
    let rows: [(&'static str, &'static str, ParameterKind, &'static str, &'static str, &'static str); 6] = [
        ("RHB Bank", "Zero tolerance defendant", Strict2, ">RM5k needs approval", "Require settlement", "No legal suits"),
        ("Maybank", "Zero tolerance", NotApplicable, "N/A", "Settlement", "No suits"),
        ("CIMB Bank", "Zero tolerance", Strict2, "With settlement", "Settlement", "No suits"),
        ("Standard Chartered", "Zero tolerance", Preference, "Approval possible", "Settlement", "No suits"),
        ("SME Bank", "Zero tolerance", Strict2, "Settlement/arrangement", "Settlement", "No suits"),
        ("Bank Rakyat", "Zero tolerance", Strict2, "Settlement/arrangement", "Settlement", "No suits"),
    ];

    rows.into_iter()
        .map(|(bank, defendant, trade_kind, trade, loan, no_suits)| BankPolicy {
            bank,
            parameters: vec![
                param(NO_LEGAL_SUITS, Preference, no_suits),
                param(LEGAL_SUIT_DEFENDANT, Strict2, defendant),
                param(TRADE_BUREAU, trade_kind, trade),
                param(LEGAL_STATUS_ON_LOAN, Strict2, loan),
            ],
        })
        .collect()
});

/// All banks, in display order.
pub fn all_banks() -> &'static [BankPolicy] {
    &BANK_POLICIES
}

/// Looks a bank up by name, ignoring case and surrounding whitespace.
pub fn bank_policy(name: &str) -> Result<&'static BankPolicy, PolicyError> {
    let wanted = name.trim();
    all_banks()
        .iter()
        .find(|b| b.bank.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| PolicyError::UnknownBank {
            name: name.to_string(),
            known: all_banks().iter().map(|b| b.bank).collect::<Vec<_>>().join(", "),
        })
}
