// src/policy/mod.rs
pub mod banks;
pub mod rules;

pub use banks::{all_banks, bank_policy, BankPolicy, ParameterKind, PolicyParameter};
pub use rules::{evaluate, ParameterResult, Verdict};
