//! Payroll policy classification and rule definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{self, RuleViolation};

/// What a payroll policy governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    /// Salary deductions.
    Deduction,
    /// Allowances.
    Allowance,
    /// Benefits.
    Benefit,
    /// Misconduct penalties.
    Misconduct,
    /// Leave-related pay.
    Leave,
}

impl PolicyType {
    /// Returns the string representation used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deduction => "Deduction",
            Self::Allowance => "Allowance",
            Self::Benefit => "Benefit",
            Self::Misconduct => "Misconduct",
            Self::Leave => "Leave",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which employees a payroll policy covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Applicability {
    /// Everyone.
    #[serde(rename = "All Employees")]
    AllEmployees,
    /// Full-time staff.
    #[serde(rename = "Full Time Employees")]
    FullTime,
    /// Part-time staff.
    #[serde(rename = "Part Time Employees")]
    PartTime,
    /// Contractors.
    #[serde(rename = "Contractors")]
    Contractors,
}

impl Applicability {
    /// Returns the string representation used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllEmployees => "All Employees",
            Self::FullTime => "Full Time Employees",
            Self::PartTime => "Part Time Employees",
            Self::Contractors => "Contractors",
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric parameters of a payroll policy.
///
/// Any parameter left out of the body is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleDefinition {
    /// Percentage of salary, `0..=100`.
    pub percentage: Decimal,
    /// Flat amount.
    pub fixed_amount: Decimal,
    /// Amount above which the policy kicks in.
    pub threshold_amount: Decimal,
}

impl RuleDefinition {
    /// Checks every parameter.
    pub fn check(&self) -> Result<(), RuleViolation> {
        rules::percentage("ruleDefinition.percentage", self.percentage)?;
        rules::non_negative("ruleDefinition.fixedAmount", self.fixed_amount)?;
        rules::non_negative("ruleDefinition.thresholdAmount", self.threshold_amount)
    }
}
