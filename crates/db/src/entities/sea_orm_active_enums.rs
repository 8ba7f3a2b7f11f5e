//! String-backed enums stored in text columns.

use hris_core::payroll::{Applicability as CoreApplicability, PolicyType as CorePolicyType};
use hris_core::workflow::ConfigStatus as CoreStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a payroll configuration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum ConfigStatus {
    /// Awaiting review.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Approved.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<ConfigStatus> for CoreStatus {
    fn from(status: ConfigStatus) -> Self {
        match status {
            ConfigStatus::Draft => Self::Draft,
            ConfigStatus::Approved => Self::Approved,
            ConfigStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<CoreStatus> for ConfigStatus {
    fn from(status: CoreStatus) -> Self {
        match status {
            CoreStatus::Draft => Self::Draft,
            CoreStatus::Approved => Self::Approved,
            CoreStatus::Rejected => Self::Rejected,
        }
    }
}

/// Payroll policy type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PolicyType {
    /// Deduction.
    #[sea_orm(string_value = "Deduction")]
    Deduction,
    /// Allowance.
    #[sea_orm(string_value = "Allowance")]
    Allowance,
    /// Benefit.
    #[sea_orm(string_value = "Benefit")]
    Benefit,
    /// Misconduct.
    #[sea_orm(string_value = "Misconduct")]
    Misconduct,
    /// Leave.
    #[sea_orm(string_value = "Leave")]
    Leave,
}

impl From<CorePolicyType> for PolicyType {
    fn from(t: CorePolicyType) -> Self {
        match t {
            CorePolicyType::Deduction => Self::Deduction,
            CorePolicyType::Allowance => Self::Allowance,
            CorePolicyType::Benefit => Self::Benefit,
            CorePolicyType::Misconduct => Self::Misconduct,
            CorePolicyType::Leave => Self::Leave,
        }
    }
}

/// Payroll policy applicability column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Applicability {
    /// Everyone.
    #[sea_orm(string_value = "All Employees")]
    #[serde(rename = "All Employees")]
    AllEmployees,
    /// Full-time staff.
    #[sea_orm(string_value = "Full Time Employees")]
    #[serde(rename = "Full Time Employees")]
    FullTime,
    /// Part-time staff.
    #[sea_orm(string_value = "Part Time Employees")]
    #[serde(rename = "Part Time Employees")]
    PartTime,
    /// Contractors.
    #[sea_orm(string_value = "Contractors")]
    Contractors,
}

impl From<CoreApplicability> for Applicability {
    fn from(a: CoreApplicability) -> Self {
        match a {
            CoreApplicability::AllEmployees => Self::AllEmployees,
            CoreApplicability::FullTime => Self::FullTime,
            CoreApplicability::PartTime => Self::PartTime,
            CoreApplicability::Contractors => Self::Contractors,
        }
    }
}
