//! System roles held by employees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A role an employee can hold.
///
/// Each role has a display name (what is stored on the employee and placed in
/// tokens) and a canonical key (the constant-style identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemRole {
    /// Regular department member.
    DepartmentEmployee,
    /// Head of a department.
    DepartmentHead,
    /// HR manager.
    HrManager,
    /// HR staff.
    HrEmployee,
    /// HR administrator.
    HrAdmin,
    /// Payroll specialist.
    PayrollSpecialist,
    /// Payroll manager.
    PayrollManager,
    /// System administrator.
    SystemAdmin,
    /// Legal and policy administrator.
    LegalPolicyAdmin,
    /// Recruiter.
    Recruiter,
    /// Finance staff.
    FinanceStaff,
    /// External job candidate.
    JobCandidate,
}

/// Returned when a string names no known role.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl SystemRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::DepartmentEmployee,
        Self::DepartmentHead,
        Self::HrManager,
        Self::HrEmployee,
        Self::HrAdmin,
        Self::PayrollSpecialist,
        Self::PayrollManager,
        Self::SystemAdmin,
        Self::LegalPolicyAdmin,
        Self::Recruiter,
        Self::FinanceStaff,
        Self::JobCandidate,
    ];

    /// Human-readable name stored on employee records.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DepartmentEmployee => "department employee",
            Self::DepartmentHead => "department head",
            Self::HrManager => "HR Manager",
            Self::HrEmployee => "HR Employee",
            Self::HrAdmin => "HR Admin",
            Self::PayrollSpecialist => "Payroll Specialist",
            Self::PayrollManager => "Payroll Manager",
            Self::SystemAdmin => "System Admin",
            Self::LegalPolicyAdmin => "Legal & Policy Admin",
            Self::Recruiter => "Recruiter",
            Self::FinanceStaff => "Finance Staff",
            Self::JobCandidate => "Job Candidate",
        }
    }

    /// Canonical constant-style key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DepartmentEmployee => "DEPARTMENT_EMPLOYEE",
            Self::DepartmentHead => "DEPARTMENT_HEAD",
            Self::HrManager => "HR_MANAGER",
            Self::HrEmployee => "HR_EMPLOYEE",
            Self::HrAdmin => "HR_ADMIN",
            Self::PayrollSpecialist => "PAYROLL_SPECIALIST",
            Self::PayrollManager => "PAYROLL_MANAGER",
            Self::SystemAdmin => "SYSTEM_ADMIN",
            Self::LegalPolicyAdmin => "LEGAL_POLICY_ADMIN",
            Self::Recruiter => "RECRUITER",
            Self::FinanceStaff => "FINANCE_STAFF",
            Self::JobCandidate => "JOB_CANDIDATE",
        }
    }

    /// Role assigned at login when an employee holds none.
    #[must_use]
    pub const fn fallback() -> Self {
        Self::DepartmentEmployee
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SystemRole {
    type Err = UnknownRole;

    /// Accepts either the display name or the key, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| {
                r.display_name().eq_ignore_ascii_case(needle) || r.key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_display_and_key() {
        assert_eq!("HR Manager".parse(), Ok(SystemRole::HrManager));
        assert_eq!("hr_manager".parse(), Ok(SystemRole::HrManager));
        assert_eq!(
            " legal & policy admin ".parse(),
            Ok(SystemRole::LegalPolicyAdmin)
        );
        assert!("Janitor".parse::<SystemRole>().is_err());
    }

    #[test]
    fn test_display_and_key_are_unique() {
        for (i, a) in SystemRole::ALL.iter().enumerate() {
            for b in &SystemRole::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&SystemRole::LegalPolicyAdmin).unwrap();
        assert_eq!(json, "\"LEGAL_POLICY_ADMIN\"");
        let role: SystemRole = serde_json::from_str("\"PAYROLL_MANAGER\"").unwrap();
        assert_eq!(role, SystemRole::PayrollManager);
    }
}
