//! Payroll configuration record kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the payroll configuration collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfigKind {
    /// Pay types (hourly, monthly, ...).
    #[serde(rename = "pay-types")]
    PayType,
    /// Pay grades with base and gross salary.
    #[serde(rename = "pay-grades")]
    PayGrade,
    /// Allowances added to pay.
    #[serde(rename = "allowances")]
    Allowance,
    /// Social insurance brackets.
    #[serde(rename = "insurance-brackets")]
    InsuranceBracket,
    /// Income tax brackets.
    #[serde(rename = "tax-rules")]
    TaxRule,
    /// Termination and resignation benefits.
    #[serde(rename = "benefits")]
    Benefit,
    /// Signing bonuses per position.
    #[serde(rename = "signing-bonuses")]
    SigningBonus,
    /// Payroll policies.
    #[serde(rename = "policies")]
    Policy,
}

impl ConfigKind {
    /// Every kind, in the order pending approvals are reported.
    pub const ALL: [Self; 8] = [
        Self::PayType,
        Self::PayGrade,
        Self::Allowance,
        Self::InsuranceBracket,
        Self::TaxRule,
        Self::Benefit,
        Self::SigningBonus,
        Self::Policy,
    ];

    /// URL path segment under `/payroll-configuration`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::PayType => "pay-types",
            Self::PayGrade => "pay-grades",
            Self::Allowance => "allowances",
            Self::InsuranceBracket => "insurance-brackets",
            Self::TaxRule => "tax-rules",
            Self::Benefit => "benefits",
            Self::SigningBonus => "signing-bonuses",
            Self::Policy => "policies",
        }
    }

    /// Key used in pending-approval responses and backup snapshots.
    #[must_use]
    pub const fn collection_key(self) -> &'static str {
        match self {
            Self::PayType => "payTypes",
            Self::PayGrade => "payGrades",
            Self::Allowance => "allowances",
            Self::InsuranceBracket => "insuranceBrackets",
            Self::TaxRule => "taxRules",
            Self::Benefit => "benefits",
            Self::SigningBonus => "signingBonuses",
            Self::Policy => "policies",
        }
    }

    /// Singular human-readable name, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PayType => "Pay type",
            Self::PayGrade => "Pay grade",
            Self::Allowance => "Allowance",
            Self::InsuranceBracket => "Insurance bracket",
            Self::TaxRule => "Tax rule",
            Self::Benefit => "Benefit",
            Self::SigningBonus => "Signing bonus",
            Self::Policy => "Payroll policy",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_and_collections_unique() {
        let segments: std::collections::HashSet<_> =
            ConfigKind::ALL.into_iter().map(ConfigKind::segment).collect();
        let collections: std::collections::HashSet<_> =
            ConfigKind::ALL.into_iter().map(ConfigKind::collection_key).collect();
        assert_eq!(segments.len(), ConfigKind::ALL.len());
        assert_eq!(collections.len(), ConfigKind::ALL.len());
    }

    #[test]
    fn test_serde_matches_segment() {
        for kind in ConfigKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.segment()));
        }
    }

    #[test]
    fn test_collection_keys() {
        assert_eq!(ConfigKind::InsuranceBracket.collection_key(), "insuranceBrackets");
        assert_eq!(ConfigKind::SigningBonus.collection_key(), "signingBonuses");
    }
}
