//! Workflow domain types for configuration lifecycle management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a payroll configuration record.
///
/// The valid transitions are:
/// - Draft → Approved (approve)
/// - Draft → Rejected (reject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigStatus {
    /// Awaiting review; shown under pending approvals.
    #[default]
    Draft,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl ConfigStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ConfigStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a review decision, with the audit data to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Draft record approved.
    Approve {
        /// Who approved it.
        approved_by: String,
        /// When it was approved.
        approved_at: DateTime<Utc>,
    },
    /// Draft record rejected.
    Reject {
        /// Who rejected it.
        rejected_by: String,
        /// When it was rejected.
        rejected_at: DateTime<Utc>,
    },
    /// The record already carries the requested decision.
    Unchanged(ConfigStatus),
}

impl WorkflowAction {
    /// Returns the status the record has after this action.
    #[must_use]
    pub const fn new_status(&self) -> ConfigStatus {
        match self {
            Self::Approve { .. } => ConfigStatus::Approved,
            Self::Reject { .. } => ConfigStatus::Rejected,
            Self::Unchanged(status) => *status,
        }
    }

    /// Returns true if nothing needs to be written.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(ConfigStatus::Draft.as_str(), "draft");
        assert_eq!(ConfigStatus::Approved.as_str(), "approved");
        assert_eq!(ConfigStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_default_is_draft() {
        assert_eq!(ConfigStatus::default(), ConfigStatus::Draft);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConfigStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
