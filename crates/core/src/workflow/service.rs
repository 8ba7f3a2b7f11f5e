//! Workflow service for configuration review decisions.

use chrono::Utc;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{ConfigStatus, WorkflowAction};

/// Stateless service deciding review transitions.
///
/// Callers read the current status, ask for an action, and persist the
/// returned audit fields unless the action is a no-op.
pub struct WorkflowService;

impl WorkflowService {
    /// Approve a configuration record.
    ///
    /// Draft records become approved. Approving an approved record is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when the record was rejected, `ActorRequired` when
    /// `approved_by` is blank.
    pub fn approve(
        current_status: ConfigStatus,
        approved_by: &str,
    ) -> Result<WorkflowAction, WorkflowError> {
        let approved_by = require_actor(approved_by)?;

        match current_status {
            ConfigStatus::Draft => Ok(WorkflowAction::Approve {
                approved_by,
                approved_at: Utc::now(),
            }),
            ConfigStatus::Approved => Ok(WorkflowAction::Unchanged(ConfigStatus::Approved)),
            ConfigStatus::Rejected => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: ConfigStatus::Approved,
            }),
        }
    }

    /// Reject a configuration record.
    ///
    /// Draft records become rejected. Rejecting a rejected record is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when the record was approved, `ActorRequired` when
    /// `rejected_by` is blank.
    pub fn reject(
        current_status: ConfigStatus,
        rejected_by: &str,
    ) -> Result<WorkflowAction, WorkflowError> {
        let rejected_by = require_actor(rejected_by)?;

        match current_status {
            ConfigStatus::Draft => Ok(WorkflowAction::Reject {
                rejected_by,
                rejected_at: Utc::now(),
            }),
            ConfigStatus::Rejected => Ok(WorkflowAction::Unchanged(ConfigStatus::Rejected)),
            ConfigStatus::Approved => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: ConfigStatus::Rejected,
            }),
        }
    }
}

fn require_actor(actor: &str) -> Result<String, WorkflowError> {
    let actor = actor.trim();
    if actor.is_empty() {
        Err(WorkflowError::ActorRequired)
    } else {
        Ok(actor.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_draft() {
        let action = WorkflowService::approve(ConfigStatus::Draft, "system").unwrap();
        assert_eq!(action.new_status(), ConfigStatus::Approved);
        assert!(matches!(action, WorkflowAction::Approve { ref approved_by, .. } if approved_by == "system"));
    }

    #[test]
    fn test_reject_draft() {
        let action = WorkflowService::reject(ConfigStatus::Draft, " hr-42 ").unwrap();
        assert_eq!(action.new_status(), ConfigStatus::Rejected);
        assert!(matches!(action, WorkflowAction::Reject { ref rejected_by, .. } if rejected_by == "hr-42"));
    }

    #[test]
    fn test_repeat_decision_is_noop() {
        assert!(WorkflowService::approve(ConfigStatus::Approved, "x").unwrap().is_noop());
        assert!(WorkflowService::reject(ConfigStatus::Rejected, "x").unwrap().is_noop());
    }

    #[test]
    fn test_crossing_decision_is_refused() {
        assert_eq!(
            WorkflowService::reject(ConfigStatus::Approved, "x"),
            Err(WorkflowError::InvalidTransition {
                from: ConfigStatus::Approved,
                to: ConfigStatus::Rejected,
            })
        );
        assert!(WorkflowService::approve(ConfigStatus::Rejected, "x").is_err());
    }

    #[test]
    fn test_blank_actor_is_refused() {
        assert_eq!(
            WorkflowService::approve(ConfigStatus::Draft, "   "),
            Err(WorkflowError::ActorRequired)
        );
    }
}
