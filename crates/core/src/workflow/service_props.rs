//! Property-based tests for WorkflowService.

use proptest::prelude::*;

use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::{ConfigStatus, WorkflowAction};

fn arb_status() -> impl Strategy<Value = ConfigStatus> {
    prop_oneof![
        Just(ConfigStatus::Draft),
        Just(ConfigStatus::Approved),
        Just(ConfigStatus::Rejected),
    ]
}

fn arb_actor() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9@._-]{1,40}"
}

#[derive(Debug, Clone, Copy)]
enum Decision {
    Approve,
    Reject,
}

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![Just(Decision::Approve), Just(Decision::Reject)]
}

fn apply(
    status: ConfigStatus,
    decision: Decision,
    actor: &str,
) -> Result<WorkflowAction, WorkflowError> {
    match decision {
        Decision::Approve => WorkflowService::approve(status, actor),
        Decision::Reject => WorkflowService::reject(status, actor),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Drafts accept either decision and record the reviewer.
    #[test]
    fn prop_draft_accepts_any_decision(decision in arb_decision(), actor in arb_actor()) {
        let action = apply(ConfigStatus::Draft, decision, &actor).unwrap();
        prop_assert!(!action.is_noop());
        match action {
            WorkflowAction::Approve { approved_by, .. } => prop_assert_eq!(approved_by, actor),
            WorkflowAction::Reject { rejected_by, .. } => prop_assert_eq!(rejected_by, actor),
            WorkflowAction::Unchanged(_) => prop_assert!(false, "draft must change"),
        }
    }

    /// Applying the same decision twice ends in the same status as once.
    #[test]
    fn prop_decisions_are_idempotent(decision in arb_decision(), actor in arb_actor()) {
        let once = apply(ConfigStatus::Draft, decision, &actor).unwrap().new_status();
        let twice = apply(once, decision, &actor).unwrap();
        prop_assert!(twice.is_noop());
        prop_assert_eq!(twice.new_status(), once);
    }

    /// A decided record never reaches the opposite decision.
    #[test]
    fn prop_no_status_reversal(
        start in arb_status(),
        decisions in proptest::collection::vec(arb_decision(), 1..6),
        actor in arb_actor(),
    ) {
        let mut status = start;
        for decision in decisions {
            match apply(status, decision, &actor) {
                Ok(action) => {
                    let next = action.new_status();
                    if status != ConfigStatus::Draft {
                        prop_assert_eq!(next, status);
                    }
                    status = next;
                }
                Err(WorkflowError::InvalidTransition { from, to }) => {
                    prop_assert_eq!(from, status);
                    prop_assert_ne!(from, ConfigStatus::Draft);
                    prop_assert_ne!(to, status);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }

    /// Nothing ever returns a record to draft.
    #[test]
    fn prop_never_back_to_draft(start in arb_status(), decision in arb_decision(), actor in arb_actor()) {
        if let Ok(action) = apply(start, decision, &actor) {
            prop_assert_ne!(action.new_status(), ConfigStatus::Draft);
        }
    }
}
