//! Workflow error types for configuration review.

use hris_shared::AppError;
use thiserror::Error;

use crate::workflow::types::ConfigStatus;

/// Errors that can occur during a review decision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Attempted to reverse an earlier decision.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ConfigStatus,
        /// The attempted target status.
        to: ConfigStatus,
    },

    /// No reviewer could be attributed.
    #[error("Reviewer is required")]
    ActorRequired,
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } => 409,
            Self::ActorRequired => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::ActorRequired => "ACTOR_REQUIRED",
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::InvalidTransition { .. } => Self::Conflict(err.to_string()),
            WorkflowError::ActorRequired => Self::Validation(err.to_string()),
        }
    }
}
