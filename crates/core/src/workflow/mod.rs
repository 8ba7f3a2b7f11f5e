//! Approval workflow for payroll configuration records.
//!
//! Every configuration record starts as a draft and is either approved or
//! rejected by a reviewer. Once decided, a record never flips to the other
//! decision; repeating the same decision leaves it untouched.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (ConfigStatus, WorkflowAction)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{ConfigStatus, WorkflowAction};
