//! Payroll configuration rules.
//!
//! # Modules
//!
//! - `kinds` - The eight configuration record kinds and their names
//! - `policy` - Payroll policy types, applicability and rule definitions
//! - `rules` - Field-level checks shared by every kind
//! - `settings` - Company settings document merging
//! - `snapshot` - Configuration backup snapshot format

pub mod kinds;
pub mod policy;
pub mod rules;
pub mod settings;
pub mod snapshot;

pub use kinds::ConfigKind;
pub use policy::{Applicability, PolicyType, RuleDefinition};
pub use rules::RuleViolation;
pub use settings::{SettingsError, merge_settings};
pub use snapshot::ConfigSnapshot;
