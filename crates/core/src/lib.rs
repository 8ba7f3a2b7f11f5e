//! Core business rules for the HRIS backend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `auth` - Password hashing, system roles and the role-matching rule
//! - `workflow` - Draft/approved/rejected lifecycle of payroll configuration
//! - `payroll` - Configuration kinds, policy types, field rules, settings and snapshots

pub mod auth;
pub mod payroll;
pub mod workflow;
