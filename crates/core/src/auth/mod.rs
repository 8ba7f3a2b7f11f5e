//! Authentication and authorization rules.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - The fixed set of system roles
//! - Role claim matching for endpoint guards

mod access;
mod password;
mod roles;

#[cfg(test)]
mod access_props;

pub use access::{AccessDenied, authorize, role_matches};
pub use password::{PasswordError, generate_temporary_password, hash_password, verify_password};
pub use roles::{SystemRole, UnknownRole};
