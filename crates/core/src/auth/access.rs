//! Role claim matching for guarded endpoints.
//!
//! A claim satisfies a required role when, after trimming and lowercasing:
//! - it equals the role's display name, or
//! - it equals the role's canonical key, or
//! - both the claim and the display name contain `admin`.
//!
//! So any admin-flavoured claim passes any admin-flavoured requirement:
//! `super-admin` satisfies `System Admin`.

use std::fmt;

use hris_shared::AppError;

use super::roles::SystemRole;

/// Substring that makes two roles interchangeable.
const ADMIN_MARKER: &str = "admin";

/// A caller's claims matched none of the required roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    /// Display names of the roles the endpoint accepts.
    pub required: Vec<String>,
    /// Roles carried by the caller's token.
    pub claimed: Vec<String>,
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yours = if self.claimed.is_empty() {
            "none".to_string()
        } else {
            self.claimed.join(", ")
        };
        write!(
            f,
            "Access denied. Required: [{}]. Yours: [{yours}]",
            self.required.join(", ")
        )
    }
}

impl std::error::Error for AccessDenied {}

impl From<AccessDenied> for AppError {
    fn from(denied: AccessDenied) -> Self {
        Self::Forbidden(denied.to_string())
    }
}

/// Returns true when a single claim satisfies a single required role.
#[must_use]
pub fn role_matches(claim: &str, required: SystemRole) -> bool {
    let claim = claim.trim().to_lowercase();
    if claim.is_empty() {
        return false;
    }
    let display = required.display_name().to_lowercase();

    claim == display
        || claim == required.key().to_lowercase()
        || (claim.contains(ADMIN_MARKER) && display.contains(ADMIN_MARKER))
}

/// Checks a caller's claims against an endpoint's requirement list.
///
/// An empty requirement list admits everyone.
///
/// # Errors
///
/// Returns `AccessDenied` listing both sides when nothing matches.
pub fn authorize(claimed: &[&str], required: &[SystemRole]) -> Result<(), AccessDenied> {
    if required.is_empty() {
        return Ok(());
    }

    let granted = claimed
        .iter()
        .any(|claim| required.iter().any(|role| role_matches(claim, *role)));

    if granted {
        Ok(())
    } else {
        Err(AccessDenied {
            required: required
                .iter()
                .map(|r| r.display_name().to_string())
                .collect(),
            claimed: claimed.iter().map(ToString::to_string).collect(),
        })
    }
}
