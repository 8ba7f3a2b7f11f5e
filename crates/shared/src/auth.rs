//! Authentication types for JWT and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (employee profile ID).
    pub sub: Uuid,
    /// Work email.
    pub email: String,
    /// Primary role display name.
    #[serde(default)]
    pub role: String,
    /// Every role the employee holds.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an employee.
    ///
    /// `role` is the first of `roles`.
    #[must_use]
    pub fn new(
        user_id: Uuid,
        email: &str,
        roles: Vec<String>,
        full_name: &str,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email: email.to_string(),
            role: roles.first().cloned().unwrap_or_default(),
            roles,
            full_name: full_name.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Role claims to authorize against.
    ///
    /// The plural claim wins when present; otherwise the singular one.
    #[must_use]
    pub fn claimed_roles(&self) -> Vec<&str> {
        if self.roles.is_empty() {
            if self.role.trim().is_empty() {
                Vec::new()
            } else {
                vec![self.role.as_str()]
            }
        } else {
            self.roles.iter().map(String::as_str).collect()
        }
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Work email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    /// Employee profile ID.
    pub user_id: Uuid,
    /// Work email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Primary role.
    pub role: String,
    /// True when the employee must choose a new password.
    pub is_temporary_password: bool,
}

/// Change-password request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The new plaintext password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
