//! Password hashing with Argon2id.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{
        PasswordHasher, PasswordVerifier, SaltString,
        rand_core::{OsRng, RngCore},
    },
};
use thiserror::Error;

/// Characters used for generated temporary passwords (no look-alikes).
const TEMP_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,
}

impl From<PasswordError> for hris_shared::AppError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Hashes a password using Argon2id and returns the PHC string.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use hris_core::auth::hash_password;
///
/// let hash = hash_password("Password123!").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only malformed hashes and internal failures are errors.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the hash is not an Argon2 PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(argon2::password_hash::Error::Algorithm) => Err(PasswordError::InvalidHash),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// Generates a random password handed to an employee after a reset.
#[must_use]
pub fn generate_temporary_password(len: usize) -> String {
    let mut rng = OsRng;
    (0..len)
        .map(|_| {
            let idx = rng.next_u32() as usize % TEMP_ALPHABET.len();
            char::from(TEMP_ALPHABET[idx])
        })
        .collect()
}
