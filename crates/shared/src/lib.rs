//! Shared types, errors, and configuration for the HRIS backend.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Token claims and auth request/response payloads
//! - JWT issuing and validation
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

#[cfg(test)]
mod jwt_tests;

pub use auth::Claims;
pub use config::{AppConfig, JwtConfig};
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
