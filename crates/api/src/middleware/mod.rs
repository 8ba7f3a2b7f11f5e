//! HTTP middleware.

pub mod auth;
pub mod roles;

pub use auth::{AuthFailure, AuthUser, MaybeAuthUser, auth_middleware};
pub use roles::{guarded, role_guard};
