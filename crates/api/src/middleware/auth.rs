//! Bearer token authentication.
//!
//! [`auth_middleware`] runs on every request. A valid token stores its
//! [`Claims`] in the request extensions; a missing or bad token stores the
//! [`AuthFailure`] instead and the request continues. Routes that need a
//! caller then reject through [`AuthUser`] or the role guard.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{AppState, error::ApiError};
use hris_shared::{AppError, Claims, JwtError};

/// Why a request carries no claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No `Authorization: Bearer` header.
    MissingToken,
    /// Token past its expiry.
    Expired,
    /// Token malformed or signed with another key.
    Invalid,
}

impl AuthFailure {
    /// Message returned to the client.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingToken => "Authorization header with Bearer token is required",
            Self::Expired => "Token has expired",
            Self::Invalid => "Invalid or malformed token",
        }
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        Self::Unauthorized(failure.message().to_string())
    }
}

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Decodes the bearer token, if any, into request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token);

    match token.map(|t| state.jwt_service.validate_token(t)) {
        Some(Ok(claims)) => {
            request.extensions_mut().insert(claims);
        }
        Some(Err(JwtError::Expired)) => {
            request.extensions_mut().insert(AuthFailure::Expired);
        }
        Some(Err(e)) => {
            debug!(error = %e, "Rejected bearer token");
            request.extensions_mut().insert(AuthFailure::Invalid);
        }
        None => {
            request.extensions_mut().insert(AuthFailure::MissingToken);
        }
    }

    next.run(request).await
}

/// Claims of the request, or the reason there are none.
pub(crate) fn claims_from(extensions: &axum::http::Extensions) -> Result<&Claims, AuthFailure> {
    extensions.get::<Claims>().ok_or_else(|| {
        extensions
            .get::<AuthFailure>()
            .copied()
            .unwrap_or(AuthFailure::MissingToken)
    })
}

/// Extractor for the authenticated caller.
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let employee_id = auth.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the employee ID from the claims.
    #[must_use]
    pub const fn user_id(&self) -> uuid::Uuid {
        self.0.user_id()
    }

    /// Returns the caller's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        claims_from(&parts.extensions)
            .cloned()
            .map(AuthUser)
            .map_err(ApiError::from)
    }
}

/// Extractor for a caller that may be anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Claims>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Claims>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Basic dXNlcg=="), None);
    }

    #[test]
    fn test_claims_from_defaults_to_missing() {
        let ext = axum::http::Extensions::new();
        assert_eq!(claims_from(&ext).unwrap_err(), AuthFailure::MissingToken);

        let mut ext = axum::http::Extensions::new();
        ext.insert(AuthFailure::Expired);
        assert_eq!(claims_from(&ext).unwrap_err(), AuthFailure::Expired);
    }
}
