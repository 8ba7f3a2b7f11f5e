//! Request extractors.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use validator::Validate;

use crate::error::ApiError;
use hris_shared::AppError;

/// JSON body that is deserialized and then validated.
///
/// Malformed JSON and failed validation are both answered with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(Self(value))
    }
}

/// JSON body that may be absent.
///
/// An empty body yields `None`; a present body must be valid JSON.
#[derive(Debug, Clone)]
pub struct OptionalJson<T>(pub Option<T>);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice(&bytes)
            .map(|value| Self(Some(value)))
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")).into())
    }
}

/// Maps axum's JSON rejection onto a 400 validation error.
pub(crate) fn json_rejection(rejection: JsonRejection) -> ApiError {
    AppError::Validation(rejection.body_text()).into()
}

/// Deserializes a field that distinguishes "absent" from `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent is `None`, `null` is `Some(None)`, a value is `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
