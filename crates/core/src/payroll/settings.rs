//! Company-wide settings document.
//!
//! Settings are a free-form JSON object. Updates are shallow: top-level keys
//! in the patch replace the stored ones, everything else is kept.

use hris_shared::AppError;
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys owned by storage that a patch may never overwrite.
pub const RESERVED_KEYS: [&str; 5] = ["id", "_id", "__v", "createdAt", "updatedAt"];

/// Errors from settings updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The patch body was not a JSON object.
    #[error("Company settings must be a JSON object")]
    NotAnObject,
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Returns true if `key` is managed by storage.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Shallow-merges `patch` over `current`, dropping reserved keys.
///
/// # Errors
///
/// Returns `SettingsError::NotAnObject` if `patch` is not an object.
pub fn merge_settings(
    current: &Map<String, Value>,
    patch: &Value,
) -> Result<Map<String, Value>, SettingsError> {
    let patch = patch.as_object().ok_or(SettingsError::NotAnObject)?;

    let mut merged: Map<String, Value> = current
        .iter()
        .filter(|(k, _)| !is_reserved(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for (key, value) in patch {
        if !is_reserved(key) {
            merged.insert(key.clone(), value.clone());
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_patch_overrides_and_keeps() {
        let current = obj(json!({"payDate": 25, "timeZone": "Africa/Cairo"}));
        let merged = merge_settings(&current, &json!({"payDate": 28})).unwrap();

        assert_eq!(merged["payDate"], 28);
        assert_eq!(merged["timeZone"], "Africa/Cairo");
    }

    #[test]
    fn test_nested_values_are_replaced_whole() {
        let current = obj(json!({"currency": {"code": "EGP", "symbol": "E£"}}));
        let merged = merge_settings(&current, &json!({"currency": {"code": "USD"}})).unwrap();

        assert_eq!(merged["currency"], json!({"code": "USD"}));
    }

    #[test]
    fn test_reserved_keys_ignored() {
        let current = obj(json!({"payDate": 25}));
        let merged = merge_settings(
            &current,
            &json!({"_id": "abc", "__v": 3, "createdAt": "x", "updatedAt": "y", "id": 1}),
        )
        .unwrap();

        assert_eq!(merged, current);
    }

    #[test]
    fn test_non_object_patch_rejected() {
        assert_eq!(
            merge_settings(&Map::new(), &json!([1, 2])),
            Err(SettingsError::NotAnObject)
        );
        assert_eq!(
            merge_settings(&Map::new(), &json!("payDate")),
            Err(SettingsError::NotAnObject)
        );
    }

    #[test]
    fn test_null_is_stored() {
        let current = obj(json!({"payDate": 25}));
        let merged = merge_settings(&current, &json!({"payDate": null})).unwrap();
        assert_eq!(merged["payDate"], Value::Null);
    }
}
