//! Company settings repository.
//!
//! The settings live in a single row holding a JSON object. Reads flatten
//! the object together with the row's `id`, `createdAt` and `updatedAt`.

use hris_core::payroll::{SettingsError, merge_settings};
use hris_shared::AppError;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::entities::company_settings;

/// Error types for company settings operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanySettingsError {
    /// The patch is not a JSON object.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CompanySettingsError> for AppError {
    fn from(err: CompanySettingsError) -> Self {
        match err {
            CompanySettingsError::Settings(e) => e.into(),
            CompanySettingsError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Company settings repository.
#[derive(Debug, Clone)]
pub struct CompanySettingsRepository {
    db: DatabaseConnection,
}

impl CompanySettingsRepository {
    /// Creates a new company settings repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the settings document, or an empty object if none was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self) -> Result<Map<String, Value>, DbErr> {
        Ok(find_row(&self.db)
            .await?
            .map(|row| flatten(&row))
            .unwrap_or_default())
    }

    /// Shallow-merges `patch` into the stored document, creating it on first
    /// write, and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `Settings` if `patch` is not an object, `Database` on query
    /// failure.
    pub async fn update(&self, patch: &Value) -> Result<Map<String, Value>, CompanySettingsError> {
        let existing = find_row(&self.db).await?;
        let current = existing
            .as_ref()
            .map(|row| document(&row.settings))
            .unwrap_or_default();
        let merged = merge_settings(&current, patch)?;

        let row = write_row(&self.db, existing, merged, chrono::Utc::now().into()).await?;
        Ok(flatten(&row))
    }
}

/// Reads the single settings row, if any.
pub(crate) async fn find_row<C>(db: &C) -> Result<Option<company_settings::Model>, DbErr>
where
    C: ConnectionTrait,
{
    company_settings::Entity::find()
        .order_by_asc(company_settings::Column::CreatedAt)
        .one(db)
        .await
}

/// Replaces the stored document, inserting the row if it does not exist.
pub(crate) async fn write_row<C>(
    db: &C,
    existing: Option<company_settings::Model>,
    settings: Map<String, Value>,
    now: DateTimeWithTimeZone,
) -> Result<company_settings::Model, DbErr>
where
    C: ConnectionTrait,
{
    match existing {
        Some(row) => {
            let mut active: company_settings::ActiveModel = row.into();
            active.settings = Set(Value::Object(settings));
            active.updated_at = Set(now);
            active.update(db).await
        }
        None => {
            let row = company_settings::ActiveModel {
                id: Set(Uuid::new_v4()),
                settings: Set(Value::Object(settings)),
                created_at: Set(now),
                updated_at: Set(now),
            };
            row.insert(db).await
        }
    }
}

/// Stored keys of a settings value; anything but an object reads as empty.
pub(crate) fn document(settings: &Value) -> Map<String, Value> {
    settings.as_object().cloned().unwrap_or_default()
}

fn flatten(row: &company_settings::Model) -> Map<String, Value> {
    let mut out = document(&row.settings);
    out.insert("id".to_string(), Value::String(row.id.to_string()));
    out.insert(
        "createdAt".to_string(),
        Value::String(row.created_at.to_rfc3339()),
    );
    out.insert(
        "updatedAt".to_string(),
        Value::String(row.updated_at.to_rfc3339()),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_adds_row_fields() {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let row = company_settings::Model {
            id: Uuid::nil(),
            settings: json!({"payDate": 25, "currency": "EGP"}),
            created_at: now,
            updated_at: now,
        };

        let flat = flatten(&row);
        assert_eq!(flat["payDate"], 25);
        assert_eq!(flat["currency"], "EGP");
        assert_eq!(flat["id"], Uuid::nil().to_string());
        assert!(flat.contains_key("createdAt"));
        assert!(flat.contains_key("updatedAt"));
    }

    #[test]
    fn test_non_object_document_reads_empty() {
        assert!(document(&json!([1, 2, 3])).is_empty());
        assert!(document(&Value::Null).is_empty());
    }
}
