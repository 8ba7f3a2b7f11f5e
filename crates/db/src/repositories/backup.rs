//! Configuration backup repository.
//!
//! A backup row stores a [`ConfigSnapshot`] of every configuration
//! collection plus the company settings document. Restoring replaces the
//! live tables with the snapshot inside one transaction.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use hris_core::payroll::ConfigSnapshot;
use hris_shared::AppError;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use super::company_settings::{document, find_row, write_row};
use super::payroll_config::{ConfigEntity, ConfigError, dump, replace};
use crate::entities::{
    allowances, benefits, company_settings, config_backups, insurance_brackets, pay_grades,
    pay_types, payroll_policies, signing_bonuses, tax_rules,
};

/// Error types for backup operations.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// Backup not found.
    #[error("Backup not found: {0}")]
    NotFound(Uuid),

    /// Reading or writing configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BackupError> for AppError {
    fn from(err: BackupError) -> Self {
        match err {
            BackupError::NotFound(_) => Self::NotFound(err.to_string()),
            BackupError::Config(e) => e.into(),
            BackupError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Backup row without its snapshot body.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct BackupSummary {
    /// Backup ID.
    pub id: Uuid,
    /// Who or what took the backup.
    pub triggered_by: Option<String>,
    /// Number of configuration records captured.
    pub item_count: i32,
    /// Last restore time.
    pub last_restored_at: Option<DateTime<FixedOffset>>,
    /// Last restorer.
    pub last_restored_by: Option<String>,
    /// When the backup was taken.
    pub created_at: DateTime<FixedOffset>,
}

/// Result of a restore.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreOutcome {
    /// Restored backup.
    pub backup_id: Uuid,
    /// Who restored it.
    pub restored_by: String,
    /// When it was restored.
    pub restored_at: DateTime<FixedOffset>,
    /// Records written per collection key.
    pub restored: BTreeMap<String, usize>,
    /// Whether a settings document was written.
    pub company_settings_restored: bool,
}

/// Configuration backup repository.
#[derive(Debug, Clone)]
pub struct BackupRepository {
    db: DatabaseConnection,
}

impl BackupRepository {
    /// Creates a new backup repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Captures the current configuration into a new backup row.
    ///
    /// # Errors
    ///
    /// Returns an error if reading configuration or writing the row fails.
    pub async fn run(
        &self,
        triggered_by: Option<String>,
    ) -> Result<config_backups::Model, BackupError> {
        let mut snapshot = ConfigSnapshot::new();
        capture::<pay_types::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<pay_grades::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<allowances::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<insurance_brackets::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<tax_rules::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<benefits::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<signing_bonuses::Entity, _>(&self.db, &mut snapshot).await?;
        capture::<payroll_policies::Entity, _>(&self.db, &mut snapshot).await?;
        snapshot.company_settings = find_row(&self.db)
            .await?
            .map(|row| document(&row.settings));

        let item_count = i32::try_from(snapshot.item_count()).unwrap_or(i32::MAX);
        let counts = snapshot.counts();
        let body = serde_json::to_value(&snapshot)
            .map_err(|e| ConfigError::Snapshot(e.to_string()))?;

        let backup = config_backups::ActiveModel {
            id: Set(Uuid::new_v4()),
            triggered_by: Set(triggered_by),
            snapshot: Set(body),
            item_count: Set(item_count),
            last_restored_at: Set(None),
            last_restored_by: Set(None),
            created_at: Set(Utc::now().into()),
        };
        let backup = backup.insert(&self.db).await?;

        info!(
            backup_id = %backup.id,
            item_count = backup.item_count,
            ?counts,
            triggered_by = backup.triggered_by.as_deref().unwrap_or("-"),
            "Configuration backup taken"
        );
        Ok(backup)
    }

    /// Lists backups, newest first, without their snapshot bodies.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<BackupSummary>, DbErr> {
        config_backups::Entity::find()
            .select_only()
            .columns([
                config_backups::Column::Id,
                config_backups::Column::TriggeredBy,
                config_backups::Column::ItemCount,
                config_backups::Column::LastRestoredAt,
                config_backups::Column::LastRestoredBy,
                config_backups::Column::CreatedAt,
            ])
            .order_by_desc(config_backups::Column::CreatedAt)
            .into_model::<BackupSummary>()
            .all(&self.db)
            .await
    }

    /// Finds a backup with its snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no backup has this ID.
    pub async fn get(&self, id: Uuid) -> Result<config_backups::Model, BackupError> {
        config_backups::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(BackupError::NotFound(id))
    }

    /// Deletes a backup.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing was deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), BackupError> {
        let result = config_backups::Entity::delete_many()
            .filter(config_backups::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(BackupError::NotFound(id));
        }
        Ok(())
    }

    /// Replaces every configuration collection and the settings document
    /// with the contents of a backup.
    ///
    /// Runs in one transaction: either the whole snapshot is applied or
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the backup does not exist, `Config` if the
    /// snapshot cannot be read back, `Database` on write failure.
    pub async fn restore(&self, id: Uuid, restored_by: &str) -> Result<RestoreOutcome, BackupError> {
        let backup = self.get(id).await?;
        let snapshot: ConfigSnapshot = serde_json::from_value(backup.snapshot.clone())
            .map_err(|e| ConfigError::Snapshot(e.to_string()))?;

        let txn = self.db.begin().await?;
        let now: DateTime<FixedOffset> = Utc::now().into();

        let mut restored = BTreeMap::new();
        apply::<pay_types::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<pay_grades::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<allowances::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<insurance_brackets::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<tax_rules::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<benefits::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<signing_bonuses::Entity, _>(&txn, &snapshot, &mut restored).await?;
        apply::<payroll_policies::Entity, _>(&txn, &snapshot, &mut restored).await?;

        let existing = find_row(&txn).await?;
        let company_settings_restored = match snapshot.company_settings {
            Some(settings) => {
                write_row(&txn, existing, settings, now).await?;
                true
            }
            None => {
                company_settings::Entity::delete_many().exec(&txn).await?;
                false
            }
        };

        let mut active: config_backups::ActiveModel = backup.into();
        active.last_restored_at = Set(Some(now));
        active.last_restored_by = Set(Some(restored_by.to_string()));
        active.update(&txn).await?;

        txn.commit().await?;

        info!(backup_id = %id, restored_by, "Configuration backup restored");
        Ok(RestoreOutcome {
            backup_id: id,
            restored_by: restored_by.to_string(),
            restored_at: now,
            restored,
            company_settings_restored,
        })
    }
}

async fn capture<E, C>(db: &C, snapshot: &mut ConfigSnapshot) -> Result<(), ConfigError>
where
    E: ConfigEntity,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    let records = dump::<E, _>(db).await?;
    snapshot.set_collection(E::KIND, records);
    Ok(())
}

async fn apply<E, C>(
    db: &C,
    snapshot: &ConfigSnapshot,
    restored: &mut BTreeMap<String, usize>,
) -> Result<(), ConfigError>
where
    E: ConfigEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + DeserializeOwned,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let count = replace::<E, _>(db, snapshot.collection(E::KIND)).await?;
    restored.insert(E::KIND.collection_key().to_string(), count);
    Ok(())
}
