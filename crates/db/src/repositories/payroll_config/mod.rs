//! Payroll configuration repository.
//!
//! The eight configuration kinds share one lifecycle (create as draft, edit,
//! approve or reject, delete), so the storage code is written once over
//! [`ConfigEntity`] and each kind only supplies its inputs, patching and
//! field rules.

mod compensation;
mod policies;
mod statutory;

use std::marker::PhantomData;

use chrono::Utc;
use hris_core::payroll::{ConfigKind, RuleViolation};
use hris_core::workflow::{ConfigStatus, WorkflowAction, WorkflowError, WorkflowService};
use hris_shared::AppError;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

pub use compensation::{
    CreateAllowanceInput, CreateBenefitInput, CreatePayGradeInput, CreatePayTypeInput,
    CreateSigningBonusInput, UpdateAllowanceInput, UpdateBenefitInput, UpdatePayGradeInput,
    UpdatePayTypeInput, UpdateSigningBonusInput,
};
pub use policies::{CreatePolicyInput, UpdatePolicyInput};
pub use statutory::{
    CreateInsuranceBracketInput, CreateTaxRuleInput, UpdateInsuranceBracketInput,
    UpdateTaxRuleInput,
};

/// Error types for payroll configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Record not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Human label of the kind.
        kind: &'static str,
        /// Requested ID.
        id: Uuid,
    },

    /// A field failed a payroll rule.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// Review decision not allowed.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A stored snapshot could not be read back.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { .. } => Self::NotFound(err.to_string()),
            ConfigError::Rule(v) => v.into(),
            ConfigError::Workflow(w) => w.into(),
            ConfigError::Snapshot(msg) => Self::Internal(msg),
            ConfigError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// A table holding one kind of payroll configuration.
///
/// Every such table carries the same review columns (`status`,
/// `created_by`, `approved_*`, `rejected_*`, timestamps); the
/// `config_record!` macro implements the accessors for them.
pub trait ConfigEntity: EntityTrait {
    /// Which configuration kind this table stores.
    const KIND: ConfigKind;

    /// Fields accepted on create.
    type Create: Send;

    /// Fields accepted on update, all optional.
    type Patch: Send;

    /// Builds a new draft record.
    fn build(input: Self::Create, now: DateTimeWithTimeZone) -> Self::Model;

    /// Applies the present fields of a patch.
    fn apply_patch(model: &mut Self::Model, patch: Self::Patch);

    /// Checks the domain fields of a record.
    ///
    /// # Errors
    ///
    /// Returns the first field that breaks a rule.
    fn check(model: &Self::Model) -> Result<(), RuleViolation>;

    /// Primary key column.
    fn id_column() -> Self::Column;

    /// Review status column.
    fn status_column() -> Self::Column;

    /// Creation time column.
    fn created_at_column() -> Self::Column;

    /// Record ID.
    fn record_id(model: &Self::Model) -> Uuid;

    /// Current review status.
    fn record_status(model: &Self::Model) -> ConfigStatus;

    /// Writes the audit fields of a review decision.
    fn record_review(model: &mut Self::Model, action: &WorkflowAction);

    /// Sets `updated_at`.
    fn touch(model: &mut Self::Model, now: DateTimeWithTimeZone);

    /// Converts a record into an active model with every column set.
    fn into_active(model: Self::Model) -> Self::ActiveModel;
}

/// Implements the review-column accessors of [`ConfigEntity`] for an entity
/// module, given its domain fields.
macro_rules! config_record {
    ($module:ident { $($field:ident),* $(,)? }) => {
        fn id_column() -> $module::Column {
            $module::Column::Id
        }

        fn status_column() -> $module::Column {
            $module::Column::Status
        }

        fn created_at_column() -> $module::Column {
            $module::Column::CreatedAt
        }

        fn record_id(model: &$module::Model) -> uuid::Uuid {
            model.id
        }

        fn record_status(model: &$module::Model) -> hris_core::workflow::ConfigStatus {
            model.status.into()
        }

        fn record_review(
            model: &mut $module::Model,
            action: &hris_core::workflow::WorkflowAction,
        ) {
            use hris_core::workflow::WorkflowAction;
            match action {
                WorkflowAction::Approve { approved_by, approved_at } => {
                    model.approved_by = Some(approved_by.clone());
                    model.approved_at = Some((*approved_at).into());
                }
                WorkflowAction::Reject { rejected_by, rejected_at } => {
                    model.rejected_by = Some(rejected_by.clone());
                    model.rejected_at = Some((*rejected_at).into());
                }
                WorkflowAction::Unchanged(_) => {}
            }
            model.status = action.new_status().into();
        }

        fn touch(model: &mut $module::Model, now: sea_orm::prelude::DateTimeWithTimeZone) {
            model.updated_at = now;
        }

        fn into_active(model: $module::Model) -> $module::ActiveModel {
            use sea_orm::Set;
            $module::ActiveModel {
                id: Set(model.id),
                $($field: Set(model.$field),)*
                status: Set(model.status),
                created_by: Set(model.created_by),
                approved_by: Set(model.approved_by),
                approved_at: Set(model.approved_at),
                rejected_by: Set(model.rejected_by),
                rejected_at: Set(model.rejected_at),
                created_at: Set(model.created_at),
                updated_at: Set(model.updated_at),
            }
        }
    };
}

pub(crate) use config_record;

/// Review decision requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Approve a draft.
    Approve,
    /// Reject a draft.
    Reject,
}

/// Repository for one kind of payroll configuration.
#[derive(Debug, Clone)]
pub struct ConfigRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> ConfigRepository<E>
where
    E: ConfigEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    /// Creates a new repository for the kind stored in `E`.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Creates a draft record.
    ///
    /// # Errors
    ///
    /// Returns `Rule` if a field is out of range, `Database` on query failure.
    pub async fn create(&self, input: E::Create) -> Result<E::Model, ConfigError> {
        let model = E::build(input, Utc::now().into());
        E::check(&model)?;

        let created = E::into_active(model).insert(&self.db).await?;
        debug!(kind = %E::KIND, id = %E::record_id(&created), "Created draft record");
        Ok(created)
    }

    /// Lists every record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<E::Model>, ConfigError> {
        Ok(list_all::<E, _>(&self.db).await?)
    }

    /// Finds a record by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this ID.
    pub async fn get(&self, id: Uuid) -> Result<E::Model, ConfigError> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await?
            .ok_or(ConfigError::NotFound {
                kind: E::KIND.label(),
                id,
            })
    }

    /// Applies a partial update and returns the merged record.
    ///
    /// Review status and audit fields are never touched here.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist, `Rule` if the merged
    /// record breaks a field rule.
    pub async fn update(&self, id: Uuid, patch: E::Patch) -> Result<E::Model, ConfigError> {
        let mut model = self.get(id).await?;
        E::apply_patch(&mut model, patch);
        E::check(&model)?;
        E::touch(&mut model, Utc::now().into());

        let updated = E::into_active(model).update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing was deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), ConfigError> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ConfigError::NotFound {
                kind: E::KIND.label(),
                id,
            });
        }
        Ok(())
    }

    /// Approves a draft record.
    ///
    /// # Errors
    ///
    /// See [`Self::decide`].
    pub async fn approve(&self, id: Uuid, actor: &str) -> Result<E::Model, ConfigError> {
        self.decide(id, Decision::Approve, actor).await
    }

    /// Rejects a draft record.
    ///
    /// # Errors
    ///
    /// See [`Self::decide`].
    pub async fn reject(&self, id: Uuid, actor: &str) -> Result<E::Model, ConfigError> {
        self.decide(id, Decision::Reject, actor).await
    }

    /// Records a review decision.
    ///
    /// Repeating the decision a record already carries returns it unchanged
    /// without writing.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist, `Workflow` if the
    /// record already carries the opposite decision or `actor` is blank.
    pub async fn decide(
        &self,
        id: Uuid,
        decision: Decision,
        actor: &str,
    ) -> Result<E::Model, ConfigError> {
        let mut model = self.get(id).await?;
        let current = E::record_status(&model);

        let action = match decision {
            Decision::Approve => WorkflowService::approve(current, actor)?,
            Decision::Reject => WorkflowService::reject(current, actor)?,
        };
        if action.is_noop() {
            return Ok(model);
        }

        E::record_review(&mut model, &action);
        E::touch(&mut model, Utc::now().into());

        let updated = E::into_active(model).update(&self.db).await?;
        Ok(updated)
    }
}

/// Reads the draft records of a kind, oldest first.
pub(crate) async fn find_pending<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: ConfigEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::status_column().eq(ConfigStatus::Draft.as_str()))
        .order_by_asc(E::created_at_column())
        .all(db)
        .await
}

/// Reads every record of a kind, oldest first.
pub(crate) async fn list_all<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: ConfigEntity,
    C: ConnectionTrait,
{
    E::find().order_by_asc(E::created_at_column()).all(db).await
}

/// Serializes the draft records of a kind, each tagged with `configType`.
pub(crate) async fn pending_tagged<E, C>(db: &C) -> Result<Vec<Value>, ConfigError>
where
    E: ConfigEntity,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    let mut tagged = Vec::new();
    for model in find_pending::<E, _>(db).await? {
        let mut value = to_json::<E>(&model)?;
        if let Value::Object(fields) = &mut value {
            fields.insert(
                "configType".to_string(),
                Value::String(E::KIND.segment().to_string()),
            );
        }
        tagged.push(value);
    }
    Ok(tagged)
}

fn to_json<E>(model: &E::Model) -> Result<Value, ConfigError>
where
    E: ConfigEntity,
    E::Model: Serialize,
{
    serde_json::to_value(model)
        .map_err(|e| ConfigError::Snapshot(format!("{}: {e}", E::KIND.collection_key())))
}

/// Serializes every record of a kind for a snapshot.
pub(crate) async fn dump<E, C>(db: &C) -> Result<Vec<Value>, ConfigError>
where
    E: ConfigEntity,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    list_all::<E, _>(db)
        .await?
        .iter()
        .map(to_json::<E>)
        .collect()
}

/// Replaces every record of a kind with the given snapshot records.
///
/// Returns the number of records written.
pub(crate) async fn replace<E, C>(db: &C, records: &[Value]) -> Result<usize, ConfigError>
where
    E: ConfigEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + DeserializeOwned,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    C: ConnectionTrait,
{
    let models = records
        .iter()
        .cloned()
        .map(serde_json::from_value::<E::Model>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConfigError::Snapshot(format!("{}: {e}", E::KIND.collection_key())))?;

    E::delete_many().exec(db).await?;

    let count = models.len();
    if count > 0 {
        E::insert_many(models.into_iter().map(E::into_active))
            .exec_without_returning(db)
            .await?;
    }
    Ok(count)
}
