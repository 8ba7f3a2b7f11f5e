//! Pending approvals across every payroll configuration kind.

use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::Serialize;
use serde_json::{Map, Value};

use super::payroll_config::{ConfigEntity, ConfigError, pending_tagged};
use crate::entities::{
    allowances, benefits, insurance_brackets, pay_grades, pay_types, payroll_policies,
    signing_bonuses, tax_rules,
};

/// Reads draft records for reviewers.
#[derive(Debug, Clone)]
pub struct PendingApprovalRepository {
    db: DatabaseConnection,
}

impl PendingApprovalRepository {
    /// Creates a new pending approval repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every draft record grouped by collection key.
    ///
    /// Each kind has an entry, empty when nothing waits for review. Records
    /// carry a `configType` field naming their route segment.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn list(&self) -> Result<Map<String, Value>, ConfigError> {
        let mut pending = Map::new();
        collect::<pay_types::Entity, _>(&self.db, &mut pending).await?;
        collect::<pay_grades::Entity, _>(&self.db, &mut pending).await?;
        collect::<allowances::Entity, _>(&self.db, &mut pending).await?;
        collect::<insurance_brackets::Entity, _>(&self.db, &mut pending).await?;
        collect::<tax_rules::Entity, _>(&self.db, &mut pending).await?;
        collect::<benefits::Entity, _>(&self.db, &mut pending).await?;
        collect::<signing_bonuses::Entity, _>(&self.db, &mut pending).await?;
        collect::<payroll_policies::Entity, _>(&self.db, &mut pending).await?;
        Ok(pending)
    }
}

async fn collect<E, C>(db: &C, pending: &mut Map<String, Value>) -> Result<(), ConfigError>
where
    E: ConfigEntity,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    let records = pending_tagged::<E, _>(db).await?;
    pending.insert(E::KIND.collection_key().to_string(), Value::Array(records));
    Ok(())
}
