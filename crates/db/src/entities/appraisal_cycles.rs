//! `SeaORM` Entity for the appraisal_cycles table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appraisal_cycles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cycle_type: String,
    pub start_date: Date,
    pub end_date: Date,
    pub manager_due_date: Option<Date>,
    pub employee_acknowledgement_due_date: Option<Date>,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub template_assignments: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
