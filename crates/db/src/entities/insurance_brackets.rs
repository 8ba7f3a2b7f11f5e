//! `SeaORM` Entity for the insurance_brackets table.
//!
//! Social insurance brackets.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ConfigStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurance_brackets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub min_salary: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub max_salary: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub employee_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub employer_rate: Decimal,
    pub status: ConfigStatus,
    pub created_by: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub rejected_by: Option<String>,
    pub rejected_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
