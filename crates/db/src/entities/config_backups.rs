//! `SeaORM` Entity for the config_backups table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "config_backups")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub triggered_by: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub snapshot: Json,
    pub item_count: i32,
    pub last_restored_at: Option<DateTimeWithTimeZone>,
    pub last_restored_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
