//! `SeaORM` Entity for the shifts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shifts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub shift_type_id: Uuid,
    pub start_time: Time,
    pub end_time: Time,
    pub punch_policy: String,
    pub grace_in_minutes: i32,
    pub grace_out_minutes: i32,
    pub requires_approval_for_overtime: bool,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shift_types::Entity",
        from = "Column::ShiftTypeId",
        to = "super::shift_types::Column::Id"
    )]
    ShiftTypes,
}

impl Related<super::shift_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
