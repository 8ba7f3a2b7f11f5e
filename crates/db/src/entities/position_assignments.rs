//! `SeaORM` Entity for the position_assignments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "position_assignments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_profile_id: Uuid,
    pub position_id: Uuid,
    pub department_id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_profiles::Entity",
        from = "Column::EmployeeProfileId",
        to = "super::employee_profiles::Column::Id"
    )]
    EmployeeProfiles,
    #[sea_orm(
        belongs_to = "super::positions::Entity",
        from = "Column::PositionId",
        to = "super::positions::Column::Id"
    )]
    Positions,
}

impl Related<super::employee_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeProfiles.def()
    }
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
