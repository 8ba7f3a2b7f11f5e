//! `SeaORM` Entity for the employee_system_roles table.
//!
//! `roles` holds role display names, e.g. `"HR Manager"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_system_roles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub employee_profile_id: Uuid,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_profiles::Entity",
        from = "Column::EmployeeProfileId",
        to = "super::employee_profiles::Column::Id"
    )]
    EmployeeProfiles,
}

impl Related<super::employee_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
