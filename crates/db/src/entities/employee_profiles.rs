//! `SeaORM` Entity for the employee_profiles table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_profiles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub national_id: String,
    #[sea_orm(unique)]
    pub work_email: String,
    pub hire_date: Date,
    pub status: String,
    pub contract_type: String,
    pub work_type: String,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub primary_position_id: Option<Uuid>,
    pub primary_department_id: Option<Uuid>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub is_temporary_password: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// First and last name joined.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::employee_system_roles::Entity")]
    EmployeeSystemRoles,
    #[sea_orm(has_many = "super::position_assignments::Entity")]
    PositionAssignments,
}

impl Related<super::employee_system_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeSystemRoles.def()
    }
}

impl Related<super::position_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PositionAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
