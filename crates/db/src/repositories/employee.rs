//! Employee repository: the account side of employee profiles.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::{employee_profiles, employee_system_roles};

/// Employee repository for sign-in and account maintenance.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    db: DatabaseConnection,
}

impl EmployeeRepository {
    /// Creates a new employee repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an employee by work email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<employee_profiles::Model>, DbErr> {
        employee_profiles::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(employee_profiles::Column::WorkEmail)))
                    .eq(email.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
    }

    /// Finds an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<employee_profiles::Model>, DbErr> {
        employee_profiles::Entity::find_by_id(id).one(&self.db).await
    }

    /// Returns the active system roles of an employee, empty if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn roles_for(&self, employee_id: Uuid) -> Result<Vec<String>, DbErr> {
        let row = employee_system_roles::Entity::find()
            .filter(employee_system_roles::Column::EmployeeProfileId.eq(employee_id))
            .filter(employee_system_roles::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;

        Ok(row.map(|r| r.roles).unwrap_or_default())
    }

    /// Stores a new password hash.
    ///
    /// `temporary` marks passwords the employee must change on next sign-in.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the employee does not exist.
    pub async fn set_password(
        &self,
        id: Uuid,
        password_hash: String,
        temporary: bool,
    ) -> Result<employee_profiles::Model, DbErr> {
        let employee = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Employee {id}")))?;

        let mut active: employee_profiles::ActiveModel = employee.into();
        active.password_hash = Set(Some(password_hash));
        active.is_temporary_password = Set(temporary);
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await
    }
}
