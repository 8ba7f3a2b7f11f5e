//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_organization;
mod m20260301_000002_time_and_performance;
mod m20260301_000003_payroll_configuration;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_organization::Migration),
            Box::new(m20260301_000002_time_and_performance::Migration),
            Box::new(m20260301_000003_payroll_configuration::Migration),
        ]
    }
}
