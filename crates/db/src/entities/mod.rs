//! `SeaORM` entity definitions.

pub mod allowances;
pub mod appraisal_cycles;
pub mod appraisal_templates;
pub mod benefits;
pub mod company_settings;
pub mod config_backups;
pub mod departments;
pub mod employee_profiles;
pub mod employee_system_roles;
pub mod holidays;
pub mod insurance_brackets;
pub mod lateness_rules;
pub mod overtime_rules;
pub mod pay_grades;
pub mod pay_types;
pub mod payroll_policies;
pub mod position_assignments;
pub mod positions;
pub mod schedule_rules;
pub mod sea_orm_active_enums;
pub mod shift_types;
pub mod shifts;
pub mod signing_bonuses;
pub mod tax_rules;
