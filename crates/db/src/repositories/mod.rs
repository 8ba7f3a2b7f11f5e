//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod backup;
pub mod company_settings;
pub mod employee;
pub mod payroll_config;
pub mod pending;

pub use backup::{BackupError, BackupRepository, BackupSummary, RestoreOutcome};
pub use company_settings::{CompanySettingsError, CompanySettingsRepository};
pub use employee::EmployeeRepository;
pub use payroll_config::{
    ConfigEntity, ConfigError, ConfigRepository, CreateAllowanceInput, CreateBenefitInput,
    CreateInsuranceBracketInput, CreatePayGradeInput, CreatePayTypeInput, CreatePolicyInput,
    CreateSigningBonusInput, CreateTaxRuleInput, Decision, UpdateAllowanceInput,
    UpdateBenefitInput, UpdateInsuranceBracketInput, UpdatePayGradeInput, UpdatePayTypeInput,
    UpdatePolicyInput, UpdateSigningBonusInput, UpdateTaxRuleInput,
};
pub use pending::PendingApprovalRepository;
