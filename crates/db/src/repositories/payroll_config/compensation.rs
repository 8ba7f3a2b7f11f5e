//! Pay structure kinds: pay types, pay grades, allowances, benefits and
//! signing bonuses.

use hris_core::payroll::{ConfigKind, RuleViolation, rules};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::{ConfigEntity, config_record};
use crate::entities::{
    allowances, benefits, pay_grades, pay_types, sea_orm_active_enums::ConfigStatus,
    signing_bonuses,
};

// ============================================================================
// Pay Types
// ============================================================================

/// Input for creating a pay type.
#[derive(Debug, Clone)]
pub struct CreatePayTypeInput {
    /// Pay type name, e.g. "Monthly".
    pub pay_type: String,
    /// Amount.
    pub amount: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a pay type.
#[derive(Debug, Clone, Default)]
pub struct UpdatePayTypeInput {
    /// New name.
    pub pay_type: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
}

impl ConfigEntity for pay_types::Entity {
    const KIND: ConfigKind = ConfigKind::PayType;
    type Create = CreatePayTypeInput;
    type Patch = UpdatePayTypeInput;

    fn build(input: CreatePayTypeInput, now: DateTimeWithTimeZone) -> pay_types::Model {
        pay_types::Model {
            id: Uuid::new_v4(),
            pay_type: input.pay_type,
            amount: input.amount,
            status: ConfigStatus::Draft,
            created_by: input.created_by,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(model: &mut pay_types::Model, patch: UpdatePayTypeInput) {
        if let Some(pay_type) = patch.pay_type {
            model.pay_type = pay_type;
        }
        if let Some(amount) = patch.amount {
            model.amount = amount;
        }
    }

    fn check(model: &pay_types::Model) -> Result<(), RuleViolation> {
        rules::required_text("type", &model.pay_type)?;
        rules::non_negative("amount", model.amount)
    }

    config_record!(pay_types { pay_type, amount });
}

// ============================================================================
// Pay Grades
// ============================================================================

/// Input for creating a pay grade.
#[derive(Debug, Clone)]
pub struct CreatePayGradeInput {
    /// Grade name.
    pub grade: String,
    /// Base salary.
    pub base_salary: Decimal,
    /// Gross salary, at least the base.
    pub gross_salary: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a pay grade.
#[derive(Debug, Clone, Default)]
pub struct UpdatePayGradeInput {
    /// New grade name.
    pub grade: Option<String>,
    /// New base salary.
    pub base_salary: Option<Decimal>,
    /// New gross salary.
    pub gross_salary: Option<Decimal>,
}

impl ConfigEntity for pay_grades::Entity {
    const KIND: ConfigKind = ConfigKind::PayGrade;
    type Create = CreatePayGradeInput;
    type Patch = UpdatePayGradeInput;

    fn build(input: CreatePayGradeInput, now: DateTimeWithTimeZone) -> pay_grades::Model {
        pay_grades::Model {
            id: Uuid::new_v4(),
            grade: input.grade,
            base_salary: input.base_salary,
            gross_salary: input.gross_salary,
            status: ConfigStatus::Draft,
            created_by: input.created_by,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(model: &mut pay_grades::Model, patch: UpdatePayGradeInput) {
        if let Some(grade) = patch.grade {
            model.grade = grade;
        }
        if let Some(base_salary) = patch.base_salary {
            model.base_salary = base_salary;
        }
        if let Some(gross_salary) = patch.gross_salary {
            model.gross_salary = gross_salary;
        }
    }

    fn check(model: &pay_grades::Model) -> Result<(), RuleViolation> {
        rules::required_text("grade", &model.grade)?;
        rules::check_pay_grade(model.base_salary, model.gross_salary)
    }

    config_record!(pay_grades { grade, base_salary, gross_salary });
}

// ============================================================================
// Allowances
// ============================================================================

/// Input for creating an allowance.
#[derive(Debug, Clone)]
pub struct CreateAllowanceInput {
    /// Allowance name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Amount.
    pub amount: Decimal,
    /// Whether the allowance is taxed.
    pub taxable: bool,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating an allowance.
#[derive(Debug, Clone, Default)]
pub struct UpdateAllowanceInput {
    /// New name.
    pub name: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New taxable flag.
    pub taxable: Option<bool>,
}

impl ConfigEntity for allowances::Entity {
    const KIND: ConfigKind = ConfigKind::Allowance;
    type Create = CreateAllowanceInput;
    type Patch = UpdateAllowanceInput;

    fn build(input: CreateAllowanceInput, now: DateTimeWithTimeZone) -> allowances::Model {
        allowances::Model {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            amount: input.amount,
            taxable: input.taxable,
            status: ConfigStatus::Draft,
            created_by: input.created_by,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(model: &mut allowances::Model, patch: UpdateAllowanceInput) {
        if let Some(name) = patch.name {
            model.name = name;
        }
        if let Some(description) = patch.description {
            model.description = description;
        }
        if let Some(amount) = patch.amount {
            model.amount = amount;
        }
        if let Some(taxable) = patch.taxable {
            model.taxable = taxable;
        }
    }

    fn check(model: &allowances::Model) -> Result<(), RuleViolation> {
        rules::required_text("name", &model.name)?;
        rules::non_negative("amount", model.amount)
    }

    config_record!(allowances { name, description, amount, taxable });
}

// ============================================================================
// Benefits
// ============================================================================

/// Input for creating a termination or resignation benefit.
#[derive(Debug, Clone)]
pub struct CreateBenefitInput {
    /// Benefit name.
    pub name: String,
    /// Amount.
    pub amount: Decimal,
    /// Eligibility terms.
    pub terms: Option<String>,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a benefit.
#[derive(Debug, Clone, Default)]
pub struct UpdateBenefitInput {
    /// New name.
    pub name: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New terms (`Some(None)` clears them).
    pub terms: Option<Option<String>>,
}

impl ConfigEntity for benefits::Entity {
    const KIND: ConfigKind = ConfigKind::Benefit;
    type Create = CreateBenefitInput;
    type Patch = UpdateBenefitInput;

    fn build(input: CreateBenefitInput, now: DateTimeWithTimeZone) -> benefits::Model {
        benefits::Model {
            id: Uuid::new_v4(),
            name: input.name,
            amount: input.amount,
            terms: input.terms,
            status: ConfigStatus::Draft,
            created_by: input.created_by,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(model: &mut benefits::Model, patch: UpdateBenefitInput) {
        if let Some(name) = patch.name {
            model.name = name;
        }
        if let Some(amount) = patch.amount {
            model.amount = amount;
        }
        if let Some(terms) = patch.terms {
            model.terms = terms;
        }
    }

    fn check(model: &benefits::Model) -> Result<(), RuleViolation> {
        rules::required_text("name", &model.name)?;
        rules::non_negative("amount", model.amount)
    }

    config_record!(benefits { name, amount, terms });
}

// ============================================================================
// Signing Bonuses
// ============================================================================

/// Input for creating a signing bonus.
#[derive(Debug, Clone)]
pub struct CreateSigningBonusInput {
    /// Position the bonus applies to.
    pub position_name: String,
    /// Amount.
    pub amount: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a signing bonus.
#[derive(Debug, Clone, Default)]
pub struct UpdateSigningBonusInput {
    /// New position name.
    pub position_name: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
}

impl ConfigEntity for signing_bonuses::Entity {
    const KIND: ConfigKind = ConfigKind::SigningBonus;
    type Create = CreateSigningBonusInput;
    type Patch = UpdateSigningBonusInput;

    fn build(input: CreateSigningBonusInput, now: DateTimeWithTimeZone) -> signing_bonuses::Model {
        signing_bonuses::Model {
            id: Uuid::new_v4(),
            position_name: input.position_name,
            amount: input.amount,
            status: ConfigStatus::Draft,
            created_by: input.created_by,
            approved_by: None,
            approved_at: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(model: &mut signing_bonuses::Model, patch: UpdateSigningBonusInput) {
        if let Some(position_name) = patch.position_name {
            model.position_name = position_name;
        }
        if let Some(amount) = patch.amount {
            model.amount = amount;
        }
    }

    fn check(model: &signing_bonuses::Model) -> Result<(), RuleViolation> {
        rules::required_text("positionName", &model.position_name)?;
        rules::non_negative("amount", model.amount)
    }

    config_record!(signing_bonuses { position_name, amount });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pay_grade_patch_is_checked_as_merged() {
        let mut model = pay_grades::Entity::build(
            CreatePayGradeInput {
                grade: "Senior".to_string(),
                base_salary: dec!(10000),
                gross_salary: dec!(12000),
                created_by: None,
            },
            Utc::now().into(),
        );

        pay_grades::Entity::apply_patch(
            &mut model,
            UpdatePayGradeInput {
                base_salary: Some(dec!(15000)),
                ..Default::default()
            },
        );

        assert_eq!(model.gross_salary, dec!(12000));
        let err = pay_grades::Entity::check(&model).unwrap_err();
        assert_eq!(err.field, "grossSalary");
    }

    #[test]
    fn test_allowance_description_can_be_cleared() {
        let mut model = allowances::Entity::build(
            CreateAllowanceInput {
                name: "Housing".to_string(),
                description: Some("Monthly housing".to_string()),
                amount: dec!(1500),
                taxable: true,
                created_by: None,
            },
            Utc::now().into(),
        );

        allowances::Entity::apply_patch(
            &mut model,
            UpdateAllowanceInput {
                description: Some(None),
                ..Default::default()
            },
        );
        assert!(model.description.is_none());
        assert_eq!(model.name, "Housing");
    }

    #[test]
    fn test_blank_pay_type_rejected() {
        let model = pay_types::Entity::build(
            CreatePayTypeInput {
                pay_type: "  ".to_string(),
                amount: dec!(100),
                created_by: None,
            },
            Utc::now().into(),
        );
        assert_eq!(pay_types::Entity::check(&model).unwrap_err().field, "type");
    }

    #[test]
    fn test_negative_bonus_rejected() {
        let model = signing_bonuses::Entity::build(
            CreateSigningBonusInput {
                position_name: "Engineer".to_string(),
                amount: dec!(-1),
                created_by: None,
            },
            Utc::now().into(),
        );
        assert_eq!(
            signing_bonuses::Entity::check(&model).unwrap_err().field,
            "amount"
        );
    }

    #[test]
    fn test_into_active_keeps_domain_fields() {
        let model = benefits::Entity::build(
            CreateBenefitInput {
                name: "End of service".to_string(),
                amount: dec!(5000),
                terms: None,
                created_by: Some("hr-2".to_string()),
            },
            Utc::now().into(),
        );
        let id = model.id;
        let active = benefits::Entity::into_active(model);

        assert_eq!(active.id, sea_orm::Set(id));
        assert_eq!(active.amount, sea_orm::Set(dec!(5000)));
        assert_eq!(active.created_by, sea_orm::Set(Some("hr-2".to_string())));
    }
}
