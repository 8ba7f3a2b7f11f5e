//! Statutory deduction kinds: insurance brackets and tax rules.

use hris_core::payroll::{ConfigKind, RuleViolation, rules};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::{ConfigEntity, config_record};
use crate::entities::{insurance_brackets, sea_orm_active_enums::ConfigStatus, tax_rules};

/// Input for creating an insurance bracket.
#[derive(Debug, Clone)]
pub struct CreateInsuranceBracketInput {
    /// Bracket name.
    pub name: String,
    /// Lowest insured salary.
    pub min_salary: Decimal,
    /// Highest insured salary.
    pub max_salary: Decimal,
    /// Employee contribution, percent.
    pub employee_rate: Decimal,
    /// Employer contribution, percent.
    pub employer_rate: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating an insurance bracket.
#[derive(Debug, Clone, Default)]
pub struct UpdateInsuranceBracketInput {
    /// New name.
    pub name: Option<String>,
    /// New lower bound.
    pub min_salary: Option<Decimal>,
    /// New upper bound.
    pub max_salary: Option<Decimal>,
    /// New employee rate.
    pub employee_rate: Option<Decimal>,
    /// New employer rate.
    pub employer_rate: Option<Decimal>,
}

impl ConfigEntity for insurance_brackets::Entity {
    const KIND: ConfigKind = ConfigKind::InsuranceBracket;
    type Create = CreateInsuranceBracketInput;
    type Patch = UpdateInsuranceBracketInput;

    fn build(
        input: CreateInsuranceBracketInput,
        now: DateTimeWithTimeZone,
    ) -> insurance_brackets::Model {
        insurance_brackets::Model {
            id: Uuid::new_v4(),
            name: input.name,
            min_salary: input.min_salary,
            max_salary: input.max_salary,
            employee_rate: input.employee_rate,
            employer_rate: input.employer_rate,
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

    fn apply_patch(model: &mut insurance_brackets::Model, patch: UpdateInsuranceBracketInput) {
        if let Some(name) = patch.name {
            model.name = name;
        }
        if let Some(min_salary) = patch.min_salary {
            model.min_salary = min_salary;
        }
        if let Some(max_salary) = patch.max_salary {
            model.max_salary = max_salary;
        }
        if let Some(employee_rate) = patch.employee_rate {
            model.employee_rate = employee_rate;
        }
        if let Some(employer_rate) = patch.employer_rate {
            model.employer_rate = employer_rate;
        }
    }

    fn check(model: &insurance_brackets::Model) -> Result<(), RuleViolation> {
        rules::required_text("name", &model.name)?;
        rules::check_insurance_bracket(
            model.min_salary,
            model.max_salary,
            model.employee_rate,
            model.employer_rate,
        )
    }

    config_record!(insurance_brackets {
        name,
        min_salary,
        max_salary,
        employee_rate,
        employer_rate,
    });
}

/// Input for creating a tax rule.
#[derive(Debug, Clone)]
pub struct CreateTaxRuleInput {
    /// Optional short code.
    pub code: Option<String>,
    /// Rule name.
    pub name: String,
    /// Start of the taxed band.
    pub bracket_from: Decimal,
    /// End of the taxed band, open-ended when absent.
    pub bracket_to: Option<Decimal>,
    /// Rate, percent.
    pub rate: Decimal,
    /// Description.
    pub description: Option<String>,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a tax rule.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaxRuleInput {
    /// New code (`Some(None)` clears it).
    pub code: Option<Option<String>>,
    /// New name.
    pub name: Option<String>,
    /// New band start.
    pub bracket_from: Option<Decimal>,
    /// New band end (`Some(None)` makes the band open-ended).
    pub bracket_to: Option<Option<Decimal>>,
    /// New rate.
    pub rate: Option<Decimal>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
}

impl ConfigEntity for tax_rules::Entity {
    const KIND: ConfigKind = ConfigKind::TaxRule;
    type Create = CreateTaxRuleInput;
    type Patch = UpdateTaxRuleInput;

    fn build(input: CreateTaxRuleInput, now: DateTimeWithTimeZone) -> tax_rules::Model {
        tax_rules::Model {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            bracket_from: input.bracket_from,
            bracket_to: input.bracket_to,
            rate: input.rate,
            description: input.description,
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

    fn apply_patch(model: &mut tax_rules::Model, patch: UpdateTaxRuleInput) {
        if let Some(code) = patch.code {
            model.code = code;
        }
        if let Some(name) = patch.name {
            model.name = name;
        }
        if let Some(bracket_from) = patch.bracket_from {
            model.bracket_from = bracket_from;
        }
        if let Some(bracket_to) = patch.bracket_to {
            model.bracket_to = bracket_to;
        }
        if let Some(rate) = patch.rate {
            model.rate = rate;
        }
        if let Some(description) = patch.description {
            model.description = description;
        }
    }

    fn check(model: &tax_rules::Model) -> Result<(), RuleViolation> {
        rules::required_text("name", &model.name)?;
        rules::check_tax_rule(model.bracket_from, model.bracket_to, model.rate)
    }

    config_record!(tax_rules {
        code,
        name,
        bracket_from,
        bracket_to,
        rate,
        description,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn bracket() -> insurance_brackets::Model {
        insurance_brackets::Entity::build(
            CreateInsuranceBracketInput {
                name: "Social insurance".to_string(),
                min_salary: dec!(2000),
                max_salary: dec!(12600),
                employee_rate: dec!(11),
                employer_rate: dec!(18.75),
                created_by: None,
            },
            Utc::now().into(),
        )
    }

    #[test]
    fn test_bracket_defaults_pass() {
        assert!(insurance_brackets::Entity::check(&bracket()).is_ok());
    }

    #[test]
    fn test_bracket_rate_over_hundred() {
        let mut model = bracket();
        insurance_brackets::Entity::apply_patch(
            &mut model,
            UpdateInsuranceBracketInput {
                employer_rate: Some(dec!(101)),
                ..Default::default()
            },
        );
        assert_eq!(
            insurance_brackets::Entity::check(&model).unwrap_err().field,
            "employerRate"
        );
    }

    #[test]
    fn test_tax_rule_band_can_be_opened() {
        let mut model = tax_rules::Entity::build(
            CreateTaxRuleInput {
                code: Some("T1".to_string()),
                name: "Top band".to_string(),
                bracket_from: dec!(50000),
                bracket_to: Some(dec!(60000)),
                rate: dec!(25),
                description: None,
                created_by: None,
            },
            Utc::now().into(),
        );

        tax_rules::Entity::apply_patch(
            &mut model,
            UpdateTaxRuleInput {
                bracket_to: Some(None),
                ..Default::default()
            },
        );

        assert!(model.bracket_to.is_none());
        assert_eq!(model.code.as_deref(), Some("T1"));
        assert!(tax_rules::Entity::check(&model).is_ok());
    }

    #[test]
    fn test_tax_rule_inverted_band() {
        let model = tax_rules::Entity::build(
            CreateTaxRuleInput {
                code: None,
                name: "Broken".to_string(),
                bracket_from: dec!(100),
                bracket_to: Some(dec!(50)),
                rate: dec!(10),
                description: None,
                created_by: None,
            },
            Utc::now().into(),
        );
        assert_eq!(
            tax_rules::Entity::check(&model).unwrap_err().field,
            "bracketTo"
        );
    }
}
