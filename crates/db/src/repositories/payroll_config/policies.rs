//! Payroll policies.

use chrono::NaiveDate;
use hris_core::payroll::{
    Applicability, ConfigKind, PolicyType, RuleDefinition, RuleViolation, rules,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde_json::Value;
use uuid::Uuid;

use super::{ConfigEntity, config_record};
use crate::entities::{payroll_policies, sea_orm_active_enums::ConfigStatus};

/// Input for creating a payroll policy.
#[derive(Debug, Clone)]
pub struct CreatePolicyInput {
    /// Policy name.
    pub policy_name: String,
    /// What the policy governs.
    pub policy_type: PolicyType,
    /// Description.
    pub description: String,
    /// First day the policy applies.
    pub effective_date: NaiveDate,
    /// Covered employees.
    pub applicability: Applicability,
    /// Numeric parameters.
    pub rule_definition: RuleDefinition,
    /// Creator reference.
    pub created_by: Option<String>,
}

/// Input for updating a payroll policy.
#[derive(Debug, Clone, Default)]
pub struct UpdatePolicyInput {
    /// New name.
    pub policy_name: Option<String>,
    /// New type.
    pub policy_type: Option<PolicyType>,
    /// New description.
    pub description: Option<String>,
    /// New effective date.
    pub effective_date: Option<NaiveDate>,
    /// New applicability.
    pub applicability: Option<Applicability>,
    /// Replacement rule definition.
    pub rule_definition: Option<RuleDefinition>,
}

fn rule_to_json(rule: &RuleDefinition) -> Value {
    serde_json::to_value(rule).unwrap_or_default()
}

impl ConfigEntity for payroll_policies::Entity {
    const KIND: ConfigKind = ConfigKind::Policy;
    type Create = CreatePolicyInput;
    type Patch = UpdatePolicyInput;

    fn build(input: CreatePolicyInput, now: DateTimeWithTimeZone) -> payroll_policies::Model {
        payroll_policies::Model {
            id: Uuid::new_v4(),
            policy_name: input.policy_name,
            policy_type: input.policy_type.into(),
            description: input.description,
            effective_date: input.effective_date,
            applicability: input.applicability.into(),
            rule_definition: rule_to_json(&input.rule_definition),
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

    fn apply_patch(model: &mut payroll_policies::Model, patch: UpdatePolicyInput) {
        if let Some(policy_name) = patch.policy_name {
            model.policy_name = policy_name;
        }
        if let Some(policy_type) = patch.policy_type {
            model.policy_type = policy_type.into();
        }
        if let Some(description) = patch.description {
            model.description = description;
        }
        if let Some(effective_date) = patch.effective_date {
            model.effective_date = effective_date;
        }
        if let Some(applicability) = patch.applicability {
            model.applicability = applicability.into();
        }
        if let Some(rule) = patch.rule_definition {
            model.rule_definition = rule_to_json(&rule);
        }
    }

    fn check(model: &payroll_policies::Model) -> Result<(), RuleViolation> {
        rules::required_text("policyName", &model.policy_name)?;
        rules::required_text("description", &model.description)?;
        let rule: RuleDefinition = serde_json::from_value(model.rule_definition.clone())
            .map_err(|e| RuleViolation {
                field: "ruleDefinition",
                message: e.to_string(),
            })?;
        rule.check()
    }

    config_record!(payroll_policies {
        policy_name,
        policy_type,
        description,
        effective_date,
        applicability,
        rule_definition,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::Applicability as StoredApplicability;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn policy() -> payroll_policies::Model {
        payroll_policies::Entity::build(
            CreatePolicyInput {
                policy_name: "Late arrival".to_string(),
                policy_type: PolicyType::Misconduct,
                description: "Deduct for repeated lateness".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                applicability: Applicability::FullTime,
                rule_definition: RuleDefinition {
                    percentage: dec!(2.5),
                    fixed_amount: dec!(0),
                    threshold_amount: dec!(3),
                },
                created_by: None,
            },
            Utc::now().into(),
        )
    }

    #[test]
    fn test_rule_definition_stored_as_camel_case_json() {
        let model = policy();
        assert!(model.rule_definition.get("fixedAmount").is_some());
        assert!(model.rule_definition.get("thresholdAmount").is_some());
        assert!(payroll_policies::Entity::check(&model).is_ok());
    }

    #[test]
    fn test_patch_replaces_rule_and_applicability() {
        let mut model = policy();
        payroll_policies::Entity::apply_patch(
            &mut model,
            UpdatePolicyInput {
                applicability: Some(Applicability::Contractors),
                rule_definition: Some(RuleDefinition {
                    percentage: dec!(150),
                    fixed_amount: dec!(0),
                    threshold_amount: dec!(0),
                }),
                ..Default::default()
            },
        );

        assert_eq!(model.applicability, StoredApplicability::Contractors);
        assert_eq!(
            payroll_policies::Entity::check(&model).unwrap_err().field,
            "ruleDefinition.percentage"
        );
    }

    #[test]
    fn test_patch_cannot_blank_description() {
        let mut model = policy();
        payroll_policies::Entity::apply_patch(
            &mut model,
            UpdatePolicyInput {
                description: Some("  ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            payroll_policies::Entity::check(&model).unwrap_err().field,
            "description"
        );
    }

    #[test]
    fn test_stored_partial_rule_definition_accepted() {
        let mut model = policy();
        model.rule_definition = serde_json::json!({"thresholdAmount": 3});
        assert!(payroll_policies::Entity::check(&model).is_ok());
    }

    #[test]
    fn test_corrupt_rule_definition_rejected() {
        let mut model = policy();
        model.rule_definition = serde_json::json!({"percentage": "lots"});
        assert_eq!(
            payroll_policies::Entity::check(&model).unwrap_err().field,
            "ruleDefinition"
        );
    }
}
