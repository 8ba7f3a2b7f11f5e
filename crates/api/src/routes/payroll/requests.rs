//! Request bodies for the payroll configuration kinds.
//!
//! Field checks here reject obviously bad input before touching storage.
//! Cross-field rules (gross at least base, ordered brackets) run again in the
//! repository on the merged record, since a patch may change only one side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::extractors::double_option;
use hris_core::payroll::{Applicability, PolicyType, RuleDefinition, RuleViolation, rules};
use hris_db::repositories::{
    CreateAllowanceInput, CreateBenefitInput, CreateInsuranceBracketInput, CreatePayGradeInput,
    CreatePayTypeInput, CreatePolicyInput, CreateSigningBonusInput, CreateTaxRuleInput,
    UpdateAllowanceInput, UpdateBenefitInput, UpdateInsuranceBracketInput, UpdatePayGradeInput,
    UpdatePayTypeInput, UpdatePolicyInput, UpdateSigningBonusInput, UpdateTaxRuleInput,
};

fn violation(v: RuleViolation) -> ValidationError {
    ValidationError::new("rule").with_message(v.message.into())
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    rules::non_negative("value", *value).map_err(violation)
}

fn percentage(value: &Decimal) -> Result<(), ValidationError> {
    rules::percentage("value", *value).map_err(violation)
}

fn rule_definition(rule: &RuleDefinition) -> Result<(), ValidationError> {
    rule.check().map_err(|v| {
        ValidationError::new("rule").with_message(v.to_string().into())
    })
}

const fn default_true() -> bool {
    true
}

// ============================================================================
// Pay Types
// ============================================================================

/// Body of `POST /pay-types`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayTypeRequest {
    /// Pay type name.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub pay_type: String,
    /// Amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreatePayTypeRequest> for CreatePayTypeInput {
    fn from(req: CreatePayTypeRequest) -> Self {
        Self {
            pay_type: req.pay_type,
            amount: req.amount,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /pay-types/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayTypeRequest {
    /// New name.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub pay_type: Option<String>,
    /// New amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
}

impl From<UpdatePayTypeRequest> for UpdatePayTypeInput {
    fn from(req: UpdatePayTypeRequest) -> Self {
        Self {
            pay_type: req.pay_type,
            amount: req.amount,
        }
    }
}

// ============================================================================
// Pay Grades
// ============================================================================

/// Body of `POST /pay-grades`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayGradeRequest {
    /// Grade name.
    #[validate(length(min = 1, message = "grade is required"))]
    pub grade: String,
    /// Base salary.
    #[validate(custom(function = "non_negative"))]
    pub base_salary: Decimal,
    /// Gross salary.
    #[validate(custom(function = "non_negative"))]
    pub gross_salary: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreatePayGradeRequest> for CreatePayGradeInput {
    fn from(req: CreatePayGradeRequest) -> Self {
        Self {
            grade: req.grade,
            base_salary: req.base_salary,
            gross_salary: req.gross_salary,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /pay-grades/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayGradeRequest {
    /// New grade name.
    #[validate(length(min = 1, message = "grade must not be empty"))]
    pub grade: Option<String>,
    /// New base salary.
    #[validate(custom(function = "non_negative"))]
    pub base_salary: Option<Decimal>,
    /// New gross salary.
    #[validate(custom(function = "non_negative"))]
    pub gross_salary: Option<Decimal>,
}

impl From<UpdatePayGradeRequest> for UpdatePayGradeInput {
    fn from(req: UpdatePayGradeRequest) -> Self {
        Self {
            grade: req.grade,
            base_salary: req.base_salary,
            gross_salary: req.gross_salary,
        }
    }
}

// ============================================================================
// Allowances
// ============================================================================

/// Body of `POST /allowances`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAllowanceRequest {
    /// Allowance name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    /// Whether the allowance is taxed, default true.
    #[serde(default = "default_true")]
    pub taxable: bool,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreateAllowanceRequest> for CreateAllowanceInput {
    fn from(req: CreateAllowanceRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            amount: req.amount,
            taxable: req.taxable,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /allowances/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAllowanceRequest {
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New description, `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    /// New taxable flag.
    pub taxable: Option<bool>,
}

impl From<UpdateAllowanceRequest> for UpdateAllowanceInput {
    fn from(req: UpdateAllowanceRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            amount: req.amount,
            taxable: req.taxable,
        }
    }
}

// ============================================================================
// Insurance Brackets
// ============================================================================

/// Body of `POST /insurance-brackets`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInsuranceBracketRequest {
    /// Bracket name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Lowest insured salary.
    #[validate(custom(function = "non_negative"))]
    pub min_salary: Decimal,
    /// Highest insured salary.
    #[validate(custom(function = "non_negative"))]
    pub max_salary: Decimal,
    /// Employee contribution, percent.
    #[validate(custom(function = "percentage"))]
    pub employee_rate: Decimal,
    /// Employer contribution, percent.
    #[validate(custom(function = "percentage"))]
    pub employer_rate: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreateInsuranceBracketRequest> for CreateInsuranceBracketInput {
    fn from(req: CreateInsuranceBracketRequest) -> Self {
        Self {
            name: req.name,
            min_salary: req.min_salary,
            max_salary: req.max_salary,
            employee_rate: req.employee_rate,
            employer_rate: req.employer_rate,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /insurance-brackets/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInsuranceBracketRequest {
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New lower bound.
    #[validate(custom(function = "non_negative"))]
    pub min_salary: Option<Decimal>,
    /// New upper bound.
    #[validate(custom(function = "non_negative"))]
    pub max_salary: Option<Decimal>,
    /// New employee rate.
    #[validate(custom(function = "percentage"))]
    pub employee_rate: Option<Decimal>,
    /// New employer rate.
    #[validate(custom(function = "percentage"))]
    pub employer_rate: Option<Decimal>,
}

impl From<UpdateInsuranceBracketRequest> for UpdateInsuranceBracketInput {
    fn from(req: UpdateInsuranceBracketRequest) -> Self {
        Self {
            name: req.name,
            min_salary: req.min_salary,
            max_salary: req.max_salary,
            employee_rate: req.employee_rate,
            employer_rate: req.employer_rate,
        }
    }
}

// ============================================================================
// Tax Rules
// ============================================================================

/// Body of `POST /tax-rules`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaxRuleRequest {
    /// Optional short code.
    pub code: Option<String>,
    /// Rule name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Start of the band, default 0.
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub bracket_from: Decimal,
    /// End of the band, open-ended when absent.
    #[validate(custom(function = "non_negative"))]
    pub bracket_to: Option<Decimal>,
    /// Rate, percent.
    #[validate(custom(function = "percentage"))]
    pub rate: Decimal,
    /// Description.
    pub description: Option<String>,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreateTaxRuleRequest> for CreateTaxRuleInput {
    fn from(req: CreateTaxRuleRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            bracket_from: req.bracket_from,
            bracket_to: req.bracket_to,
            rate: req.rate,
            description: req.description,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /tax-rules/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaxRuleRequest {
    /// New code, `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub code: Option<Option<String>>,
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New band start.
    #[validate(custom(function = "non_negative"))]
    pub bracket_from: Option<Decimal>,
    /// New band end, `null` makes the band open-ended.
    #[serde(default, deserialize_with = "double_option")]
    pub bracket_to: Option<Option<Decimal>>,
    /// New rate.
    #[validate(custom(function = "percentage"))]
    pub rate: Option<Decimal>,
    /// New description, `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl From<UpdateTaxRuleRequest> for UpdateTaxRuleInput {
    fn from(req: UpdateTaxRuleRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            bracket_from: req.bracket_from,
            bracket_to: req.bracket_to,
            rate: req.rate,
            description: req.description,
        }
    }
}

// ============================================================================
// Benefits
// ============================================================================

/// Body of `POST /benefits`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBenefitRequest {
    /// Benefit name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    /// Eligibility terms.
    pub terms: Option<String>,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreateBenefitRequest> for CreateBenefitInput {
    fn from(req: CreateBenefitRequest) -> Self {
        Self {
            name: req.name,
            amount: req.amount,
            terms: req.terms,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /benefits/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBenefitRequest {
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    /// New terms, `null` clears them.
    #[serde(default, deserialize_with = "double_option")]
    pub terms: Option<Option<String>>,
}

impl From<UpdateBenefitRequest> for UpdateBenefitInput {
    fn from(req: UpdateBenefitRequest) -> Self {
        Self {
            name: req.name,
            amount: req.amount,
            terms: req.terms,
        }
    }
}

// ============================================================================
// Signing Bonuses
// ============================================================================

/// Body of `POST /signing-bonuses`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSigningBonusRequest {
    /// Position the bonus applies to.
    #[validate(length(min = 1, message = "positionName is required"))]
    pub position_name: String,
    /// Amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreateSigningBonusRequest> for CreateSigningBonusInput {
    fn from(req: CreateSigningBonusRequest) -> Self {
        Self {
            position_name: req.position_name,
            amount: req.amount,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /signing-bonuses/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSigningBonusRequest {
    /// New position name.
    #[validate(length(min = 1, message = "positionName must not be empty"))]
    pub position_name: Option<String>,
    /// New amount.
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
}

impl From<UpdateSigningBonusRequest> for UpdateSigningBonusInput {
    fn from(req: UpdateSigningBonusRequest) -> Self {
        Self {
            position_name: req.position_name,
            amount: req.amount,
        }
    }
}

// ============================================================================
// Policies
// ============================================================================

/// Body of `POST /policies`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    /// Policy name.
    #[validate(length(min = 1, message = "policyName is required"))]
    pub policy_name: String,
    /// What the policy governs.
    pub policy_type: PolicyType,
    /// Description.
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// First day the policy applies.
    pub effective_date: NaiveDate,
    /// Covered employees.
    pub applicability: Applicability,
    /// Numeric parameters.
    #[validate(custom(function = "rule_definition"))]
    pub rule_definition: RuleDefinition,
    /// Creator reference.
    pub created_by: Option<String>,
}

impl From<CreatePolicyRequest> for CreatePolicyInput {
    fn from(req: CreatePolicyRequest) -> Self {
        Self {
            policy_name: req.policy_name,
            policy_type: req.policy_type,
            description: req.description,
            effective_date: req.effective_date,
            applicability: req.applicability,
            rule_definition: req.rule_definition,
            created_by: req.created_by,
        }
    }
}

/// Body of `PATCH /policies/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyRequest {
    /// New name.
    #[validate(length(min = 1, message = "policyName must not be empty"))]
    pub policy_name: Option<String>,
    /// New type.
    pub policy_type: Option<PolicyType>,
    /// New description.
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    /// New effective date.
    pub effective_date: Option<NaiveDate>,
    /// New applicability.
    pub applicability: Option<Applicability>,
    /// Replacement rule definition.
    #[validate(custom(function = "self::rule_definition"))]
    pub rule_definition: Option<RuleDefinition>,
}

impl From<UpdatePolicyRequest> for UpdatePolicyInput {
    fn from(req: UpdatePolicyRequest) -> Self {
        Self {
            policy_name: req.policy_name,
            policy_type: req.policy_type,
            description: req.description,
            effective_date: req.effective_date,
            applicability: req.applicability,
            rule_definition: req.rule_definition,
        }
    }
}

// ============================================================================
// Review
// ============================================================================

/// Optional body of `PATCH /{kind}/{id}/approve`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    /// Reviewer reference; defaults to the caller.
    pub approved_by: Option<String>,
}

/// Optional body of `PATCH /{kind}/{id}/reject`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    /// Reviewer reference; defaults to the caller.
    pub rejected_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_pay_type_uses_type_key() {
        let req: CreatePayTypeRequest =
            serde_json::from_value(json!({"type": "Monthly", "amount": 5000})).unwrap();
        assert_eq!(req.pay_type, "Monthly");
        assert_eq!(req.amount, dec!(5000));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_fails_validation() {
        let req: CreateBenefitRequest =
            serde_json::from_value(json!({"name": "EOS", "amount": "-5"})).unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("amount"));
    }

    #[test]
    fn test_rate_above_hundred_fails_validation() {
        let req: CreateInsuranceBracketRequest = serde_json::from_value(json!({
            "name": "Social",
            "minSalary": 0,
            "maxSalary": 10000,
            "employeeRate": 11,
            "employerRate": 120
        }))
        .unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("employer_rate"));
    }

    #[test]
    fn test_allowance_taxable_defaults_true() {
        let req: CreateAllowanceRequest =
            serde_json::from_value(json!({"name": "Housing", "amount": 100})).unwrap();
        assert!(req.taxable);
    }

    #[test]
    fn test_tax_rule_bracket_from_defaults_zero() {
        let req: CreateTaxRuleRequest =
            serde_json::from_value(json!({"name": "Band 1", "rate": 10})).unwrap();
        assert_eq!(req.bracket_from, Decimal::ZERO);
        assert!(req.bracket_to.is_none());
    }

    #[test]
    fn test_tax_rule_patch_distinguishes_null() {
        let req: UpdateTaxRuleRequest =
            serde_json::from_value(json!({"bracketTo": null})).unwrap();
        assert_eq!(req.bracket_to, Some(None));
        assert_eq!(req.code, None);
    }

    #[test]
    fn test_policy_rule_definition_validated() {
        let req: CreatePolicyRequest = serde_json::from_value(json!({
            "policyName": "Lateness",
            "policyType": "Misconduct",
            "description": "Deduct for lateness",
            "effectiveDate": "2026-01-01",
            "applicability": "All Employees",
            "ruleDefinition": {"percentage": 150, "fixedAmount": 0, "thresholdAmount": 0}
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_applicability_rejected() {
        let result = serde_json::from_value::<CreatePolicyRequest>(json!({
            "policyName": "Lateness",
            "policyType": "Misconduct",
            "description": "Deduct for lateness",
            "effectiveDate": "2026-01-01",
            "applicability": "Interns",
            "ruleDefinition": {"percentage": 1, "fixedAmount": 0, "thresholdAmount": 0}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_accepts_partial_rule_definition() {
        let req: CreatePolicyRequest = serde_json::from_value(json!({
            "policyName": "Transport",
            "policyType": "Allowance",
            "description": "Monthly transport allowance",
            "effectiveDate": "2026-01-01",
            "applicability": "Full Time Employees",
            "ruleDefinition": {"percentage": 5}
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.rule_definition.percentage, dec!(5));
        assert_eq!(req.rule_definition.fixed_amount, Decimal::ZERO);
    }

    #[test]
    fn test_policy_patch_rejects_blank_description() {
        let req: UpdatePolicyRequest =
            serde_json::from_value(json!({"description": ""})).unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("description"));
    }

    #[test]
    fn test_amount_beyond_column_precision_fails_validation() {
        let req: CreateSigningBonusRequest = serde_json::from_value(json!({
            "positionName": "Engineer",
            "amount": "10000000000000"
        }))
        .unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("amount"));
    }
}
