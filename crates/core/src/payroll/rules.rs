//! Field-level rules for payroll configuration values.
//!
//! All money and rates are `Decimal`; rates are percentages in `0..=100`.

use hris_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A field failed a payroll rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct RuleViolation {
    /// camelCase field name as sent by clients.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl RuleViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<RuleViolation> for AppError {
    fn from(v: RuleViolation) -> Self {
        Self::Validation(v.to_string())
    }
}

/// Largest percentage accepted for a rate.
pub const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest money amount a column can hold (`NUMERIC(14, 2)`): 999 999 999 999.99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2);

/// Money amounts cannot be negative or exceed [`MAX_AMOUNT`].
pub fn non_negative(field: &'static str, value: Decimal) -> Result<(), RuleViolation> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RuleViolation::new(field, "must not be negative"));
    }
    within_precision(field, value)
}

/// Amounts must fit twelve integer digits.
fn within_precision(field: &'static str, value: Decimal) -> Result<(), RuleViolation> {
    if value.abs() > MAX_AMOUNT {
        return Err(RuleViolation::new(field, format!("must not exceed {MAX_AMOUNT}")));
    }
    Ok(())
}

/// Rates are percentages between 0 and 100 inclusive.
pub fn percentage(field: &'static str, value: Decimal) -> Result<(), RuleViolation> {
    if value < Decimal::ZERO || value > MAX_PERCENT {
        return Err(RuleViolation::new(field, "must be between 0 and 100"));
    }
    Ok(())
}

/// Upper bound of a range must not be below the lower bound.
pub fn ordered(
    lower_field: &'static str,
    lower: Decimal,
    upper_field: &'static str,
    upper: Decimal,
) -> Result<(), RuleViolation> {
    if upper < lower {
        return Err(RuleViolation::new(
            upper_field,
            format!("must be greater than or equal to {lower_field}"),
        ));
    }
    Ok(())
}

/// Text fields that identify a record cannot be blank.
pub fn required_text(field: &'static str, value: &str) -> Result<(), RuleViolation> {
    if value.trim().is_empty() {
        return Err(RuleViolation::new(field, "is required"));
    }
    Ok(())
}

/// Pay grade: both salaries non-negative, gross at least base.
pub fn check_pay_grade(base_salary: Decimal, gross_salary: Decimal) -> Result<(), RuleViolation> {
    non_negative("baseSalary", base_salary)?;
    non_negative("grossSalary", gross_salary)?;
    ordered("baseSalary", base_salary, "grossSalary", gross_salary)
}

/// Insurance bracket: salary band ordered, both contribution rates are percentages.
pub fn check_insurance_bracket(
    min_salary: Decimal,
    max_salary: Decimal,
    employee_rate: Decimal,
    employer_rate: Decimal,
) -> Result<(), RuleViolation> {
    non_negative("minSalary", min_salary)?;
    non_negative("maxSalary", max_salary)?;
    ordered("minSalary", min_salary, "maxSalary", max_salary)?;
    percentage("employeeRate", employee_rate)?;
    percentage("employerRate", employer_rate)
}

/// Tax rule: bracket ordered when closed, rate is a percentage.
pub fn check_tax_rule(
    bracket_from: Decimal,
    bracket_to: Option<Decimal>,
    rate: Decimal,
) -> Result<(), RuleViolation> {
    non_negative("bracketFrom", bracket_from)?;
    if let Some(to) = bracket_to {
        non_negative("bracketTo", to)?;
        ordered("bracketFrom", bracket_from, "bracketTo", to)?;
    }
    percentage("rate", rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_negative() {
        assert!(non_negative("amount", dec!(0)).is_ok());
        assert!(non_negative("amount", dec!(-0.00)).is_ok());
        assert!(non_negative("amount", dec!(1500.50)).is_ok());
        let err = non_negative("amount", dec!(-0.01)).unwrap_err();
        assert_eq!(err.to_string(), "amount: must not be negative");
    }

    #[test]
    fn test_amount_must_fit_column() {
        assert_eq!(MAX_AMOUNT, dec!(999999999999.99));
        assert!(non_negative("amount", dec!(999999999999.99)).is_ok());
        let err = non_negative("amount", dec!(10000000000000)).unwrap_err();
        assert_eq!(err.field, "amount");
        assert_eq!(err.message, "must not exceed 999999999999.99");
    }

    #[test]
    fn test_upper_bounds_checked_against_column() {
        assert_eq!(
            check_insurance_bracket(dec!(0), dec!(10000000000000), dec!(11), dec!(18))
                .unwrap_err()
                .field,
            "maxSalary"
        );
        assert_eq!(
            check_pay_grade(dec!(0), dec!(10000000000000)).unwrap_err().field,
            "grossSalary"
        );
        assert_eq!(
            check_tax_rule(dec!(0), Some(dec!(10000000000000)), dec!(10)).unwrap_err().field,
            "bracketTo"
        );
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(percentage("rate", dec!(0)).is_ok());
        assert!(percentage("rate", dec!(100)).is_ok());
        assert!(percentage("rate", dec!(11.25)).is_ok());
        assert!(percentage("rate", dec!(100.01)).is_err());
        assert!(percentage("rate", dec!(-1)).is_err());
    }

    #[test]
    fn test_pay_grade_gross_below_base() {
        let err = check_pay_grade(dec!(8000), dec!(7999.99)).unwrap_err();
        assert_eq!(err.field, "grossSalary");
        assert!(check_pay_grade(dec!(8000), dec!(8000)).is_ok());
    }

    #[test]
    fn test_insurance_bracket() {
        assert!(check_insurance_bracket(dec!(0), dec!(5000), dec!(11), dec!(18.75)).is_ok());
        assert_eq!(
            check_insurance_bracket(dec!(6000), dec!(5000), dec!(11), dec!(18))
                .unwrap_err()
                .field,
            "maxSalary"
        );
        assert_eq!(
            check_insurance_bracket(dec!(0), dec!(5000), dec!(11), dec!(180))
                .unwrap_err()
                .field,
            "employerRate"
        );
    }

    #[test]
    fn test_tax_rule_open_bracket() {
        assert!(check_tax_rule(dec!(200000), None, dec!(25)).is_ok());
        assert!(check_tax_rule(dec!(200), Some(dec!(100)), dec!(25)).is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(required_text("name", "Housing").is_ok());
        assert!(required_text("name", "   ").is_err());
    }

    #[test]
    fn test_violation_is_validation_error() {
        let err: AppError = required_text("name", "").unwrap_err().into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "name: is required");
    }
}
