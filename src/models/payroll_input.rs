//! Payroll input model.
//!
//! A [`PayrollInput`] carries everything the calculator needs for one
//! employee and one month: the base salary, the hours and days worked,
//! additional income, and the optional deductions the employee authorized.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest amount, hour or day count accepted for any single input field.
pub const MAX_INPUT_VALUE: i64 = 1_000_000_000;

/// Per-period figures for a single payroll calculation.
///
/// Every field except `base_salary` defaults to zero when absent from JSON.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let mut input = PayrollInput::new(Decimal::new(2500, 0));
/// input.overtime_hours = Decimal::new(8, 0);
/// input.bonifications = Decimal::new(100, 0);
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly base salary. Must be greater than zero.
    pub base_salary: Decimal,
    /// Ordinary hours worked in the period. Recorded, not paid separately.
    #[serde(default)]
    pub ordinary_hours: Decimal,
    /// Overtime hours worked in the period.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Bonuses paid in the period.
    #[serde(default)]
    pub bonifications: Decimal,
    /// Year-end bonus paid in the period.
    #[serde(default)]
    pub aguinaldo: Decimal,
    /// Any other taxable income.
    #[serde(default)]
    pub other_income: Decimal,
    /// Vacation days paid in the period.
    #[serde(default)]
    pub vacation_days: Decimal,
    /// Personal loan repayment withheld.
    #[serde(default)]
    pub personal_loans: Decimal,
    /// Union dues withheld.
    #[serde(default)]
    pub union_fees: Decimal,
    /// Private insurance premium withheld.
    #[serde(default)]
    pub private_insurance: Decimal,
    /// Cooperative contribution withheld.
    #[serde(default)]
    pub cooperative_fees: Decimal,
    /// Any other authorized deduction.
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl PayrollInput {
    /// Creates an input with the given base salary and every other field zero.
    pub fn new(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            ordinary_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            bonifications: Decimal::ZERO,
            aguinaldo: Decimal::ZERO,
            other_income: Decimal::ZERO,
            vacation_days: Decimal::ZERO,
            personal_loans: Decimal::ZERO,
            union_fees: Decimal::ZERO,
            private_insurance: Decimal::ZERO,
            cooperative_fees: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }

    /// Sum of the five optional deductions.
    pub fn optional_deductions_total(&self) -> Decimal {
        self.personal_loans
            + self.union_fees
            + self.private_insurance
            + self.cooperative_fees
            + self.other_deductions
    }

    /// Rejects inputs the calculator would turn into nonsensical figures.
    ///
    /// Returns `InvalidInput` naming the first offending field: the base
    /// salary must be positive, every other field non-negative, and no
    /// field may exceed [`MAX_INPUT_VALUE`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: format!("must be greater than zero, got {}", self.base_salary),
            });
        }

        let fields = [
            ("base_salary", self.base_salary),
            ("ordinary_hours", self.ordinary_hours),
            ("overtime_hours", self.overtime_hours),
            ("bonifications", self.bonifications),
            ("aguinaldo", self.aguinaldo),
            ("other_income", self.other_income),
            ("vacation_days", self.vacation_days),
            ("personal_loans", self.personal_loans),
            ("union_fees", self.union_fees),
            ("private_insurance", self.private_insurance),
            ("cooperative_fees", self.cooperative_fees),
            ("other_deductions", self.other_deductions),
        ];

        let max = Decimal::from(MAX_INPUT_VALUE);
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
            if value > max {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not exceed {}, got {}", max, value),
                });
            }
        }

        Ok(())
    }
}
