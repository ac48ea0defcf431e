//! Payroll result model.
//!
//! This module contains [`PayrollResult`], the full breakdown produced by
//! the calculator: income, statutory and optional employee deductions, net
//! salary, and the employer contributions reported alongside them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;

/// Complete payroll breakdown for one employee and one period.
///
/// Values are kept at full precision. Use [`PayrollResult::rounded`] for
/// the two-decimal view shown to people.
///
/// Invariants:
/// - `net_salary == gross_salary - total_deductions`
/// - employer contributions are never part of `total_deductions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Overtime pay at double the hourly rate.
    pub overtime_amount: Decimal,
    /// Bonuses.
    pub bonifications: Decimal,
    /// Year-end bonus.
    pub aguinaldo: Decimal,
    /// Vacation pay.
    pub vacation_amount: Decimal,
    /// Other taxable income.
    pub other_income: Decimal,
    /// Sum of every income field above.
    pub gross_salary: Decimal,

    /// AFP pension contribution withheld.
    pub afp_employee: Decimal,
    /// ISSS contribution withheld.
    pub isss_employee: Decimal,
    /// Renta income tax withheld.
    pub rent_tax: Decimal,

    /// Personal loan repayment.
    pub personal_loans: Decimal,
    /// Union dues.
    pub union_fees: Decimal,
    /// Private insurance premium.
    pub private_insurance: Decimal,
    /// Cooperative contribution.
    pub cooperative_fees: Decimal,
    /// Any other authorized deduction.
    pub other_deductions: Decimal,

    /// Statutory plus optional employee deductions.
    pub total_deductions: Decimal,
    /// Amount paid to the employee.
    pub net_salary: Decimal,

    /// AFP pension contribution paid by the employer.
    pub afp_employer: Decimal,
    /// ISSS contribution paid by the employer.
    pub isss_employer: Decimal,
    /// INSAFORP training levy paid by the employer.
    pub insaforp: Decimal,
}

impl PayrollResult {
    /// AFP, ISSS and Renta withheld from the employee.
    pub fn statutory_deductions(&self) -> Decimal {
        self.afp_employee + self.isss_employee + self.rent_tax
    }

    /// Sum of the employer-side contributions.
    pub fn employer_contributions_total(&self) -> Decimal {
        self.afp_employer + self.isss_employer + self.insaforp
    }

    /// Total cost of the employee to the employer for the period.
    pub fn employer_cost(&self) -> Decimal {
        self.gross_salary + self.employer_contributions_total()
    }

    /// Returns the presentation view with every figure rounded to cents.
    ///
    /// `gross_salary` and `total_deductions` are rounded on their own and
    /// `net_salary` is recomputed from them, so `net = gross - total` holds
    /// exactly in the rounded view. Rounded line items may differ from the
    /// rounded totals by a cent.
    pub fn rounded(&self) -> PayrollResult {
        let gross_salary = round_currency(self.gross_salary);
        let total_deductions = round_currency(self.total_deductions);

        PayrollResult {
            base_salary: round_currency(self.base_salary),
            overtime_amount: round_currency(self.overtime_amount),
            bonifications: round_currency(self.bonifications),
            aguinaldo: round_currency(self.aguinaldo),
            vacation_amount: round_currency(self.vacation_amount),
            other_income: round_currency(self.other_income),
            gross_salary,
            afp_employee: round_currency(self.afp_employee),
            isss_employee: round_currency(self.isss_employee),
            rent_tax: round_currency(self.rent_tax),
            personal_loans: round_currency(self.personal_loans),
            union_fees: round_currency(self.union_fees),
            private_insurance: round_currency(self.private_insurance),
            cooperative_fees: round_currency(self.cooperative_fees),
            other_deductions: round_currency(self.other_deductions),
            total_deductions,
            net_salary: gross_salary - total_deductions,
            afp_employer: round_currency(self.afp_employer),
            isss_employer: round_currency(self.isss_employer),
            insaforp: round_currency(self.insaforp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> PayrollResult {
        let gross = dec("2827.272727272727272727272727");
        let afp_employee = dec("204.9772727272727272727272727");
        let isss_employee = dec("30.00");
        let rent_tax = dec("525.3188181818181818181818181");
        let total = afp_employee + isss_employee + rent_tax;

        PayrollResult {
            base_salary: dec("2500"),
            overtime_amount: dec("227.2727272727272727272727272"),
            bonifications: dec("100"),
            aguinaldo: Decimal::ZERO,
            vacation_amount: Decimal::ZERO,
            other_income: Decimal::ZERO,
            gross_salary: gross,
            afp_employee,
            isss_employee,
            rent_tax,
            personal_loans: Decimal::ZERO,
            union_fees: Decimal::ZERO,
            private_insurance: Decimal::ZERO,
            cooperative_fees: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            total_deductions: total,
            net_salary: gross - total,
            afp_employer: dec("219.1136363636363636363636363"),
            isss_employer: dec("75.000"),
            insaforp: dec("28.27272727272727272727272727"),
        }
    }

    #[test]
    fn test_rounded_view_rounds_to_cents() {
        let rounded = sample_result().rounded();

        assert_eq!(rounded.gross_salary, dec("2827.27"));
        assert_eq!(rounded.overtime_amount, dec("227.27"));
        assert_eq!(rounded.afp_employee, dec("204.98"));
        assert_eq!(rounded.rent_tax, dec("525.32"));
        assert_eq!(rounded.total_deductions, dec("760.30"));
        assert_eq!(rounded.net_salary, dec("2066.97"));
        assert_eq!(rounded.afp_employer, dec("219.11"));
        assert_eq!(rounded.insaforp, dec("28.27"));
    }

    #[test]
    fn test_rounded_view_keeps_net_invariant() {
        let rounded = sample_result().rounded();
        assert_eq!(
            rounded.net_salary,
            rounded.gross_salary - rounded.total_deductions
        );
    }

    #[test]
    fn test_statutory_deductions_sum() {
        let result = sample_result();
        assert_eq!(result.statutory_deductions(), result.total_deductions);
    }

    #[test]
    fn test_employer_cost_adds_contributions_to_gross() {
        let result = sample_result();
        assert_eq!(
            result.employer_cost(),
            result.gross_salary + result.afp_employer + result.isss_employer + result.insaforp
        );
    }

    #[test]
    fn test_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_result().rounded()).unwrap();
        assert_eq!(json["gross_salary"].as_str().unwrap(), "2827.27");
        assert_eq!(json["isss_employee"].as_str().unwrap(), "30.00");
    }
}
