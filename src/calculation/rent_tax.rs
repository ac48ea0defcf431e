//! Renta (income tax) withholding.
//!
//! Monthly withholding follows a progressive table: each bracket carries a
//! fixed amount owed on reaching it plus a marginal rate on the excess over
//! its lower bound. A zero-rate bracket withholds nothing.

use rust_decimal::Decimal;

use crate::config::{RentTaxTable, TaxBracket};

/// Finds the bracket used to tax `gross_salary`.
///
/// The bracket whose inclusive bounds contain `gross_salary` wins. Published
/// bounds are whole cents, so a full-precision gross such as `472.005`
/// falls between two brackets; it resolves to the highest bracket whose
/// lower bound it has reached. Anything left over uses the last bracket.
/// Returns `None` only for an empty table.
pub fn find_bracket(gross_salary: Decimal, table: &RentTaxTable) -> Option<&TaxBracket> {
    table
        .brackets
        .iter()
        .find(|bracket| bracket.contains(gross_salary))
        .or_else(|| {
            table
                .brackets
                .iter()
                .rfind(|bracket| bracket.min <= gross_salary)
        })
        .or_else(|| table.brackets.last())
}

/// Returns the Renta withheld on `gross_salary`.
///
/// `fixed_amount + (gross_salary - min) x rate` for the matching bracket,
/// or zero when the bracket's rate is zero. Never fails: amounts beyond
/// every bounded bracket use the open-ended top bracket.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::rent_tax;
/// use payroll_engine::config::{RentTaxTable, TaxBracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let table = RentTaxTable {
///     brackets: vec![
///         TaxBracket { min: dec("0"), max: Some(dec("472.00")), rate: dec("0"), fixed_amount: dec("0") },
///         TaxBracket { min: dec("472.01"), max: None, rate: dec("0.10"), fixed_amount: dec("17.67") },
///     ],
/// };
///
/// assert_eq!(rent_tax(dec("472.00"), &table), Decimal::ZERO);
/// assert_eq!(rent_tax(dec("572.01"), &table), dec("27.67"));
/// ```
pub fn rent_tax(gross_salary: Decimal, table: &RentTaxTable) -> Decimal {
    match find_bracket(gross_salary, table) {
        Some(bracket) if bracket.rate.is_zero() => Decimal::ZERO,
        Some(bracket) => bracket.fixed_amount + (gross_salary - bracket.min) * bracket.rate,
        None => Decimal::ZERO,
    }
}
