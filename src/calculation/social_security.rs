//! Social security contributions: AFP, ISSS and INSAFORP.
//!
//! Each calculator is a pure function of gross salary and the configured
//! [`StatutoryRates`]. AFP employer, ISSS employer and INSAFORP are reported
//! for employer cost accounting and never reduce the employee's net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryRates;

/// Which side of the employment relationship pays a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionParty {
    /// Withheld from the employee's pay.
    Employee,
    /// Paid by the employer on top of gross salary.
    Employer,
}

/// AFP pension contribution withheld from the employee (7.25%).
pub fn afp_employee(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    gross_salary * rates.afp_employee
}

/// AFP pension contribution paid by the employer (7.75%).
pub fn afp_employer(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    gross_salary * rates.afp_employer
}

/// ISSS contribution for either party.
///
/// Gross salary is capped at `monthly_cap` before the rate is applied. The
/// same cap is used for employee (3%) and employer (7.5%).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{ContributionParty, isss};
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = StatutoryRates {
///     afp_employee: Decimal::from_str("0.0725").unwrap(),
///     afp_employer: Decimal::from_str("0.0775").unwrap(),
///     isss_employee: Decimal::from_str("0.03").unwrap(),
///     isss_employer: Decimal::from_str("0.075").unwrap(),
///     insaforp: Decimal::from_str("0.01").unwrap(),
/// };
/// let cap = Decimal::from(1000);
///
/// let capped = isss(Decimal::from(2000), ContributionParty::Employee, &rates, cap);
/// assert_eq!(capped, Decimal::from(30));
/// ```
pub fn isss(
    gross_salary: Decimal,
    party: ContributionParty,
    rates: &StatutoryRates,
    monthly_cap: Decimal,
) -> Decimal {
    let capped = gross_salary.min(monthly_cap);
    let rate = match party {
        ContributionParty::Employee => rates.isss_employee,
        ContributionParty::Employer => rates.isss_employer,
    };
    capped * rate
}

/// INSAFORP training levy, employer only (1%).
pub fn insaforp(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    gross_salary * rates.insaforp
}
