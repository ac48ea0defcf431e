//! Calculation logic for the payroll engine.
//!
//! This module contains the time-based rate derivations (hourly and daily
//! rates, overtime and vacation pay), the social security calculators (AFP,
//! ISSS, INSAFORP), the progressive Renta withholding lookup, the payroll
//! orchestrator that chains them together, and the presentation helpers
//! for rounding and formatting currency.

mod currency;
mod payroll;
mod rates;
mod rent_tax;
mod social_security;

pub use currency::{format_currency, round_currency};
pub use payroll::{
    PayrollCalculation, WARNING_NEGATIVE_NET, WARNING_ORDINARY_HOURS, calculate_payroll,
    compute_payroll,
};
pub use rates::{
    DAYS_PER_MONTH, HOURS_PER_DAY, HOURS_PER_MONTH, OVERTIME_MULTIPLIER, WORKING_DAYS_PER_MONTH,
    daily_rate, hourly_rate, overtime_amount, vacation_amount,
};
pub use rent_tax::{find_bracket, rent_tax};
pub use social_security::{ContributionParty, afp_employee, afp_employer, insaforp, isss};
