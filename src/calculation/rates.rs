//! Time-based rate derivations.
//!
//! This module converts a monthly base salary into hourly and daily rates
//! and prices overtime and vacation from them.
//!
//! Two different month lengths are in play. The hourly rate divides by the
//! 176 hours of a 22-working-day month, while the daily rate divides by a
//! flat 30-day month. Unifying them would change every overtime and
//! vacation amount, so both divisors are kept as separate constants.

use rust_decimal::Decimal;

/// Ordinary hours in a working day.
pub const HOURS_PER_DAY: u32 = 8;

/// Working days in a month, used only for the hourly rate.
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// Ordinary hours in a month (8 x 22).
pub const HOURS_PER_MONTH: u32 = HOURS_PER_DAY * WORKING_DAYS_PER_MONTH;

/// Calendar days in a month, used only for the daily rate.
pub const DAYS_PER_MONTH: u32 = 30;

/// Overtime is paid at double the ordinary hourly rate.
pub const OVERTIME_MULTIPLIER: u32 = 2;

/// Returns the ordinary hourly rate: `base_salary / 176`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_rate(Decimal::new(1760, 0)), Decimal::new(10, 0));
/// ```
pub fn hourly_rate(base_salary: Decimal) -> Decimal {
    base_salary / Decimal::from(HOURS_PER_MONTH)
}

/// Returns the daily rate: `base_salary / 30`.
pub fn daily_rate(base_salary: Decimal) -> Decimal {
    base_salary / Decimal::from(DAYS_PER_MONTH)
}

/// Returns overtime pay: `overtime_hours x hourly_rate x 2`.
pub fn overtime_amount(overtime_hours: Decimal, hourly_rate: Decimal) -> Decimal {
    overtime_hours * hourly_rate * Decimal::from(OVERTIME_MULTIPLIER)
}

/// Returns vacation pay: `vacation_days x daily_rate`.
pub fn vacation_amount(vacation_days: Decimal, daily_rate: Decimal) -> Decimal {
    vacation_days * daily_rate
}
