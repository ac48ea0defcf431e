//! Pay period model.
//!
//! Payrolls are run per calendar month. This module contains the
//! [`PayPeriod`] type and the Spanish month names used to label periods.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Returns the Spanish name of a month numbered 1-12.
///
/// # Example
///
/// ```
/// use payroll_engine::models::month_name;
///
/// assert_eq!(month_name(1), Some("Enero"));
/// assert_eq!(month_name(12), Some("Diciembre"));
/// assert_eq!(month_name(13), None);
/// ```
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// A monthly pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(3, 2025).unwrap();
/// assert_eq!(period.label(), "Marzo 2025");
/// assert!(PayPeriod::new(0, 2025).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1-12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let period = Self { month, year };
        period.validate()?;
        Ok(period)
    }

    /// Checks that the month is within 1-12.
    ///
    /// Deserialized periods bypass [`PayPeriod::new`], so callers receiving
    /// them from outside should validate before use.
    pub fn validate(&self) -> EngineResult<()> {
        match month_name(self.month) {
            Some(_) => Ok(()),
            None => Err(EngineError::InvalidPeriod { month: self.month }),
        }
    }

    /// Returns the period label, e.g. `"Enero 2025"`.
    ///
    /// An out-of-range month yields only the year.
    pub fn label(&self) -> String {
        match month_name(self.month) {
            Some(name) => format!("{} {}", name, self.year),
            None => self.year.to_string(),
        }
    }
}
