//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory rate set.
///
/// Contains identifying information about the jurisdiction and the
/// version of the rates in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryMetadata {
    /// The country the rates apply to (e.g., "SV").
    pub country: String,
    /// The ISO currency code salaries are paid in.
    pub currency: String,
    /// The version or effective date of the rate set.
    pub version: String,
    /// Where the figures were taken from.
    pub source: String,
}

/// Percentage rates applied to gross salary, expressed as fractions
/// (0.0725 for 7.25%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// AFP pension contribution withheld from the employee.
    pub afp_employee: Decimal,
    /// AFP pension contribution paid by the employer.
    pub afp_employer: Decimal,
    /// ISSS social security contribution withheld from the employee.
    pub isss_employee: Decimal,
    /// ISSS social security contribution paid by the employer.
    pub isss_employer: Decimal,
    /// INSAFORP vocational training levy, employer only.
    pub insaforp: Decimal,
}

/// ISSS contribution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsssConfig {
    /// Monthly salary ceiling above which ISSS is not charged.
    pub monthly_cap: Decimal,
}

/// Structure of `statutory.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryConfig {
    /// Rate set metadata.
    pub metadata: StatutoryMetadata,
    /// Contribution rates.
    pub rates: StatutoryRates,
    /// ISSS settings.
    pub isss: IsssConfig,
}

/// One row of the Renta withholding table.
///
/// Both bounds are inclusive. A bracket without `max` is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lowest gross salary in this bracket.
    pub min: Decimal,
    /// Highest gross salary in this bracket, `None` for the top bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate applied to the excess over `min`.
    pub rate: Decimal,
    /// Fixed amount owed on reaching this bracket.
    pub fixed_amount: Decimal,
}

impl TaxBracket {
    /// Returns true if `gross` lies within `min..=max`.
    pub fn contains(&self, gross: Decimal) -> bool {
        self.min <= gross && self.max.is_none_or(|max| gross <= max)
    }
}

/// Structure of `rent_tax.yaml`: the progressive Renta table ordered by
/// ascending `min`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentTaxTable {
    /// The brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
}

impl RentTaxTable {
    /// Checks that the table can resolve every non-negative gross salary.
    ///
    /// The first bracket must start at zero, brackets must be strictly
    /// ascending, and only the last bracket may (and must) be open-ended.
    pub fn validate(&self) -> EngineResult<()> {
        let Some(first) = self.brackets.first() else {
            return Err(invalid("rent tax table has no brackets"));
        };
        if !first.min.is_zero() {
            return Err(invalid(format!(
                "first rent tax bracket must start at 0, found {}",
                first.min
            )));
        }

        let last_index = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            check_rate(&format!("rent tax bracket {} rate", index + 1), bracket.rate)?;
            if bracket.fixed_amount.is_sign_negative() {
                return Err(invalid(format!(
                    "rent tax bracket {} fixed amount must not be negative",
                    index + 1
                )));
            }
            match bracket.max {
                Some(max) if max < bracket.min => {
                    return Err(invalid(format!(
                        "rent tax bracket {} has max {} below min {}",
                        index + 1,
                        max,
                        bracket.min
                    )));
                }
                Some(_) if index == last_index => {
                    return Err(invalid("last rent tax bracket must be open-ended"));
                }
                None if index != last_index => {
                    return Err(invalid(format!(
                        "only the last rent tax bracket may be open-ended, bracket {} is not last",
                        index + 1
                    )));
                }
                _ => {}
            }
            if index > 0 && bracket.min <= self.brackets[index - 1].min {
                return Err(invalid(format!(
                    "rent tax brackets must be in ascending order, bracket {} starts at {}",
                    index + 1,
                    bracket.min
                )));
            }
        }

        Ok(())
    }
}

/// The complete payroll configuration loaded from YAML files.
///
/// A `PayrollConfig` is always validated: it can only be built through
/// [`PayrollConfig::new`], which rejects rates outside `[0, 1]`, a
/// non-positive ISSS cap, and malformed bracket tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollConfig {
    /// Rate set metadata.
    metadata: StatutoryMetadata,
    /// Contribution rates.
    rates: StatutoryRates,
    /// ISSS monthly salary ceiling.
    isss_monthly_cap: Decimal,
    /// Renta withholding table.
    rent_tax: RentTaxTable,
}

impl PayrollConfig {
    /// Creates a new, validated PayrollConfig from its component parts.
    pub fn new(statutory: StatutoryConfig, rent_tax: RentTaxTable) -> EngineResult<Self> {
        let rates = &statutory.rates;
        check_rate("afp_employee", rates.afp_employee)?;
        check_rate("afp_employer", rates.afp_employer)?;
        check_rate("isss_employee", rates.isss_employee)?;
        check_rate("isss_employer", rates.isss_employer)?;
        check_rate("insaforp", rates.insaforp)?;

        if statutory.isss.monthly_cap <= Decimal::ZERO {
            return Err(invalid(format!(
                "isss monthly cap must be positive, found {}",
                statutory.isss.monthly_cap
            )));
        }

        rent_tax.validate()?;

        Ok(Self {
            metadata: statutory.metadata,
            rates: statutory.rates,
            isss_monthly_cap: statutory.isss.monthly_cap,
            rent_tax,
        })
    }

    /// Returns the rate set metadata.
    pub fn metadata(&self) -> &StatutoryMetadata {
        &self.metadata
    }

    /// Returns the contribution rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns the ISSS monthly salary ceiling.
    pub fn isss_monthly_cap(&self) -> Decimal {
        self.isss_monthly_cap
    }

    /// Returns the Renta withholding table.
    pub fn rent_tax(&self) -> &RentTaxTable {
        &self.rent_tax
    }
}

fn check_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate.is_sign_negative() || rate > Decimal::ONE {
        return Err(invalid(format!(
            "{} must be between 0 and 1, found {}",
            name, rate
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}
