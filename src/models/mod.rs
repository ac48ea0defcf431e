//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod pay_period;
mod payroll_input;
mod payroll_result;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use employee::{Employee, EmployeeStatus};
pub use pay_period::{PayPeriod, month_name};
pub use payroll_input::{MAX_INPUT_VALUE, PayrollInput};
pub use payroll_result::PayrollResult;
