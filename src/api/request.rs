//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EmployeeStatus, PayPeriod, PayrollInput};

/// Request body for the `/calculate` endpoint.
///
/// Contains the employee, the month being paid, and the period figures.
/// The employee's salary is used as the base salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The month being paid.
    pub period: PeriodRequest,
    /// Hours, additional income and optional deductions for the period.
    #[serde(default)]
    pub input: PeriodInputRequest,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name(s).
    pub first_name: String,
    /// Family name(s).
    pub last_name: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Monthly base salary.
    pub salary: Decimal,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Pay period in a calculation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

/// Period figures in a calculation request. Every field defaults to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodInputRequest {
    /// Ordinary hours worked.
    pub ordinary_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Bonuses.
    pub bonifications: Decimal,
    /// Year-end bonus.
    pub aguinaldo: Decimal,
    /// Other taxable income.
    pub other_income: Decimal,
    /// Vacation days paid.
    pub vacation_days: Decimal,
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
}

impl CalculationRequest {
    /// Builds the calculator input from the employee salary and period figures.
    pub fn payroll_input(&self) -> PayrollInput {
        let figures = &self.input;
        PayrollInput {
            base_salary: self.employee.salary,
            ordinary_hours: figures.ordinary_hours,
            overtime_hours: figures.overtime_hours,
            bonifications: figures.bonifications,
            aguinaldo: figures.aguinaldo,
            other_income: figures.other_income,
            vacation_days: figures.vacation_days,
            personal_loans: figures.personal_loans,
            union_fees: figures.union_fees,
            private_insurance: figures.private_insurance,
            cooperative_fees: figures.cooperative_fees,
            other_deductions: figures.other_deductions,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            department: req.department,
            salary: req.salary,
            status: req.status,
        }
    }
}

impl From<PeriodRequest> for PayPeriod {
    fn from(req: PeriodRequest) -> Self {
        PayPeriod {
            month: req.month,
            year: req.year,
        }
    }
}
