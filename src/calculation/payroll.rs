//! Payroll orchestration.
//!
//! This module chains the rate helpers, social security calculators and the
//! Renta lookup into a complete [`PayrollResult`], recording an audit step
//! for every rule it applies.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, PayrollInput, PayrollResult};

use super::currency::format_currency;
use super::rates::{
    DAYS_PER_MONTH, HOURS_PER_MONTH, OVERTIME_MULTIPLIER, daily_rate, hourly_rate,
    overtime_amount, vacation_amount,
};
use super::rent_tax::{find_bracket, rent_tax};
use super::social_security::{ContributionParty, afp_employee, afp_employer, insaforp, isss};

/// Warning code raised when ordinary hours exceed the monthly standard.
pub const WARNING_ORDINARY_HOURS: &str = "ORDINARY_HOURS_ABOVE_STANDARD";

/// Warning code raised when deductions exceed gross salary.
pub const WARNING_NEGATIVE_NET: &str = "NEGATIVE_NET_SALARY";

/// The outcome of a validated payroll calculation.
#[derive(Debug, Clone)]
pub struct PayrollCalculation {
    /// The full-precision payroll breakdown.
    pub result: PayrollResult,
    /// One audit step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Conditions worth a second look that did not stop the calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Runs the payroll pipeline without validating the input.
///
/// 1. Hourly rate and overtime pay from the base salary.
/// 2. Daily rate and vacation pay from the base salary.
/// 3. Gross salary as the sum of every income item.
/// 4. Statutory employee deductions and employer contributions from gross.
/// 5. Total deductions: statutory plus the five optional deductions.
/// 6. Net salary: gross minus total deductions.
///
/// Inputs are assumed non-negative; use [`calculate_payroll`] to have them
/// checked first.
pub fn compute_payroll(input: &PayrollInput, config: &PayrollConfig) -> PayrollResult {
    let rates = config.rates();
    let isss_cap = config.isss_monthly_cap();

    let overtime = overtime_amount(input.overtime_hours, hourly_rate(input.base_salary));
    let vacation = vacation_amount(input.vacation_days, daily_rate(input.base_salary));

    let gross_salary = input.base_salary
        + overtime
        + input.bonifications
        + input.aguinaldo
        + vacation
        + input.other_income;

    let afp_employee = afp_employee(gross_salary, rates);
    let isss_employee = isss(gross_salary, ContributionParty::Employee, rates, isss_cap);
    let rent_tax = rent_tax(gross_salary, config.rent_tax());

    let total_deductions =
        afp_employee + isss_employee + rent_tax + input.optional_deductions_total();

    PayrollResult {
        base_salary: input.base_salary,
        overtime_amount: overtime,
        bonifications: input.bonifications,
        aguinaldo: input.aguinaldo,
        vacation_amount: vacation,
        other_income: input.other_income,
        gross_salary,
        afp_employee,
        isss_employee,
        rent_tax,
        personal_loans: input.personal_loans,
        union_fees: input.union_fees,
        private_insurance: input.private_insurance,
        cooperative_fees: input.cooperative_fees,
        other_deductions: input.other_deductions,
        total_deductions,
        net_salary: gross_salary - total_deductions,
        afp_employer: afp_employer(gross_salary, rates),
        isss_employer: isss(gross_salary, ContributionParty::Employer, rates, isss_cap),
        insaforp: insaforp(gross_salary, rates),
    }
}

/// Validates `input` and calculates the payroll with an audit trail.
///
/// # Errors
///
/// Returns `InvalidInput` if the base salary is not positive, any other
/// field is negative, or a figure is too large to calculate with.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/el_salvador")?;
/// let mut input = PayrollInput::new(Decimal::new(2500, 0));
/// input.overtime_hours = Decimal::new(8, 0);
///
/// let calculation = calculate_payroll(&input, loader.config())?;
/// println!("Net salary: {}", calculation.result.rounded().net_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_payroll(
    input: &PayrollInput,
    config: &PayrollConfig,
) -> EngineResult<PayrollCalculation> {
    input.validate()?;

    let result = compute_payroll(input, config);
    let audit_steps = audit_steps(input, &result, config);
    let warnings = collect_warnings(input, &result);

    debug!(
        gross_salary = %result.gross_salary,
        total_deductions = %result.total_deductions,
        net_salary = %result.net_salary,
        warnings = warnings.len(),
        "Payroll calculated"
    );

    Ok(PayrollCalculation {
        result,
        audit_steps,
        warnings,
    })
}

fn collect_warnings(input: &PayrollInput, result: &PayrollResult) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.ordinary_hours > Decimal::from(HOURS_PER_MONTH) {
        warnings.push(AuditWarning::new(
            WARNING_ORDINARY_HOURS,
            format!(
                "Ordinary hours {} exceed the {}-hour monthly standard; report the excess as overtime",
                input.ordinary_hours, HOURS_PER_MONTH
            ),
            "medium",
        ));
    }

    if result.net_salary < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            WARNING_NEGATIVE_NET,
            format!(
                "Deductions of {} exceed gross salary of {}",
                format_currency(result.total_deductions),
                format_currency(result.gross_salary)
            ),
            "high",
        ));
    }

    warnings
}

fn audit_steps(
    input: &PayrollInput,
    result: &PayrollResult,
    config: &PayrollConfig,
) -> Vec<AuditStep> {
    let rates = config.rates();
    let hourly = hourly_rate(input.base_salary);
    let daily = daily_rate(input.base_salary);
    let bracket = find_bracket(result.gross_salary, config.rent_tax());

    let rent_tax_reasoning = match bracket {
        Some(b) if b.rate.is_zero() => format!(
            "Gross {} falls in the exempt bracket starting at {}",
            format_currency(result.gross_salary),
            format_currency(b.min)
        ),
        Some(b) => format!(
            "{} + ({} - {}) x {} = {}",
            format_currency(b.fixed_amount),
            format_currency(result.gross_salary),
            format_currency(b.min),
            b.rate,
            format_currency(result.rent_tax)
        ),
        None => "No rent tax brackets configured".to_string(),
    };

    let steps = vec![
        (
            "overtime",
            "Overtime Pay",
            "Codigo de Trabajo",
            serde_json::json!({
                "base_salary": input.base_salary.to_string(),
                "overtime_hours": input.overtime_hours.to_string(),
                "hours_per_month": HOURS_PER_MONTH,
                "multiplier": OVERTIME_MULTIPLIER
            }),
            serde_json::json!({
                "hourly_rate": hourly.to_string(),
                "overtime_amount": result.overtime_amount.to_string()
            }),
            format!(
                "{} / {} = {} per hour; {} h x {} x {} = {}",
                format_currency(input.base_salary),
                HOURS_PER_MONTH,
                format_currency(hourly),
                input.overtime_hours,
                format_currency(hourly),
                OVERTIME_MULTIPLIER,
                format_currency(result.overtime_amount)
            ),
        ),
        (
            "vacation",
            "Vacation Pay",
            "Codigo de Trabajo",
            serde_json::json!({
                "base_salary": input.base_salary.to_string(),
                "vacation_days": input.vacation_days.to_string(),
                "days_per_month": DAYS_PER_MONTH
            }),
            serde_json::json!({
                "daily_rate": daily.to_string(),
                "vacation_amount": result.vacation_amount.to_string()
            }),
            format!(
                "{} / {} = {} per day; {} days = {}",
                format_currency(input.base_salary),
                DAYS_PER_MONTH,
                format_currency(daily),
                input.vacation_days,
                format_currency(result.vacation_amount)
            ),
        ),
        (
            "gross_salary",
            "Gross Salary",
            "Codigo de Trabajo",
            serde_json::json!({
                "base_salary": result.base_salary.to_string(),
                "overtime_amount": result.overtime_amount.to_string(),
                "bonifications": result.bonifications.to_string(),
                "aguinaldo": result.aguinaldo.to_string(),
                "vacation_amount": result.vacation_amount.to_string(),
                "other_income": result.other_income.to_string()
            }),
            serde_json::json!({ "gross_salary": result.gross_salary.to_string() }),
            format!(
                "Sum of income items = {}",
                format_currency(result.gross_salary)
            ),
        ),
        (
            "afp_employee",
            "AFP Employee Contribution",
            "Ley del Sistema de Ahorro para Pensiones",
            serde_json::json!({
                "gross_salary": result.gross_salary.to_string(),
                "rate": rates.afp_employee.to_string()
            }),
            serde_json::json!({ "afp_employee": result.afp_employee.to_string() }),
            format!(
                "{} x {} = {}",
                format_currency(result.gross_salary),
                rates.afp_employee,
                format_currency(result.afp_employee)
            ),
        ),
        (
            "isss_employee",
            "ISSS Employee Contribution",
            "Ley del Seguro Social",
            serde_json::json!({
                "gross_salary": result.gross_salary.to_string(),
                "monthly_cap": config.isss_monthly_cap().to_string(),
                "rate": rates.isss_employee.to_string()
            }),
            serde_json::json!({
                "isss_employee": result.isss_employee.to_string(),
                "cap_applied": result.gross_salary > config.isss_monthly_cap()
            }),
            format!(
                "min({}, {}) x {} = {}",
                format_currency(result.gross_salary),
                format_currency(config.isss_monthly_cap()),
                rates.isss_employee,
                format_currency(result.isss_employee)
            ),
        ),
        (
            "rent_tax",
            "Renta Withholding",
            "Ley de Impuesto sobre la Renta",
            serde_json::json!({
                "gross_salary": result.gross_salary.to_string(),
                "bracket_min": bracket.map(|b| b.min.to_string()),
                "bracket_rate": bracket.map(|b| b.rate.to_string()),
                "bracket_fixed_amount": bracket.map(|b| b.fixed_amount.to_string())
            }),
            serde_json::json!({ "rent_tax": result.rent_tax.to_string() }),
            rent_tax_reasoning,
        ),
        (
            "total_deductions",
            "Total Deductions and Net Salary",
            "Codigo de Trabajo",
            serde_json::json!({
                "statutory_deductions": result.statutory_deductions().to_string(),
                "optional_deductions": input.optional_deductions_total().to_string()
            }),
            serde_json::json!({
                "total_deductions": result.total_deductions.to_string(),
                "net_salary": result.net_salary.to_string()
            }),
            format!(
                "{} - {} = {}",
                format_currency(result.gross_salary),
                format_currency(result.total_deductions),
                format_currency(result.net_salary)
            ),
        ),
        (
            "employer_contributions",
            "Employer Contributions",
            "Ley SAP, Ley del Seguro Social, Ley de Formacion Profesional",
            serde_json::json!({
                "gross_salary": result.gross_salary.to_string(),
                "afp_employer_rate": rates.afp_employer.to_string(),
                "isss_employer_rate": rates.isss_employer.to_string(),
                "insaforp_rate": rates.insaforp.to_string()
            }),
            serde_json::json!({
                "afp_employer": result.afp_employer.to_string(),
                "isss_employer": result.isss_employer.to_string(),
                "insaforp": result.insaforp.to_string(),
                "employer_cost": result.employer_cost().to_string()
            }),
            format!(
                "Employer pays {} on top of gross for a total cost of {}; net salary unaffected",
                format_currency(result.employer_contributions_total()),
                format_currency(result.employer_cost())
            ),
        ),
    ];

    steps
        .into_iter()
        .enumerate()
        .map(
            |(index, (rule_id, rule_name, legal_ref, input, output, reasoning))| AuditStep {
                step_number: index as u32 + 1,
                rule_id: rule_id.to_string(),
                rule_name: rule_name.to_string(),
                legal_ref: legal_ref.to_string(),
                input,
                output,
                reasoning,
            },
        )
        .collect()
}
