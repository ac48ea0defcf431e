//! Property tests for the payroll pipeline.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{compute_payroll, find_bracket, rent_tax};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::models::PayrollInput;

fn config() -> PayrollConfig {
    ConfigLoader::load("./config/el_salvador")
        .expect("Failed to load config")
        .config()
        .clone()
}

/// Whole-cent amounts from 0.01 up to `max_cents`.
fn cents(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (1..=max_cents).prop_map(|c| Decimal::new(c, 2))
}

/// Non-negative whole-cent amounts up to `max_cents`, zero included.
fn cents_or_zero(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|c| Decimal::new(c, 2))
}

/// Hours or days in quarter steps.
fn quarters(max_units: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_units * 4).prop_map(|q| Decimal::new(q * 25, 2))
}

fn payroll_input() -> impl Strategy<Value = PayrollInput> {
    (
        cents(2_000_000),
        quarters(80),
        cents_or_zero(100_000),
        cents_or_zero(200_000),
        quarters(30),
        cents_or_zero(50_000),
        (
            cents_or_zero(50_000),
            cents_or_zero(5_000),
            cents_or_zero(10_000),
            cents_or_zero(10_000),
            cents_or_zero(10_000),
        ),
    )
        .prop_map(
            |(base, overtime, bonus, aguinaldo, vacation, other, deductions)| {
                let mut input = PayrollInput::new(base);
                input.overtime_hours = overtime;
                input.bonifications = bonus;
                input.aguinaldo = aguinaldo;
                input.vacation_days = vacation;
                input.other_income = other;
                input.personal_loans = deductions.0;
                input.union_fees = deductions.1;
                input.private_insurance = deductions.2;
                input.cooperative_fees = deductions.3;
                input.other_deductions = deductions.4;
                input
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: net salary is exactly gross minus total deductions.
    #[test]
    fn property_net_is_gross_minus_deductions(input in payroll_input()) {
        let result = compute_payroll(&input, &config());
        prop_assert_eq!(result.net_salary, result.gross_salary - result.total_deductions);

        let rounded = result.rounded();
        prop_assert_eq!(rounded.net_salary, rounded.gross_salary - rounded.total_deductions);
    }

    /// PROPERTY: gross salary is never below the base salary.
    #[test]
    fn property_gross_at_least_base(input in payroll_input()) {
        let result = compute_payroll(&input, &config());
        prop_assert!(result.gross_salary >= input.base_salary);
    }

    /// PROPERTY: the same input always yields the same result.
    #[test]
    fn property_calculation_is_deterministic(input in payroll_input()) {
        let config = config();
        prop_assert_eq!(compute_payroll(&input, &config), compute_payroll(&input, &config));
    }

    /// PROPERTY: total deductions are the statutory deductions plus the optional ones.
    #[test]
    fn property_total_deductions_decompose(input in payroll_input()) {
        let result = compute_payroll(&input, &config());
        prop_assert_eq!(
            result.total_deductions,
            result.statutory_deductions() + input.optional_deductions_total()
        );
    }

    /// PROPERTY: optional deductions never change employer contributions or taxes.
    #[test]
    fn property_optional_deductions_do_not_affect_contributions(
        input in payroll_input(),
        extra in cents(100_000),
    ) {
        let config = config();
        let mut with_loan = input.clone();
        with_loan.personal_loans += extra;

        let before = compute_payroll(&input, &config);
        let after = compute_payroll(&with_loan, &config);

        prop_assert_eq!(before.afp_employer, after.afp_employer);
        prop_assert_eq!(before.isss_employer, after.isss_employer);
        prop_assert_eq!(before.insaforp, after.insaforp);
        prop_assert_eq!(before.rent_tax, after.rent_tax);
        prop_assert_eq!(
            after.net_salary.round_dp(10),
            (before.net_salary - extra).round_dp(10)
        );
    }

    /// PROPERTY: any overtime strictly increases gross salary.
    #[test]
    fn property_overtime_increases_gross(
        input in payroll_input(),
        hours in (1i64..=320).prop_map(|q| Decimal::new(q * 25, 2)),
    ) {
        let config = config();
        let mut with_overtime = input.clone();
        with_overtime.overtime_hours += hours;

        let before = compute_payroll(&input, &config);
        let after = compute_payroll(&with_overtime, &config);
        prop_assert!(after.gross_salary > before.gross_salary);
    }

    /// PROPERTY: more overtime never lowers net salary while gross stays in one
    /// Renta bracket. Crossing a bracket floor can lower it.
    #[test]
    fn property_overtime_within_bracket_never_lowers_net(
        input in payroll_input(),
        hours in (1i64..=320).prop_map(|q| Decimal::new(q * 25, 2)),
    ) {
        let config = config();
        let mut with_overtime = input.clone();
        with_overtime.overtime_hours += hours;

        let before = compute_payroll(&input, &config);
        let after = compute_payroll(&with_overtime, &config);

        let same_bracket = find_bracket(before.gross_salary, config.rent_tax())
            == find_bracket(after.gross_salary, config.rent_tax());
        prop_assume!(same_bracket);
        prop_assert!(
            after.net_salary >= before.net_salary,
            "net fell from {} to {}", before.net_salary, after.net_salary
        );
    }

    /// PROPERTY: ISSS never exceeds the rate applied to the monthly cap.
    #[test]
    fn property_isss_bounded_by_cap(input in payroll_input()) {
        let config = config();
        let result = compute_payroll(&input, &config);
        let cap = config.isss_monthly_cap();

        prop_assert!(result.isss_employee <= cap * config.rates().isss_employee);
        prop_assert!(result.isss_employer <= cap * config.rates().isss_employer);
    }

    /// PROPERTY: Renta is never negative.
    #[test]
    fn property_rent_tax_non_negative(gross in cents_or_zero(100_000_000)) {
        prop_assert!(rent_tax(gross, config().rent_tax()) >= Decimal::ZERO);
    }

    /// PROPERTY: Renta never decreases as whole-cent gross salary increases.
    #[test]
    fn property_rent_tax_monotone(
        low in cents_or_zero(1_000_000),
        step in cents_or_zero(500_000),
    ) {
        let config = config();
        let high = low + step;
        prop_assert!(
            rent_tax(low, config.rent_tax()) <= rent_tax(high, config.rent_tax()),
            "rent_tax({}) > rent_tax({})", low, high
        );
    }
}
