//! Presentation of calculation results for the command line.
//!
//! The engine works at full precision. Every figure shown here is rounded
//! half-up to two decimal places at this final step only.

use std::fmt::Write;

use rust_decimal::Decimal;
use salary_core::calculations::common::round_half_up;
use salary_core::{Amount, CalculationResult, DeductionBreakdown};

fn round_amount(amount: Amount) -> Amount {
    Amount {
        yearly: round_half_up(amount.yearly),
        monthly: round_half_up(amount.monthly),
    }
}

/// Returns a copy of `result` with every monetary figure and the effective
/// rate rounded for display.
pub fn rounded(result: &CalculationResult) -> CalculationResult {
    let b = &result.breakdown;

    CalculationResult {
        monthly_base_amount: round_half_up(result.monthly_base_amount),
        yearly_extra: round_half_up(result.yearly_extra),
        yearly_gross_income: round_half_up(result.yearly_gross_income),
        monthly_gross_average: round_half_up(result.monthly_gross_average),
        breakdown: DeductionBreakdown {
            state_tax: round_amount(b.state_tax),
            municipal_tax: round_amount(b.municipal_tax),
            church_tax: round_amount(b.church_tax),
            pension: round_amount(b.pension),
            unemployment: round_amount(b.unemployment),
            health_medical: round_amount(b.health_medical),
            health_daily_allowance: round_amount(b.health_daily_allowance),
            health_insurance: round_amount(b.health_insurance),
            work_income_credit: round_amount(b.work_income_credit),
            gross_deductions: round_amount(b.gross_deductions),
            total_deductions: round_amount(b.total_deductions),
        },
        net_yearly: round_half_up(result.net_yearly),
        net_monthly: round_half_up(result.net_monthly),
        effective_rate: round_half_up(result.effective_rate),
    }
}

/// Serializes the rounded result as pretty-printed JSON.
pub fn render_json(result: &CalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rounded(result))
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

fn push_row(
    out: &mut String,
    label: &str,
    amount: Amount,
) {
    let _ = writeln!(
        out,
        "{:<28}{:>14}{:>14}",
        label,
        money(amount.yearly),
        money(amount.monthly)
    );
}

/// Renders the result as a fixed-width table with yearly and monthly columns.
///
/// The church tax row is only shown when it is non-zero.
pub fn render_table(result: &CalculationResult) -> String {
    let b = &result.breakdown;
    let mut out = String::new();

    let _ = writeln!(out, "{:<28}{:>14}{:>14}", "", "Yearly", "Monthly");
    push_row(
        &mut out,
        "Gross income",
        Amount {
            yearly: result.yearly_gross_income,
            monthly: result.monthly_gross_average,
        },
    );
    out.push('\n');
    push_row(&mut out, "State tax", b.state_tax);
    push_row(&mut out, "Municipal tax", b.municipal_tax);
    if !b.church_tax.yearly.is_zero() {
        push_row(&mut out, "Church tax", b.church_tax);
    }
    push_row(&mut out, "Pension", b.pension);
    push_row(&mut out, "Unemployment insurance", b.unemployment);
    push_row(&mut out, "Health insurance", b.health_insurance);
    push_row(&mut out, "  medical care", b.health_medical);
    push_row(&mut out, "  daily allowance", b.health_daily_allowance);
    push_row(&mut out, "Work income credit", b.work_income_credit);
    out.push('\n');
    push_row(&mut out, "Total deductions", b.total_deductions);
    push_row(
        &mut out,
        "Net income",
        Amount {
            yearly: result.net_yearly,
            monthly: result.net_monthly,
        },
    );
    let _ = writeln!(out, "{:<28}{:>13}%", "Effective rate", money(result.effective_rate));

    out
}
