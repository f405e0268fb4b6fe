use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A yearly figure together with its calendar-month share (yearly / 12).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub yearly: Decimal,
    pub monthly: Decimal,
}

impl Amount {
    pub fn from_yearly(yearly: Decimal) -> Self {
        Self {
            yearly,
            monthly: yearly / Decimal::from(12),
        }
    }
}

/// Every deduction component of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub state_tax: Amount,
    pub municipal_tax: Amount,
    pub church_tax: Amount,
    pub pension: Amount,
    pub unemployment: Amount,
    pub health_medical: Amount,
    pub health_daily_allowance: Amount,
    /// Medical plus daily allowance.
    pub health_insurance: Amount,
    /// Phased-out work income credit plus any dependent bonus.
    pub work_income_credit: Amount,
    /// All taxes and contributions before the credit.
    pub gross_deductions: Amount,
    /// Gross deductions minus the credit, never below zero.
    pub total_deductions: Amount,
}

/// Immutable snapshot of a net salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub monthly_base_amount: Decimal,
    pub yearly_extra: Decimal,
    pub yearly_gross_income: Decimal,
    /// Yearly gross income spread over twelve months.
    pub monthly_gross_average: Decimal,
    pub breakdown: DeductionBreakdown,
    pub net_yearly: Decimal,
    pub net_monthly: Decimal,
    /// Total deductions as a percentage of yearly gross income.
    pub effective_rate: Decimal,
}
