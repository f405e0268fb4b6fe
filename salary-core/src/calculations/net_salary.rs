//! Net salary calculation.
//!
//! Ties the bracket resolver, contributions, and work income credit together:
//!
//! 1. Annualize: `monthly_base × multiplier + yearly_extra`. The multiplier
//!    (e.g. 12.5, twelve months plus half a month of holiday bonus) is never
//!    applied to the yearly extra.
//! 2. State tax, municipal tax, church tax, and every contribution, each
//!    computed independently from the yearly income.
//! 3. Gross deductions are their sum.
//! 4. The work income credit is computed from the same yearly income.
//! 5. Total deductions are gross deductions minus the credit, floored at 0.
//! 6. Net income is yearly income minus total deductions. Monthly figures are
//!    always yearly / 12.
//! 7. Effective rate is total deductions as a percentage of yearly income.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::NetSalaryCalculator;
//! use salary_core::{
//!     CalculationInput, ContributionRates, CreditParameters, RateSchedule, ScheduleTables,
//!     TaxBracket,
//! };
//!
//! let schedule = RateSchedule::load(ScheduleTables {
//!     tax_year: 2025,
//!     annualization_multiplier: dec!(12.5),
//!     yearly_income_ceiling: dec!(12500000000),
//!     brackets: vec![
//!         TaxBracket::new(dec!(0), dec!(0), dec!(12.64)),
//!         TaxBracket::new(dec!(21200), dec!(2680), dec!(19.00)),
//!         TaxBracket::new(dec!(31500), dec!(4637), dec!(30.25)),
//!     ],
//!     contributions: ContributionRates {
//!         pension_under_53: dec!(7.15),
//!         pension_53_to_62: dec!(8.65),
//!         pension_over_62: dec!(7.15),
//!         unemployment: dec!(0.59),
//!         health_medical: dec!(0.51),
//!         health_daily_allowance: dec!(1.01),
//!         health_daily_allowance_threshold: dec!(16862),
//!     },
//!     credit: CreditParameters {
//!         max_credit: dec!(3225),
//!         reduction_threshold_1: dec!(24250),
//!         reduction_threshold_2: dec!(42550),
//!         reduction_rate_1: dec!(2.22),
//!         reduction_rate_2: dec!(3.44),
//!         child_bonus: dec!(50),
//!         single_parent_child_bonus: dec!(100),
//!     },
//! })
//! .unwrap();
//!
//! let input = CalculationInput::new(dec!(3000), dec!(7.50));
//! let result = NetSalaryCalculator::new(&schedule).calculate(&input).unwrap();
//!
//! assert_eq!(result.yearly_gross_income, dec!(37500));
//! assert_eq!(result.breakdown.state_tax.yearly, dec!(6452));
//! assert_eq!(result.breakdown.work_income_credit.yearly, dec!(2930.85));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, percent_of};
use crate::calculations::contributions::ContributionCalculator;
use crate::calculations::state_tax::progressive_tax;
use crate::calculations::work_income_credit::WorkIncomeCredit;
use crate::{Amount, CalculationInput, CalculationResult, DeductionBreakdown, RateSchedule};

/// Errors for inputs the engine refuses to calculate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The monthly base salary must be positive.
    #[error("monthly base amount must be positive, got {0}")]
    NonPositiveBaseAmount(Decimal),

    /// Extra yearly income cannot be negative.
    #[error("yearly extra income must be non-negative, got {0}")]
    NegativeYearlyExtra(Decimal),

    /// A caller-supplied flat rate is negative.
    #[error("rate '{name}' must be non-negative, got {value}")]
    NegativeRate { name: &'static str, value: Decimal },

    /// Yearly income exceeds the schedule's sanity ceiling.
    #[error("yearly income {income} exceeds the ceiling of {ceiling}")]
    IncomeAboveCeiling { income: Decimal, ceiling: Decimal },

    /// Annualizing the input, or a tax or credit figure derived from it,
    /// overflowed decimal range.
    #[error("yearly income is out of range for this schedule")]
    IncomeOverflow,
}

/// Calculator for net salary against a validated rate schedule.
///
/// The schedule is borrowed read-only, so any number of calculators may share
/// one schedule.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator<'a> {
    schedule: &'a RateSchedule,
}

impl<'a> NetSalaryCalculator<'a> {
    pub fn new(schedule: &'a RateSchedule) -> Self {
        Self { schedule }
    }

    /// Calculates the full net salary breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if:
    /// - the monthly base amount is zero or negative
    /// - the yearly extra or any flat rate is negative
    /// - the annualized income exceeds the schedule's income ceiling
    /// - the annualized income, or any tax, contribution, credit, or rate
    ///   derived from it, does not fit in a `Decimal`
    ///   ([`InputError::IncomeOverflow`])
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, InputError> {
        self.validate(input)?;

        let yearly_income = self.yearly_income(input)?;
        let ceiling = self.schedule.yearly_income_ceiling();
        if yearly_income > ceiling {
            return Err(InputError::IncomeAboveCeiling {
                income: yearly_income,
                ceiling,
            });
        }
        self.check_range(yearly_income, input)?;

        let result = self.breakdown_for_yearly_income(yearly_income, input);

        debug!(
            tax_year = self.schedule.tax_year(),
            yearly_income = %result.yearly_gross_income,
            total_deductions = %result.breakdown.total_deductions.yearly,
            net_yearly = %result.net_yearly,
            "calculated net salary"
        );

        Ok(result)
    }

    fn validate(
        &self,
        input: &CalculationInput,
    ) -> Result<(), InputError> {
        if input.monthly_base_amount <= Decimal::ZERO {
            return Err(InputError::NonPositiveBaseAmount(
                input.monthly_base_amount,
            ));
        }
        if input.yearly_extra < Decimal::ZERO {
            return Err(InputError::NegativeYearlyExtra(input.yearly_extra));
        }
        if input.flat_rates.sub_jurisdiction_rate < Decimal::ZERO {
            return Err(InputError::NegativeRate {
                name: "sub_jurisdiction_rate",
                value: input.flat_rates.sub_jurisdiction_rate,
            });
        }
        if input.flat_rates.membership_rate < Decimal::ZERO {
            return Err(InputError::NegativeRate {
                name: "membership_rate",
                value: input.flat_rates.membership_rate,
            });
        }
        Ok(())
    }

    /// Annualizes the monthly base amount and adds the yearly extra.
    fn yearly_income(
        &self,
        input: &CalculationInput,
    ) -> Result<Decimal, InputError> {
        input
            .monthly_base_amount
            .checked_mul(self.schedule.annualization_multiplier())
            .and_then(|yearly_base| yearly_base.checked_add(input.yearly_extra))
            .ok_or(InputError::IncomeOverflow)
    }

    /// Bounds every product and sum the breakdown forms for `yearly_income`.
    ///
    /// Each tax, contribution, and credit reduction is at most
    /// `yearly_income × rate`, so one product against the sum of all
    /// applicable rates covers them all. The top base tax bounds the state
    /// tax offset, and the larger child bonus bounds the dependent bonus.
    fn check_range(
        &self,
        yearly_income: Decimal,
        input: &CalculationInput,
    ) -> Result<(), InputError> {
        let brackets = self.schedule.brackets();
        let contributions = self.schedule.contributions();
        let credit = self.schedule.credit();

        let top_rate = brackets.iter().map(|b| b.rate).max().unwrap_or(Decimal::ZERO);
        let top_base_tax = brackets.iter().map(|b| b.base_tax).max().unwrap_or(Decimal::ZERO);
        let membership_rate = if input.membership {
            input.flat_rates.membership_rate
        } else {
            Decimal::ZERO
        };
        let per_child = max(credit.child_bonus, credit.single_parent_child_bonus);

        let rates = [
            top_rate,
            input.flat_rates.sub_jurisdiction_rate,
            membership_rate,
            contributions.pension_rate(input.age_band),
            contributions.unemployment,
            contributions.health_medical,
            contributions.health_daily_allowance,
            credit.reduction_rate_1,
            credit.reduction_rate_2,
        ];

        let deductions_bound = rates
            .iter()
            .try_fold(Decimal::ZERO, |sum, rate| sum.checked_add(*rate))
            .and_then(|rate| yearly_income.checked_mul(rate))
            .and_then(|product| top_base_tax.checked_add(product / Decimal::ONE_HUNDRED));
        let credit_bound = per_child
            .checked_mul(Decimal::from(input.dependents))
            .and_then(|bonus| bonus.checked_add(credit.max_credit));
        // Effective rate divides by income, which may be tiny.
        let rate_bound = deductions_bound
            .and_then(|bound| bound.checked_div(yearly_income))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));

        match (deductions_bound, credit_bound, rate_bound) {
            (Some(_), Some(_), Some(_)) => Ok(()),
            _ => Err(InputError::IncomeOverflow),
        }
    }

    /// Computes every component for an already-annualized income.
    ///
    /// Performs no validation and assumes [`Self::check_range`] has passed
    /// for non-zero income. Defined for zero income: every tax and
    /// contribution is zero, the credit is at its maximum, and totals are 0.
    pub(crate) fn breakdown_for_yearly_income(
        &self,
        yearly_income: Decimal,
        input: &CalculationInput,
    ) -> CalculationResult {
        let state_tax = progressive_tax(yearly_income, self.schedule.brackets());
        let municipal_tax = percent_of(yearly_income, input.flat_rates.sub_jurisdiction_rate);
        let church_tax = if input.membership {
            percent_of(yearly_income, input.flat_rates.membership_rate)
        } else {
            Decimal::ZERO
        };
        let contributions = ContributionCalculator::new(self.schedule.contributions())
            .calculate(yearly_income, input.age_band);

        let gross_deductions = state_tax + municipal_tax + church_tax + contributions.total();

        let credit = WorkIncomeCredit::new(self.schedule.credit()).calculate(
            yearly_income,
            input.dependents,
            input.single_parent,
        );

        // The credit is not refundable.
        let total_deductions = max(gross_deductions - credit.total, Decimal::ZERO);
        let net_yearly = yearly_income - total_deductions;

        let effective_rate = if yearly_income > Decimal::ZERO {
            total_deductions / yearly_income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let net = Amount::from_yearly(net_yearly);

        CalculationResult {
            monthly_base_amount: input.monthly_base_amount,
            yearly_extra: input.yearly_extra,
            yearly_gross_income: yearly_income,
            monthly_gross_average: Amount::from_yearly(yearly_income).monthly,
            breakdown: DeductionBreakdown {
                state_tax: Amount::from_yearly(state_tax),
                municipal_tax: Amount::from_yearly(municipal_tax),
                church_tax: Amount::from_yearly(church_tax),
                pension: Amount::from_yearly(contributions.pension),
                unemployment: Amount::from_yearly(contributions.unemployment),
                health_medical: Amount::from_yearly(contributions.health_medical),
                health_daily_allowance: Amount::from_yearly(contributions.health_daily_allowance),
                health_insurance: Amount::from_yearly(contributions.health_total),
                work_income_credit: Amount::from_yearly(credit.total),
                gross_deductions: Amount::from_yearly(gross_deductions),
                total_deductions: Amount::from_yearly(total_deductions),
            },
            net_yearly: net.yearly,
            net_monthly: net.monthly,
            effective_rate,
        }
    }
}

/// Calculates a net salary breakdown for `input` against `schedule`.
///
/// Shorthand for [`NetSalaryCalculator::calculate`].
pub fn calculate(
    schedule: &RateSchedule,
    input: &CalculationInput,
) -> Result<CalculationResult, InputError> {
    NetSalaryCalculator::new(schedule).calculate(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::AgeBand;
    use crate::calculations::common::round_half_up;
    use crate::models::test_support::{test_schedule, test_tables};

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn helsinki_input(monthly: Decimal) -> CalculationInput {
        CalculationInput::new(monthly, dec!(5.30))
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn calculate_rejects_zero_base_amount() {
        let schedule = test_schedule();

        let result = calculate(&schedule, &helsinki_input(dec!(0)));

        assert_eq!(result, Err(InputError::NonPositiveBaseAmount(dec!(0))));
    }

    #[test]
    fn calculate_rejects_negative_base_amount() {
        let schedule = test_schedule();

        let result = calculate(&schedule, &helsinki_input(dec!(-3000)));

        assert_eq!(result, Err(InputError::NonPositiveBaseAmount(dec!(-3000))));
    }

    #[test]
    fn calculate_rejects_negative_yearly_extra() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(3000)).with_yearly_extra(dec!(-1));

        let result = calculate(&schedule, &input);

        assert_eq!(result, Err(InputError::NegativeYearlyExtra(dec!(-1))));
    }

    #[test]
    fn calculate_rejects_negative_municipal_rate() {
        let schedule = test_schedule();
        let input = CalculationInput::new(dec!(3000), dec!(-7.5));

        let result = calculate(&schedule, &input);

        assert_eq!(
            result,
            Err(InputError::NegativeRate {
                name: "sub_jurisdiction_rate",
                value: dec!(-7.5),
            })
        );
    }

    #[test]
    fn calculate_rejects_negative_membership_rate() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(3000)).with_membership(dec!(-1.5));

        let result = calculate(&schedule, &input);

        assert_eq!(
            result,
            Err(InputError::NegativeRate {
                name: "membership_rate",
                value: dec!(-1.5),
            })
        );
    }

    #[test]
    fn calculate_rejects_income_above_ceiling() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(1000000001));

        let result = calculate(&schedule, &input);

        assert_eq!(
            result,
            Err(InputError::IncomeAboveCeiling {
                income: dec!(12500000012.5),
                ceiling: dec!(12500000000),
            })
        );
    }

    #[test]
    fn calculate_accepts_income_at_ceiling() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(1000000000));

        let result = calculate(&schedule, &input).unwrap();

        assert_eq!(result.yearly_gross_income, dec!(12500000000));
        assert_eq!(result.breakdown.work_income_credit.yearly, dec!(0));
    }

    #[test]
    fn calculate_reports_overflow() {
        let schedule = test_schedule();
        let input = helsinki_input(Decimal::MAX);

        let result = calculate(&schedule, &input);

        assert_eq!(result, Err(InputError::IncomeOverflow));
    }

    #[test]
    fn calculate_reports_overflow_for_taxes_under_a_huge_ceiling() {
        let mut tables = test_tables();
        tables.yearly_income_ceiling = dec!(70000000000000000000000000000);
        let schedule = RateSchedule::load(tables).unwrap();
        // 4e27 × 12.5 = 5e28 fits, but 5e28 × 44.25 does not
        let input = helsinki_input(dec!(4000000000000000000000000000));

        let result = calculate(&schedule, &input);

        assert_eq!(result, Err(InputError::IncomeOverflow));
    }

    #[test]
    fn calculate_reports_overflow_for_huge_dependent_bonus() {
        let mut tables = test_tables();
        tables.credit.child_bonus = dec!(100000000000000000000);
        let schedule = RateSchedule::load(tables).unwrap();
        let input = helsinki_input(dec!(3000)).with_dependents(u32::MAX, false);

        let result = calculate(&schedule, &input);

        assert_eq!(result, Err(InputError::IncomeOverflow));
    }

    #[test]
    fn calculate_reports_overflow_for_effective_rate_on_tiny_income() {
        let mut tables = test_tables();
        tables.brackets[0].base_tax = dec!(100000000000000000000);
        let schedule = RateSchedule::load(tables).unwrap();
        // 1e20 of base tax over 1.25e-19 of income
        let input = helsinki_input(dec!(0.00000000000000000001));

        let result = calculate(&schedule, &input);

        assert_eq!(result, Err(InputError::IncomeOverflow));
    }

    #[test]
    fn calculate_accepts_large_income_within_decimal_range() {
        let mut tables = test_tables();
        tables.yearly_income_ceiling = dec!(10000000000000000000000000);
        let schedule = RateSchedule::load(tables).unwrap();
        let input = helsinki_input(dec!(100000000000000000000000)).with_dependents(3, true);

        let result = calculate(&schedule, &input).unwrap();

        assert_eq!(result.yearly_gross_income, dec!(1250000000000000000000000));
        // Phased credit is exhausted; only the flat bonus remains
        assert_eq!(result.breakdown.work_income_credit.yearly, dec!(300));
        assert!(result.net_yearly > Decimal::ZERO);
    }

    // =========================================================================
    // annualization tests
    // =========================================================================

    #[test]
    fn yearly_income_applies_multiplier_to_base_only() {
        let schedule = test_schedule();
        let calculator = NetSalaryCalculator::new(&schedule);
        let input = helsinki_input(dec!(3000)).with_yearly_extra(dec!(5000));

        let yearly = calculator.yearly_income(&input).unwrap();

        // 3000 × 12.5 + 5000
        assert_eq!(yearly, dec!(42500));
    }

    #[test]
    fn yearly_income_follows_schedule_multiplier() {
        let mut tables = test_tables();
        tables.annualization_multiplier = dec!(12);
        let schedule = RateSchedule::load(tables).unwrap();
        let calculator = NetSalaryCalculator::new(&schedule);

        let yearly = calculator.yearly_income(&helsinki_input(dec!(3000))).unwrap();

        assert_eq!(yearly, dec!(36000));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_reference_scenario() {
        let _guard = init_test_tracing();
        let schedule = test_schedule();
        let input = CalculationInput::new(dec!(3000), dec!(7.50));

        let result = calculate(&schedule, &input).unwrap();
        let b = &result.breakdown;

        assert_eq!(result.yearly_gross_income, dec!(37500));
        assert_eq!(b.state_tax.yearly, dec!(6452));
        assert_eq!(b.municipal_tax.yearly, dec!(2812.5));
        assert_eq!(b.church_tax.yearly, dec!(0));
        assert_eq!(b.pension.yearly, dec!(2681.25));
        assert_eq!(b.unemployment.yearly, dec!(221.25));
        assert_eq!(b.health_insurance.yearly, dec!(570));
        assert_eq!(b.work_income_credit.yearly, dec!(2930.85));
        // 6452 + 2812.5 + 2681.25 + 221.25 + 570
        assert_eq!(b.gross_deductions.yearly, dec!(12737));
        assert_eq!(b.total_deductions.yearly, dec!(9806.15));
        assert_eq!(result.net_yearly, dec!(27693.85));
        assert_eq!(round_half_up(result.net_monthly), dec!(2307.82));
        assert_eq!(round_half_up(result.effective_rate), dec!(26.15));
    }

    #[test]
    fn calculate_monthly_figures_are_yearly_over_twelve() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(3000)).with_yearly_extra(dec!(1200));

        let result = calculate(&schedule, &input).unwrap();
        let b = &result.breakdown;

        // 37500 + 1200 = 38700 over 12 months, not over 12.5
        assert_eq!(result.monthly_gross_average, dec!(3225));
        for amount in [
            b.state_tax,
            b.municipal_tax,
            b.pension,
            b.unemployment,
            b.health_insurance,
            b.work_income_credit,
            b.gross_deductions,
            b.total_deductions,
        ] {
            assert_eq!(amount.monthly, amount.yearly / dec!(12));
        }
        assert_eq!(result.net_monthly, result.net_yearly / dec!(12));
    }

    #[test]
    fn calculate_church_tax_only_for_members() {
        let schedule = test_schedule();
        let member = helsinki_input(dec!(3000)).with_membership(dec!(1.50));
        let mut non_member = member.clone();
        non_member.membership = false;

        let with_church = calculate(&schedule, &member).unwrap();
        let without_church = calculate(&schedule, &non_member).unwrap();

        assert_eq!(with_church.breakdown.church_tax.yearly, dec!(562.5));
        assert_eq!(without_church.breakdown.church_tax.yearly, dec!(0));
        assert_eq!(
            with_church.breakdown.total_deductions.yearly
                - without_church.breakdown.total_deductions.yearly,
            dec!(562.5)
        );
    }

    #[test]
    fn calculate_pension_follows_age_band() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(3000)).with_age_band(AgeBand::From53To62);

        let result = calculate(&schedule, &input).unwrap();

        assert_eq!(result.breakdown.pension.yearly, dec!(3243.75));
    }

    #[test]
    fn calculate_daily_allowance_gated_by_threshold() {
        let schedule = test_schedule();
        // 1300 × 12.5 = 16250, below the 16862 threshold
        let input = helsinki_input(dec!(1300));

        let result = calculate(&schedule, &input).unwrap();
        let b = &result.breakdown;

        assert_eq!(b.health_daily_allowance.yearly, dec!(0));
        assert_eq!(b.health_medical.yearly, dec!(82.875));
        assert_eq!(b.health_insurance.yearly, dec!(82.875));
    }

    #[test]
    fn calculate_credit_cannot_make_deductions_negative() {
        let mut tables = test_tables();
        tables.credit.max_credit = dec!(100000);
        tables.credit.reduction_rate_1 = dec!(0);
        tables.credit.reduction_rate_2 = dec!(0);
        let schedule = RateSchedule::load(tables).unwrap();

        let result = calculate(&schedule, &helsinki_input(dec!(3000))).unwrap();

        assert_eq!(result.breakdown.total_deductions.yearly, dec!(0));
        assert_eq!(result.net_yearly, result.yearly_gross_income);
        assert_eq!(result.effective_rate, dec!(0));
    }

    #[test]
    fn calculate_credit_floor_at_high_income() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(40000));

        let result = calculate(&schedule, &input).unwrap();

        assert_eq!(result.breakdown.work_income_credit.yearly, dec!(0));
        assert_eq!(
            result.breakdown.total_deductions.yearly,
            result.breakdown.gross_deductions.yearly
        );
    }

    #[test]
    fn calculate_adds_dependent_bonus_to_credit() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(3000)).with_dependents(2, false);

        let result = calculate(&schedule, &input).unwrap();

        assert_eq!(result.breakdown.work_income_credit.yearly, dec!(3030.85));
    }

    #[test]
    fn calculate_is_idempotent() {
        let schedule = test_schedule();
        let input = helsinki_input(dec!(4321.09))
            .with_yearly_extra(dec!(777.77))
            .with_membership(dec!(1.5));

        let first = calculate(&schedule, &input).unwrap();
        let second = calculate(&schedule, &input).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.effective_rate.serialize(), second.effective_rate.serialize());
    }

    #[test]
    fn calculate_shares_schedule_across_threads() {
        let schedule = test_schedule();
        let expected = calculate(&schedule, &helsinki_input(dec!(3000))).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| calculate(&schedule, &helsinki_input(dec!(3000)))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Ok(expected.clone()));
            }
        });
    }

    // =========================================================================
    // zero boundary tests
    // =========================================================================

    #[test]
    fn breakdown_for_zero_income_is_degenerate_but_defined() {
        let schedule = test_schedule();
        let calculator = NetSalaryCalculator::new(&schedule);
        let input = helsinki_input(dec!(0)).with_membership(dec!(1.5));

        let result = calculator.breakdown_for_yearly_income(Decimal::ZERO, &input);
        let b = &result.breakdown;

        assert_eq!(b.state_tax.yearly, dec!(0));
        assert_eq!(b.municipal_tax.yearly, dec!(0));
        assert_eq!(b.church_tax.yearly, dec!(0));
        assert_eq!(b.pension.yearly, dec!(0));
        assert_eq!(b.unemployment.yearly, dec!(0));
        assert_eq!(b.health_insurance.yearly, dec!(0));
        assert_eq!(b.work_income_credit.yearly, dec!(3225));
        assert_eq!(b.total_deductions.yearly, dec!(0));
        assert_eq!(result.net_yearly, dec!(0));
        assert_eq!(result.effective_rate, dec!(0));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_net_never_exceeds_gross_and_deductions_are_non_negative(
            monthly_cents in 1u64..5_000_000,
            extra_cents in 0u64..10_000_000,
            municipal_bp in 0u32..1200,
            member in proptest::bool::ANY,
        ) {
            let schedule = test_schedule();
            let mut input = CalculationInput::new(
                Decimal::new(monthly_cents as i64, 2),
                Decimal::new(municipal_bp as i64, 2),
            )
            .with_yearly_extra(Decimal::new(extra_cents as i64, 2));
            if member {
                input = input.with_membership(dec!(1.5));
            }

            let result = calculate(&schedule, &input).unwrap();

            prop_assert!(result.breakdown.total_deductions.yearly >= Decimal::ZERO);
            prop_assert!(result.net_yearly <= result.yearly_gross_income);
            prop_assert!(result.breakdown.total_deductions.yearly <= result.breakdown.gross_deductions.yearly);
            prop_assert_eq!(
                result.net_yearly + result.breakdown.total_deductions.yearly,
                result.yearly_gross_income
            );
        }
    }
}
