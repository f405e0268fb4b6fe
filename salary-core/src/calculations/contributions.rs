//! Mandatory employee contributions.
//!
//! Every contribution is proportional to yearly income. The pension rate is
//! selected by age band, and the health insurance daily allowance sub-rate is
//! only charged once yearly income reaches its published minimum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::percent_of;
use crate::{AgeBand, ContributionRates};

/// Yearly amounts of every employee contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    pub pension: Decimal,
    pub unemployment: Decimal,
    pub health_medical: Decimal,
    /// Zero when yearly income is below the daily allowance threshold.
    pub health_daily_allowance: Decimal,
    /// `health_medical + health_daily_allowance`.
    pub health_total: Decimal,
}

impl ContributionBreakdown {
    /// Sum of all contribution categories.
    pub fn total(&self) -> Decimal {
        self.pension + self.unemployment + self.health_total
    }
}

/// Calculator for employee contributions against one year's rates.
#[derive(Debug, Clone)]
pub struct ContributionCalculator<'a> {
    rates: &'a ContributionRates,
}

impl<'a> ContributionCalculator<'a> {
    pub fn new(rates: &'a ContributionRates) -> Self {
        Self { rates }
    }

    /// Calculates every contribution for a yearly income.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::calculations::ContributionCalculator;
    /// use salary_core::{AgeBand, ContributionRates};
    ///
    /// let rates = ContributionRates {
    ///     pension_under_53: dec!(7.15),
    ///     pension_53_to_62: dec!(8.65),
    ///     pension_over_62: dec!(7.15),
    ///     unemployment: dec!(0.59),
    ///     health_medical: dec!(0.51),
    ///     health_daily_allowance: dec!(1.01),
    ///     health_daily_allowance_threshold: dec!(16862),
    /// };
    ///
    /// let result = ContributionCalculator::new(&rates).calculate(dec!(10000), AgeBand::Under53);
    ///
    /// assert_eq!(result.pension, dec!(715));
    /// assert_eq!(result.health_daily_allowance, dec!(0));
    /// assert_eq!(result.health_medical, dec!(51));
    /// ```
    pub fn calculate(
        &self,
        yearly_income: Decimal,
        age_band: AgeBand,
    ) -> ContributionBreakdown {
        let pension = self.pension(yearly_income, age_band);
        let unemployment = self.unemployment(yearly_income);
        let health_medical = self.health_medical(yearly_income);
        let health_daily_allowance = self.health_daily_allowance(yearly_income);

        ContributionBreakdown {
            pension,
            unemployment,
            health_medical,
            health_daily_allowance,
            health_total: health_medical + health_daily_allowance,
        }
    }

    fn pension(
        &self,
        yearly_income: Decimal,
        age_band: AgeBand,
    ) -> Decimal {
        percent_of(yearly_income, self.rates.pension_rate(age_band))
    }

    fn unemployment(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        percent_of(yearly_income, self.rates.unemployment)
    }

    fn health_medical(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        percent_of(yearly_income, self.rates.health_medical)
    }

    /// Daily allowance applies in full at or above the threshold and not at
    /// all below it.
    fn health_daily_allowance(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        if yearly_income >= self.rates.health_daily_allowance_threshold {
            percent_of(yearly_income, self.rates.health_daily_allowance)
        } else {
            Decimal::ZERO
        }
    }
}
