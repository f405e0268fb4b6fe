use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AgeBand;

/// Employee contribution rates for one tax year, all in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    pub pension_under_53: Decimal,
    pub pension_53_to_62: Decimal,
    pub pension_over_62: Decimal,
    pub unemployment: Decimal,
    /// Health insurance medical care sub-rate. Always charged.
    pub health_medical: Decimal,
    /// Health insurance daily allowance sub-rate. Charged only when yearly
    /// income is at or above `health_daily_allowance_threshold`.
    pub health_daily_allowance: Decimal,
    pub health_daily_allowance_threshold: Decimal,
}

impl ContributionRates {
    /// Pension rate for the given age band.
    pub fn pension_rate(
        &self,
        age_band: AgeBand,
    ) -> Decimal {
        match age_band {
            AgeBand::Under53 => self.pension_under_53,
            AgeBand::From53To62 => self.pension_53_to_62,
            AgeBand::Over62 => self.pension_over_62,
        }
    }

    /// Every declared rate paired with its field name, for validation.
    pub(crate) fn named_rates(&self) -> [(&'static str, Decimal); 6] {
        [
            ("pension_under_53", self.pension_under_53),
            ("pension_53_to_62", self.pension_53_to_62),
            ("pension_over_62", self.pension_over_62),
            ("unemployment", self.unemployment),
            ("health_medical", self.health_medical),
            ("health_daily_allowance", self.health_daily_allowance),
        ]
    }
}
