use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AgeBand;

/// Flat proportional tax rates that vary per individual rather than per year.
///
/// Both rates are in percent and are supplied by the caller on every
/// calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRates {
    /// Municipal income tax rate.
    pub sub_jurisdiction_rate: Decimal,
    /// Church tax rate, charged only for members.
    pub membership_rate: Decimal,
}

/// Personal inputs for a single net salary calculation.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::{AgeBand, CalculationInput};
///
/// let input = CalculationInput::new(dec!(3000), dec!(7.50))
///     .with_yearly_extra(dec!(2000))
///     .with_age_band(AgeBand::From53To62)
///     .with_membership(dec!(1.50));
///
/// assert!(input.membership);
/// assert_eq!(input.flat_rates.membership_rate, dec!(1.50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Gross monthly base salary.
    pub monthly_base_amount: Decimal,
    /// Lump-sum yearly income on top of the base salary (bonuses). The
    /// holiday bonus multiplier is never applied to it.
    pub yearly_extra: Decimal,
    pub age_band: AgeBand,
    pub flat_rates: FlatRates,
    /// Whether the membership-conditional (church) tax applies.
    pub membership: bool,
    /// Number of dependent children for the flat credit bonus.
    pub dependents: u32,
    pub single_parent: bool,
}

impl CalculationInput {
    /// Creates an input with no extra income, the default age band, and no
    /// membership tax. The municipal rate is always explicit.
    pub fn new(
        monthly_base_amount: Decimal,
        sub_jurisdiction_rate: Decimal,
    ) -> Self {
        Self {
            monthly_base_amount,
            yearly_extra: Decimal::ZERO,
            age_band: AgeBand::default(),
            flat_rates: FlatRates {
                sub_jurisdiction_rate,
                membership_rate: Decimal::ZERO,
            },
            membership: false,
            dependents: 0,
            single_parent: false,
        }
    }

    pub fn with_yearly_extra(
        mut self,
        yearly_extra: Decimal,
    ) -> Self {
        self.yearly_extra = yearly_extra;
        self
    }

    pub fn with_age_band(
        mut self,
        age_band: AgeBand,
    ) -> Self {
        self.age_band = age_band;
        self
    }

    /// Marks the taxpayer as a member and sets the membership tax rate.
    pub fn with_membership(
        mut self,
        membership_rate: Decimal,
    ) -> Self {
        self.membership = true;
        self.flat_rates.membership_rate = membership_rate;
        self
    }

    pub fn with_dependents(
        mut self,
        dependents: u32,
        single_parent: bool,
    ) -> Self {
        self.dependents = dependents;
        self.single_parent = single_parent;
        self
    }
}
