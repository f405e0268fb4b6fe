//! Year-scoped rate schedule.
//!
//! A [`RateSchedule`] can only be obtained by validating a set of raw
//! [`ScheduleTables`] through [`RateSchedule::load`]. Once loaded it is
//! immutable and is never re-validated by the calculation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ContributionRates, CreditParameters, TaxBracket};

/// Errors raised while validating raw schedule tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The bracket table is empty.
    #[error("no tax brackets provided")]
    NoBrackets,

    /// The first bracket must start at zero income.
    #[error("first bracket threshold must be 0, got {0}")]
    FirstThresholdNotZero(Decimal),

    /// The health daily allowance income threshold is below zero.
    #[error("daily allowance threshold must be non-negative, got {0}")]
    NegativeAllowanceThreshold(Decimal),

    /// Thresholds must be strictly increasing.
    #[error("bracket {index} threshold {threshold} does not exceed previous threshold {previous}")]
    NonIncreasingThreshold {
        index: usize,
        threshold: Decimal,
        previous: Decimal,
    },

    /// A bracket carries a negative base tax.
    #[error("bracket {index} has negative base tax {base_tax}")]
    NegativeBaseTax { index: usize, base_tax: Decimal },

    /// A declared rate is negative.
    #[error("rate '{name}' must be non-negative, got {value}")]
    NegativeRate { name: String, value: Decimal },

    /// The credit reduction thresholds are not ordered `t1 < t2`.
    #[error("credit reduction thresholds must satisfy t1 < t2, got t1={t1} t2={t2}")]
    InvalidCreditThresholds { t1: Decimal, t2: Decimal },

    /// A credit amount or threshold is negative.
    #[error("credit value '{name}' must be non-negative, got {value}")]
    NegativeCreditAmount { name: &'static str, value: Decimal },

    /// The annualization multiplier must be positive.
    #[error("annualization multiplier must be positive, got {0}")]
    InvalidAnnualizationMultiplier(Decimal),

    /// The yearly income ceiling must be positive.
    #[error("yearly income ceiling must be positive, got {0}")]
    InvalidIncomeCeiling(Decimal),
}

/// Raw, unvalidated schedule tables as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTables {
    pub tax_year: i32,
    /// Factor turning a monthly base salary into a yearly figure, including
    /// the supplementary holiday bonus (e.g. 12.5).
    pub annualization_multiplier: Decimal,
    /// Largest yearly income the engine accepts.
    pub yearly_income_ceiling: Decimal,
    pub brackets: Vec<TaxBracket>,
    pub contributions: ContributionRates,
    pub credit: CreditParameters,
}

/// A bracket whose `base_tax` disagrees with the cumulative tax of the
/// brackets below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTaxInconsistency {
    pub index: usize,
    pub threshold: Decimal,
    pub declared: Decimal,
    pub expected: Decimal,
}

impl BaseTaxInconsistency {
    pub fn difference(&self) -> Decimal {
        (self.declared - self.expected).abs()
    }
}

/// Validated, immutable rate schedule for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSchedule {
    tax_year: i32,
    annualization_multiplier: Decimal,
    yearly_income_ceiling: Decimal,
    brackets: Vec<TaxBracket>,
    contributions: ContributionRates,
    credit: CreditParameters,
}

impl RateSchedule {
    /// Validates raw tables and builds a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if:
    /// - the bracket table is empty, does not start at 0, or is not strictly
    ///   increasing in threshold
    /// - any bracket, contribution, or credit reduction rate is negative
    /// - the credit thresholds are not ordered `t1 < t2`
    /// - the annualization multiplier or income ceiling is not positive
    pub fn load(tables: ScheduleTables) -> Result<Self, ConfigurationError> {
        if tables.annualization_multiplier <= Decimal::ZERO {
            return Err(ConfigurationError::InvalidAnnualizationMultiplier(
                tables.annualization_multiplier,
            ));
        }
        if tables.yearly_income_ceiling <= Decimal::ZERO {
            return Err(ConfigurationError::InvalidIncomeCeiling(
                tables.yearly_income_ceiling,
            ));
        }

        validate_brackets(&tables.brackets)?;
        validate_contributions(&tables.contributions)?;
        validate_credit(&tables.credit)?;

        Ok(Self {
            tax_year: tables.tax_year,
            annualization_multiplier: tables.annualization_multiplier,
            yearly_income_ceiling: tables.yearly_income_ceiling,
            brackets: tables.brackets,
            contributions: tables.contributions,
            credit: tables.credit,
        })
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    pub fn annualization_multiplier(&self) -> Decimal {
        self.annualization_multiplier
    }

    pub fn yearly_income_ceiling(&self) -> Decimal {
        self.yearly_income_ceiling
    }

    /// Brackets ordered by strictly increasing threshold, first at 0.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn contributions(&self) -> &ContributionRates {
        &self.contributions
    }

    pub fn credit(&self) -> &CreditParameters {
        &self.credit
    }

    /// Lists brackets whose declared `base_tax` differs from the cumulative
    /// tax of the lower brackets by more than `tolerance`.
    ///
    /// Published schedules round base taxes to whole units, so a tolerance of
    /// one unit is usually appropriate.
    pub fn base_tax_inconsistencies(
        &self,
        tolerance: Decimal,
    ) -> Vec<BaseTaxInconsistency> {
        self.brackets
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let (lower, upper) = (&pair[0], &pair[1]);
                // Pairs whose cumulative tax exceeds decimal range are skipped.
                let expected = (upper.threshold - lower.threshold)
                    .checked_mul(lower.rate)
                    .and_then(|product| lower.base_tax.checked_add(product / Decimal::ONE_HUNDRED))?;
                let inconsistency = BaseTaxInconsistency {
                    index: i + 1,
                    threshold: upper.threshold,
                    declared: upper.base_tax,
                    expected,
                };
                (inconsistency.difference() > tolerance).then_some(inconsistency)
            })
            .collect()
    }
}

impl TryFrom<ScheduleTables> for RateSchedule {
    type Error = ConfigurationError;

    fn try_from(tables: ScheduleTables) -> Result<Self, Self::Error> {
        Self::load(tables)
    }
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ConfigurationError> {
    let first = brackets.first().ok_or(ConfigurationError::NoBrackets)?;
    if first.threshold != Decimal::ZERO {
        return Err(ConfigurationError::FirstThresholdNotZero(first.threshold));
    }

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.base_tax < Decimal::ZERO {
            return Err(ConfigurationError::NegativeBaseTax {
                index,
                base_tax: bracket.base_tax,
            });
        }
        if bracket.rate < Decimal::ZERO {
            return Err(ConfigurationError::NegativeRate {
                name: format!("brackets[{index}].rate"),
                value: bracket.rate,
            });
        }
        if index > 0 {
            let previous = brackets[index - 1].threshold;
            if bracket.threshold <= previous {
                return Err(ConfigurationError::NonIncreasingThreshold {
                    index,
                    threshold: bracket.threshold,
                    previous,
                });
            }
        }
    }

    Ok(())
}

fn validate_contributions(rates: &ContributionRates) -> Result<(), ConfigurationError> {
    for (name, value) in rates.named_rates() {
        if value < Decimal::ZERO {
            return Err(ConfigurationError::NegativeRate {
                name: format!("contributions.{name}"),
                value,
            });
        }
    }
    if rates.health_daily_allowance_threshold < Decimal::ZERO {
        return Err(ConfigurationError::NegativeAllowanceThreshold(
            rates.health_daily_allowance_threshold,
        ));
    }
    Ok(())
}

fn validate_credit(credit: &CreditParameters) -> Result<(), ConfigurationError> {
    for (name, value) in [
        ("reduction_rate_1", credit.reduction_rate_1),
        ("reduction_rate_2", credit.reduction_rate_2),
    ] {
        if value < Decimal::ZERO {
            return Err(ConfigurationError::NegativeRate {
                name: format!("credit.{name}"),
                value,
            });
        }
    }

    for (name, value) in [
        ("max_credit", credit.max_credit),
        ("reduction_threshold_1", credit.reduction_threshold_1),
        ("child_bonus", credit.child_bonus),
        ("single_parent_child_bonus", credit.single_parent_child_bonus),
    ] {
        if value < Decimal::ZERO {
            return Err(ConfigurationError::NegativeCreditAmount { name, value });
        }
    }

    if credit.reduction_threshold_1 >= credit.reduction_threshold_2 {
        return Err(ConfigurationError::InvalidCreditThresholds {
            t1: credit.reduction_threshold_1,
            t2: credit.reduction_threshold_2,
        });
    }

    Ok(())
}
