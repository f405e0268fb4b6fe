//! Work income credit with a two-slope phase-out.
//!
//! | Yearly income       | Credit |
//! |---------------------|--------|
//! | `≤ t1`              | `max_credit` |
//! | `t1 < income ≤ t2`  | `max_credit − (income − t1) × r1%` |
//! | `> t2`              | `max_credit − (t2 − t1) × r1% − (income − t2) × r2%` |
//!
//! The first slope's full reduction is locked in at `t2`, so the function is
//! continuous there. The result is clamped to `[0, max_credit]`. Flat
//! per-dependent bonuses are added on top of the phased amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CreditParameters;
use crate::calculations::common::{max, percent_of};

/// The work income credit split into its phased and flat parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    /// Income-tested credit after the phase-out, never negative.
    pub phased: Decimal,
    /// Flat bonus for dependent children.
    pub dependent_bonus: Decimal,
    /// `phased + dependent_bonus`.
    pub total: Decimal,
}

/// Calculator for the work income credit.
#[derive(Debug, Clone)]
pub struct WorkIncomeCredit<'a> {
    params: &'a CreditParameters,
}

impl<'a> WorkIncomeCredit<'a> {
    pub fn new(params: &'a CreditParameters) -> Self {
        Self { params }
    }

    /// Calculates the full credit for a yearly income.
    pub fn calculate(
        &self,
        yearly_income: Decimal,
        dependents: u32,
        single_parent: bool,
    ) -> CreditBreakdown {
        let phased = self.phased_credit(yearly_income);
        let dependent_bonus = self.dependent_bonus(dependents, single_parent);

        CreditBreakdown {
            phased,
            dependent_bonus,
            total: phased + dependent_bonus,
        }
    }

    /// Income-tested credit after the two-slope reduction.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::CreditParameters;
    /// use salary_core::calculations::WorkIncomeCredit;
    ///
    /// let params = CreditParameters {
    ///     max_credit: dec!(3225),
    ///     reduction_threshold_1: dec!(24250),
    ///     reduction_threshold_2: dec!(42550),
    ///     reduction_rate_1: dec!(2.22),
    ///     reduction_rate_2: dec!(3.44),
    ///     child_bonus: dec!(50),
    ///     single_parent_child_bonus: dec!(100),
    /// };
    ///
    /// let credit = WorkIncomeCredit::new(&params);
    ///
    /// // (37500 − 24250) × 2.22% = 294.15
    /// assert_eq!(credit.phased_credit(dec!(37500)), dec!(2930.85));
    /// ```
    pub fn phased_credit(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        let credit = self.params.max_credit - self.reduction(yearly_income);
        max(credit, Decimal::ZERO).min(self.params.max_credit)
    }

    /// Total reduction of the credit at `yearly_income`.
    fn reduction(
        &self,
        yearly_income: Decimal,
    ) -> Decimal {
        let t1 = self.params.reduction_threshold_1;
        let t2 = self.params.reduction_threshold_2;

        if yearly_income > t2 {
            percent_of(t2 - t1, self.params.reduction_rate_1)
                + percent_of(yearly_income - t2, self.params.reduction_rate_2)
        } else if yearly_income > t1 {
            percent_of(yearly_income - t1, self.params.reduction_rate_1)
        } else {
            Decimal::ZERO
        }
    }

    /// Flat bonus per dependent child. The single-parent bonus replaces the
    /// ordinary one.
    pub fn dependent_bonus(
        &self,
        dependents: u32,
        single_parent: bool,
    ) -> Decimal {
        let per_child = if single_parent {
            self.params.single_parent_child_bonus
        } else {
            self.params.child_bonus
        };
        per_child * Decimal::from(dependents)
    }
}
