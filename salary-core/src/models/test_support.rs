//! Shared 2025 fixtures for unit tests across the crate.

use rust_decimal_macros::dec;

use crate::{ContributionRates, CreditParameters, RateSchedule, ScheduleTables, TaxBracket};

pub(crate) fn test_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(dec!(0), dec!(0), dec!(12.64)),
        TaxBracket::new(dec!(21200), dec!(2680), dec!(19.00)),
        TaxBracket::new(dec!(31500), dec!(4637), dec!(30.25)),
        TaxBracket::new(dec!(52100), dec!(10868), dec!(34.00)),
        TaxBracket::new(dec!(88200), dec!(23142), dec!(41.75)),
        TaxBracket::new(dec!(150000), dec!(48944), dec!(44.25)),
    ]
}

pub(crate) fn test_contributions() -> ContributionRates {
    ContributionRates {
        pension_under_53: dec!(7.15),
        pension_53_to_62: dec!(8.65),
        pension_over_62: dec!(7.15),
        unemployment: dec!(0.59),
        health_medical: dec!(0.51),
        health_daily_allowance: dec!(1.01),
        health_daily_allowance_threshold: dec!(16862),
    }
}

pub(crate) fn test_credit() -> CreditParameters {
    CreditParameters {
        max_credit: dec!(3225),
        reduction_threshold_1: dec!(24250),
        reduction_threshold_2: dec!(42550),
        reduction_rate_1: dec!(2.22),
        reduction_rate_2: dec!(3.44),
        child_bonus: dec!(50),
        single_parent_child_bonus: dec!(100),
    }
}

pub(crate) fn test_tables() -> ScheduleTables {
    ScheduleTables {
        tax_year: 2025,
        annualization_multiplier: dec!(12.5),
        yearly_income_ceiling: dec!(12500000000),
        brackets: test_brackets(),
        contributions: test_contributions(),
        credit: test_credit(),
    }
}

pub(crate) fn test_schedule() -> RateSchedule {
    RateSchedule::load(test_tables()).expect("test tables are valid")
}
