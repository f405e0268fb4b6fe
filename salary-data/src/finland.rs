//! Finnish rate tables for the 2025 tax year.
//!
//! Sources:
//! - State tax: vero.fi progressive state income tax scale 2025
//! - Pension (TyEL): etk.fi employee pension contributions
//! - Unemployment: employmentfund.fi unemployment insurance contribution
//! - Health insurance: vero.fi tax card for 2025

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::{
    ConfigurationError, ContributionRates, CreditParameters, RateSchedule, ScheduleTables,
    TaxBracket,
};

/// Average municipal tax rate, used when no municipality is selected.
pub const DEFAULT_MUNICIPAL_TAX_RATE: Decimal = dec!(7.50);

/// Average church tax rate applied to church members.
pub const CHURCH_TAX_RATE: Decimal = dec!(1.50);

/// A municipality and its income tax rate in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Municipality {
    pub name: &'static str,
    pub rate: Decimal,
}

/// Major municipalities with their 2025 tax rates, sorted by name.
pub const MUNICIPALITIES_2025: &[Municipality] = &[
    Municipality { name: "Espoo", rate: dec!(5.36) },
    Municipality { name: "Helsinki", rate: dec!(5.30) },
    Municipality { name: "Hämeenlinna", rate: dec!(8.10) },
    Municipality { name: "Joensuu", rate: dec!(8.49) },
    Municipality { name: "Jyväskylä", rate: dec!(8.00) },
    Municipality { name: "Kouvola", rate: dec!(8.75) },
    Municipality { name: "Kuopio", rate: dec!(7.75) },
    Municipality { name: "Lahti", rate: dec!(8.25) },
    Municipality { name: "Lappeenranta", rate: dec!(7.75) },
    Municipality { name: "Oulu", rate: dec!(7.50) },
    Municipality { name: "Pori", rate: dec!(8.50) },
    Municipality { name: "Rovaniemi", rate: dec!(7.50) },
    Municipality { name: "Seinäjoki", rate: dec!(7.75) },
    Municipality { name: "Tampere", rate: dec!(7.25) },
    Municipality { name: "Turku", rate: dec!(7.50) },
    Municipality { name: "Vaasa", rate: dec!(7.00) },
    Municipality { name: "Vantaa", rate: dec!(5.65) },
];

/// Looks up a municipality's tax rate, ignoring case.
pub fn municipality_rate(name: &str) -> Option<Decimal> {
    let name = name.trim();
    MUNICIPALITIES_2025
        .iter()
        .find(|m| m.name.to_lowercase() == name.to_lowercase())
        .map(|m| m.rate)
}

/// Raw 2025 tables. The last base tax is the published 48 944.
pub fn schedule_2025_tables() -> ScheduleTables {
    ScheduleTables {
        tax_year: 2025,
        // 12 months plus half a month of holiday bonus
        annualization_multiplier: dec!(12.5),
        yearly_income_ceiling: dec!(12500000000),
        brackets: vec![
            TaxBracket::new(dec!(0), dec!(0), dec!(12.64)),
            TaxBracket::new(dec!(21200), dec!(2680), dec!(19.00)),
            TaxBracket::new(dec!(31500), dec!(4637), dec!(30.25)),
            TaxBracket::new(dec!(52100), dec!(10868), dec!(34.00)),
            TaxBracket::new(dec!(88200), dec!(23142), dec!(41.75)),
            TaxBracket::new(dec!(150000), dec!(48944), dec!(44.25)),
        ],
        contributions: ContributionRates {
            pension_under_53: dec!(7.15),
            pension_53_to_62: dec!(8.65),
            pension_over_62: dec!(7.15),
            unemployment: dec!(0.59),
            health_medical: dec!(0.51),
            health_daily_allowance: dec!(1.01),
            health_daily_allowance_threshold: dec!(16862),
        },
        credit: CreditParameters {
            max_credit: dec!(3225),
            reduction_threshold_1: dec!(24250),
            reduction_threshold_2: dec!(42550),
            reduction_rate_1: dec!(2.22),
            reduction_rate_2: dec!(3.44),
            child_bonus: dec!(50),
            single_parent_child_bonus: dec!(100),
        },
    }
}

/// Validated 2025 schedule.
pub fn schedule_2025() -> Result<RateSchedule, ConfigurationError> {
    RateSchedule::load(schedule_2025_tables())
}
