mod age_band;
mod calculation_input;
mod calculation_result;
mod contribution_rates;
mod credit_parameters;
mod rate_schedule;
mod tax_bracket;
#[cfg(test)]
pub(crate) mod test_support;

pub use age_band::AgeBand;
pub use calculation_input::{CalculationInput, FlatRates};
pub use calculation_result::{Amount, CalculationResult, DeductionBreakdown};
pub use contribution_rates::ContributionRates;
pub use credit_parameters::CreditParameters;
pub use rate_schedule::{BaseTaxInconsistency, ConfigurationError, RateSchedule, ScheduleTables};
pub use tax_bracket::TaxBracket;
