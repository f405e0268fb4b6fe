use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of the means-tested work income credit.
///
/// The credit starts at `max_credit` and is reduced at `reduction_rate_1`
/// percent of income between the two thresholds, then at `reduction_rate_2`
/// percent above the second threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditParameters {
    pub max_credit: Decimal,
    pub reduction_threshold_1: Decimal,
    pub reduction_threshold_2: Decimal,
    pub reduction_rate_1: Decimal,
    pub reduction_rate_2: Decimal,
    /// Flat extra credit per dependent child.
    #[serde(default)]
    pub child_bonus: Decimal,
    /// Flat extra credit per dependent child for single parents. Replaces
    /// `child_bonus` when the taxpayer is a single parent.
    #[serde(default)]
    pub single_parent_child_bonus: Decimal,
}
