use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive state tax schedule.
///
/// Tax for an income falling in this bracket is
/// `base_tax + (income - threshold) * (rate / 100)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket. Income equal to the threshold still belongs
    /// to the bracket below.
    pub threshold: Decimal,
    /// Cumulative tax of all lower brackets at `threshold`.
    pub base_tax: Decimal,
    /// Marginal rate in percent.
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        threshold: Decimal,
        base_tax: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            threshold,
            base_tax,
            rate,
        }
    }
}
