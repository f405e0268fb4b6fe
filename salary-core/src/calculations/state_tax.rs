//! Progressive state income tax.
//!
//! Tax for an income is found by locating the bracket with the greatest
//! threshold strictly below the income and applying
//! `base_tax + (income - threshold) * (rate / 100)`.
//!
//! Income exactly equal to a threshold stays in the lower bracket. Because
//! each bracket's `base_tax` is the cumulative tax of the brackets below it,
//! both brackets give the same figure at the boundary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::TaxBracket;
//! use salary_core::calculations::progressive_tax;
//!
//! let brackets = vec![
//!     TaxBracket::new(dec!(0), dec!(0), dec!(12.64)),
//!     TaxBracket::new(dec!(21200), dec!(2680), dec!(19.00)),
//!     TaxBracket::new(dec!(31500), dec!(4637), dec!(30.25)),
//! ];
//!
//! assert_eq!(progressive_tax(dec!(37500), &brackets), dec!(6452));
//! ```

use rust_decimal::Decimal;

use crate::TaxBracket;
use crate::calculations::common::percent_of;

/// Finds the bracket that applies to `income`.
///
/// Scans forward and keeps every bracket whose threshold the income strictly
/// exceeds. Returns `None` for non-positive income or an empty table.
pub fn resolve_bracket(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Option<&TaxBracket> {
    if income <= Decimal::ZERO {
        return None;
    }

    let mut applicable = brackets.first()?;
    for bracket in brackets {
        if income > bracket.threshold {
            applicable = bracket;
        } else {
            break;
        }
    }
    Some(applicable)
}

/// Calculates progressive tax for a yearly income.
///
/// Zero income yields zero without consulting the brackets. The caller is
/// responsible for rejecting negative income; it is treated as zero here.
pub fn progressive_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    match resolve_bracket(income, brackets) {
        Some(bracket) => bracket.base_tax + percent_of(income - bracket.threshold, bracket.rate),
        None => Decimal::ZERO,
    }
}
