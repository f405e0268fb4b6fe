//! Gross-to-net salary calculation under a progressive bracketed income tax
//! with proportional employee contributions and a phased work income credit.
//!
//! Load a [`RateSchedule`] once with [`load_schedule`], then call
//! [`calculate`] for each [`CalculationInput`].

pub mod calculations;
pub mod models;

pub use calculations::{InputError, calculate};
pub use models::*;

/// Validates raw schedule tables.
///
/// Shorthand for [`RateSchedule::load`].
pub fn load_schedule(tables: ScheduleTables) -> Result<RateSchedule, ConfigurationError> {
    RateSchedule::load(tables)
}
