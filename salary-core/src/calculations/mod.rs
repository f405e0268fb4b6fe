//! Calculation engine for net salary.
//!
//! Every calculation is a pure function of a validated [`crate::RateSchedule`]
//! and its explicit inputs. Nothing is cached between calls.

pub mod common;
pub mod contributions;
pub mod net_salary;
pub mod state_tax;
pub mod work_income_credit;

pub use contributions::{ContributionBreakdown, ContributionCalculator};
pub use net_salary::{InputError, NetSalaryCalculator, calculate};
pub use state_tax::{progressive_tax, resolve_bracket};
pub use work_income_credit::{CreditBreakdown, WorkIncomeCredit};
