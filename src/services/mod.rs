//! Service layer for daily-limit
//!
//! The accounting core ([`Calculator`]) and the two budgets built on top of
//! it by delegation: money ([`CashCalculator`]) and calories
//! ([`CaloriesCalculator`]).

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod remaining;

pub use calculator::{Calculator, WEEK_DAYS};
pub use calories::CaloriesCalculator;
pub use cash::CashCalculator;
pub use remaining::{CaloriesMessage, CashMessage, RemainingFormatter};
