//! Core data models for daily-limit
//!
//! This module contains the value types the calculators work with: amounts,
//! currencies and dated records.

pub mod amount;
pub mod currency;
pub mod record;

pub use amount::Amount;
pub use currency::{Currency, CurrencyRates, EURO_RATE, USD_RATE};
pub use record::{parse_date, Record, DATE_FORMAT};
