//! daily-limit - Daily budget calculator for money and calories
//!
//! This library records dated transactions against a daily limit and reports
//! what is left for today and how much was spent over the trailing week.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `clock`: Time source abstraction for "today"
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, currencies and records
//! - `services`: The accounting core and the cash/calories calculators
//! - `display`: Fixed-width text layouts for records
//! - `import`: CSV record import
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use daily_limit::models::Record;
//! use daily_limit::services::CashCalculator;
//!
//! let mut cash = CashCalculator::new(1000);
//! cash.add_record(Record::parse(300, "lunch", None)?);
//! println!("{}", cash.get_today_cash_remained("usd")?);
//! # Ok::<(), daily_limit::TrackerError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod services;

pub use error::{TrackerError, TrackerResult};
