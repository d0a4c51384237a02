//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculators.

pub mod calories;
pub mod cash;
pub mod records;

pub use calories::{handle_calories_command, CaloriesArgs};
pub use cash::{handle_cash_command, CashArgs};
pub use records::{parse_record_spec, CliClock, RecordArgs};
