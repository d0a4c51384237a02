//! Record arguments shared by the calculator commands
//!
//! Records come from repeated `--record AMOUNT:COMMENT[:DD.MM.YYYY]` flags
//! and/or a CSV file. `--today` pins the calculator's clock.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{TrackerError, TrackerResult};
use crate::import::read_records_from_path;
use crate::models::{parse_date, Amount, Record};

/// Arguments describing the records to load
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Record as AMOUNT:COMMENT[:DD.MM.YYYY] (repeatable)
    #[arg(short, long = "record", value_name = "SPEC", allow_hyphen_values = true)]
    pub records: Vec<String>,

    /// CSV file with amount,comment,date columns
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Treat this date (DD.MM.YYYY) as today
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Print every record before the summary
    #[arg(short, long)]
    pub show: bool,
}

/// Clock selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn today(&self) -> NaiveDate {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

impl RecordArgs {
    /// The clock to use: `--today` if given, otherwise the system clock
    pub fn clock(&self) -> TrackerResult<CliClock> {
        match &self.today {
            Some(text) => Ok(CliClock::Fixed(FixedClock::new(parse_date(text)?))),
            None => Ok(CliClock::System(SystemClock)),
        }
    }

    /// Load the CSV batch first, then the `--record` flags in order
    pub fn load(&self, clock: &impl Clock) -> TrackerResult<Vec<Record>> {
        let mut records = match &self.csv {
            Some(path) => read_records_from_path(path, clock)?,
            None => Vec::new(),
        };

        for spec in &self.records {
            records.push(parse_record_spec(spec, clock)?);
        }

        Ok(records)
    }
}

/// Parse `AMOUNT:COMMENT[:DD.MM.YYYY]`
///
/// The trailing segment is taken as a date only when it consists of digits
/// and dots, so comments may themselves contain colons.
pub fn parse_record_spec(spec: &str, clock: &impl Clock) -> TrackerResult<Record> {
    let (amount, rest) = spec.split_once(':').ok_or_else(|| {
        TrackerError::Validation(format!(
            "Invalid record '{}': expected AMOUNT:COMMENT[:DD.MM.YYYY]",
            spec
        ))
    })?;
    let amount = Amount::parse(amount)?;

    let (comment, date) = match rest.rsplit_once(':') {
        Some((comment, date))
            if !date.is_empty() && date.chars().all(|c| c.is_ascii_digit() || c == '.') =>
        {
            (comment, Some(date))
        }
        _ => (rest, None),
    };

    Record::parse_with_clock(amount, comment, date, clock)
}
