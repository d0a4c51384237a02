//! Record model
//!
//! A record is one dated transaction: an amount, a free-text comment and the
//! calendar day it happened on. Records never change after construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use super::amount::Amount;
use crate::clock::{Clock, SystemClock};
use crate::display::record::format_record_line;
use crate::error::{TrackerError, TrackerResult};

/// Textual date format accepted for records (`15.03.2024`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date
///
/// Fails on a wrong separator, non-numeric fields, a year that is not four
/// digits, or a day that does not exist in the given month.
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let year_ok = input
        .rsplit('.')
        .next()
        .map(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false);
    if !year_ok {
        return Err(TrackerError::date_parse(input, "expected DD.MM.YYYY"));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| TrackerError::date_parse(input, e))
}

/// A single dated transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    date: NaiveDate,
    amount: Amount,
    comment: String,
}

impl Record {
    /// Create a record for an explicit date
    pub fn new(amount: impl Into<Amount>, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            date,
            amount: amount.into(),
            comment: comment.into(),
        }
    }

    /// Create a record dated with the clock's current day
    pub fn today(amount: impl Into<Amount>, comment: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(amount, comment, clock.today())
    }

    /// Create a record from an optional `DD.MM.YYYY` date, reading today's
    /// date from `clock` when no date is given
    pub fn parse_with_clock(
        amount: impl Into<Amount>,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &impl Clock,
    ) -> TrackerResult<Self> {
        let date = match date {
            Some(text) => parse_date(text)?,
            None => clock.today(),
        };
        Ok(Self::new(amount, comment, date))
    }

    /// Same as [`Record::parse_with_clock`] using the system clock
    ///
    /// # Examples
    /// ```
    /// use daily_limit::models::Record;
    /// let record = Record::parse(300, "lunch", Some("15.03.2024")).unwrap();
    /// assert_eq!(record.date().to_string(), "2024-03-15");
    /// ```
    pub fn parse(
        amount: impl Into<Amount>,
        comment: impl Into<String>,
        date: Option<&str>,
    ) -> TrackerResult<Self> {
        Self::parse_with_clock(amount, comment, date, &SystemClock)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Write the single-record line to `writer`
    pub fn write_line<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "{}", self)?;
        Ok(())
    }

    /// Print the single-record line to stdout
    pub fn show(&self) -> TrackerResult<()> {
        self.write_line(&mut io::stdout().lock())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record_line(self))
    }
}
