//! Calculator service
//!
//! Holds a daily limit and an append-only list of records, and answers
//! today/week questions by scanning the records on every call.

use std::io::Write;

use chrono::{Duration, NaiveDate};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::display::{FixedWidthFormatter, RecordFormatter};
use crate::error::TrackerResult;
use crate::models::{Amount, Record};

/// Length of the trailing window used by [`Calculator::get_week_stats`]
pub const WEEK_DAYS: i64 = 7;

/// Shared accounting over a daily limit
#[derive(Debug, Clone)]
pub struct Calculator<C: Clock = SystemClock> {
    limit: Amount,
    records: Vec<Record>,
    clock: C,
}

impl Calculator<SystemClock> {
    /// Create a calculator that reads the system clock
    pub fn new(limit: impl Into<Amount>) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> Calculator<C> {
    /// Create a calculator with an explicit time source
    pub fn with_clock(limit: impl Into<Amount>, clock: C) -> Self {
        Self {
            limit: limit.into(),
            records: Vec::new(),
            clock,
        }
    }

    /// The daily limit fixed at construction
    pub fn limit(&self) -> Amount {
        self.limit
    }

    /// All records in the order they were added
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record
    pub fn add_record(&mut self, record: Record) {
        debug!(
            date = %record.date(),
            amount = %record.amount(),
            comment = record.comment(),
            "Adding record"
        );
        self.records.push(record);
    }

    /// Today's date shifted back by `delta_days`
    ///
    /// Negative deltas are allowed and produce future dates.
    pub fn get_date(&self, delta_days: i64) -> NaiveDate {
        self.clock.today() - Duration::days(delta_days)
    }

    /// Total amount of records dated today
    pub fn get_today_stats(&self) -> Amount {
        let today = self.get_date(0);
        let total = self.sum_between(today, today);
        trace!(%today, %total, "Today stats");
        total
    }

    /// Limit minus today's total; negative when overspent
    pub fn get_today_left(&self) -> Amount {
        self.limit - self.get_today_stats()
    }

    /// Total amount of records dated within `[today - 7 days, today]`
    pub fn get_week_stats(&self) -> Amount {
        let today = self.get_date(0);
        let week_ago = self.get_date(WEEK_DAYS);
        let total = self.sum_between(week_ago, today);
        trace!(%week_ago, %today, %total, "Week stats");
        total
    }

    /// Print every record to stdout in the fixed-width layout
    pub fn show_all_records(&self) -> TrackerResult<()> {
        self.write_all_records(&mut std::io::stdout().lock(), &FixedWidthFormatter)
    }

    /// Write every record to `writer` using the given layout
    pub fn write_all_records<W: Write>(
        &self,
        writer: &mut W,
        formatter: &impl RecordFormatter,
    ) -> TrackerResult<()> {
        writer.write_all(formatter.format_table(&self.records).as_bytes())?;
        Ok(())
    }

    fn sum_between(&self, start: NaiveDate, end: NaiveDate) -> Amount {
        self.records
            .iter()
            .filter(|r| start <= r.date() && r.date() <= end)
            .map(Record::amount)
            .sum()
    }
}
