//! CSV record import
//!
//! Reads a batch of records from headered CSV with the columns
//! `amount,comment,date`. The date column uses `DD.MM.YYYY` and may be left
//! empty to mean "today" according to the supplied clock.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::clock::Clock;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Record};

/// One CSV row before date parsing
#[derive(Debug, Deserialize)]
struct RecordRow {
    amount: String,
    comment: String,
    #[serde(default)]
    date: Option<String>,
}

/// Read all records from CSV text
///
/// The first bad row fails the whole batch, so callers either get every
/// record or none.
pub fn read_records<R: Read>(reader: R, clock: &impl Clock) -> TrackerResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RecordRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = row.map_err(|e| TrackerError::Import(format!("line {}: {}", line, e)))?;

        let amount = Amount::parse(&row.amount)
            .map_err(|e| TrackerError::Import(format!("line {}: {}", line, e)))?;
        let date = row.date.as_deref().filter(|d| !d.is_empty());
        let record = Record::parse_with_clock(amount, row.comment, date, clock)?;
        records.push(record);
    }

    debug!(count = records.len(), "Read records from CSV");
    Ok(records)
}

/// Read all records from a CSV file
pub fn read_records_from_path(path: &Path, clock: &impl Clock) -> TrackerResult<Vec<Record>> {
    let file = File::open(path).map_err(|e| {
        TrackerError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_records(file, clock)
}
