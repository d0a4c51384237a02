//! Record display formatting
//!
//! Fixed-width text layouts for single records and whole calculators. The
//! accounting code never formats records itself; it goes through a
//! [`RecordFormatter`] so the layout can be swapped.

use crate::models::Record;

/// Title printed above the record dump
pub const DUMP_TITLE: &str = "Содержимое калькулятора:";

/// Width of the separator lines around the record dump
pub const SEPARATOR_WIDTH: usize = 50;

/// Turns records into text
pub trait RecordFormatter {
    /// One record on a single line
    fn format_line(&self, record: &Record) -> String;

    /// All records, including any header and footer
    fn format_table(&self, records: &[Record]) -> String;
}

/// The fixed-width column layout used for debug output
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidthFormatter;

impl RecordFormatter for FixedWidthFormatter {
    fn format_line(&self, record: &Record) -> String {
        format_record_line(record)
    }

    fn format_table(&self, records: &[Record]) -> String {
        format_record_table(records)
    }
}

/// Format a single record: date right-aligned in 10 columns, comment
/// left-aligned in 40, then the amount
pub fn format_record_line(record: &Record) -> String {
    format!(
        "{:>10} | {:<40}|{}",
        record.date().to_string(),
        record.comment(),
        record.amount()
    )
}

/// Format one row of the record dump
pub fn format_record_row(record: &Record) -> String {
    format!(
        "{:<10} {:<30}{:<8}",
        record.date().to_string(),
        record.comment(),
        record.amount()
    )
}

/// Format the full record dump, bracketed by separator lines
pub fn format_record_table(records: &[Record]) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut output = String::new();

    output.push_str(DUMP_TITLE);
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');

    for record in records {
        output.push_str(&format_record_row(record));
        output.push('\n');
    }

    output.push_str(&separator);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(amount: i32, comment: &str, d: u32) -> Record {
        Record::new(amount, comment, NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
    }

    #[test]
    fn test_format_record_line() {
        let line = format_record_line(&record(145, "chips", 8));
        assert_eq!(line, format!("2024-03-08 | chips{}|145", " ".repeat(35)));
    }

    #[test]
    fn test_format_record_row_widths() {
        let row = format_record_row(&record(85, "coffee", 15));
        assert_eq!(row.len(), 10 + 1 + 30 + 8);
        assert!(row.starts_with("2024-03-15 coffee "));
        assert!(row.ends_with("85      "));
    }

    #[test]
    fn test_long_comment_is_not_truncated() {
        let comment = "x".repeat(45);
        let row = format_record_row(&record(1, &comment, 1));
        assert!(row.contains(&comment));
    }

    #[test]
    fn test_format_record_table() {
        let records = vec![record(300, "lunch", 14), record(700, "dinner", 15)];
        let table = format_record_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], DUMP_TITLE);
        assert_eq!(lines[1], "=".repeat(50));
        assert!(lines[2].starts_with("2024-03-14 lunch"));
        assert!(lines[3].starts_with("2024-03-15 dinner"));
        assert_eq!(lines[4], "=".repeat(50));
    }

    #[test]
    fn test_empty_table_has_only_frame() {
        let table = FixedWidthFormatter.format_table(&[]);
        assert_eq!(table.lines().count(), 3);
    }
}
