//! Display formatting for terminal output
//!
//! Presentation-only layouts for records. Nothing in the accounting layer
//! depends on the exact text produced here.

pub mod record;

pub use record::{
    format_record_line, format_record_row, format_record_table, FixedWidthFormatter,
    RecordFormatter,
};
