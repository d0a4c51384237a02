//! Custom error types for daily-limit
//!
//! This module defines the error hierarchy for the calculators using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for daily-limit operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A record date did not match `DD.MM.YYYY` or is not a calendar date
    #[error("Invalid date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    /// Currency code outside of the recognized set
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Malformed input values (amounts, record specs)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TrackerError {
    /// Create a date parse error for the given input
    pub fn date_parse(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::DateParse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a date parse error
    pub fn is_date_parse(&self) -> bool {
        matches!(self, Self::DateParse { .. })
    }

    /// Check if this is an unknown currency error
    pub fn is_unknown_currency(&self) -> bool {
        matches!(self, Self::UnknownCurrency(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daily-limit operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_date_parse_error() {
        let err = TrackerError::date_parse("31.02.2024", "input is out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date '31.02.2024': input is out of range"
        );
        assert!(err.is_date_parse());
        assert!(!err.is_unknown_currency());
    }

    #[test]
    fn test_unknown_currency_error() {
        let err = TrackerError::UnknownCurrency("gbp".into());
        assert_eq!(err.to_string(), "Unknown currency: gbp");
        assert!(err.is_unknown_currency());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
