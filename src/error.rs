//! Custom error types for the KPI calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for KPI calculator operations
#[derive(Error, Debug)]
pub enum KpiError {
    /// Amount is missing, not a number, not positive, or too large
    #[error("Please enter a valid amount greater than 0 and below 1 000 000 000")]
    InvalidAmount,

    /// Source and target year are the same
    #[error("Please choose two different years to compare")]
    SameYear,

    /// One of the requested years has no index value
    #[error("Missing index data for year {year}")]
    MissingIndexData { year: i32 },

    /// The index table violates one of its invariants
    #[error("Invalid index table: {0}")]
    InvalidIndexTable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl KpiError {
    /// Create a "missing index data" error for a year
    pub fn missing_year(year: i32) -> Self {
        Self::MissingIndexData { year }
    }

    /// Check if this error was caused by user input
    ///
    /// Input errors are non-fatal: the caller shows the message and asks again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount | Self::SameYear | Self::MissingIndexData { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KpiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KpiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for KpiError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for KpiError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for KPI calculator operations
pub type KpiResult<T> = Result<T, KpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KpiError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_year_error() {
        let err = KpiError::missing_year(1999);
        assert_eq!(err.to_string(), "Missing index data for year 1999");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_input_error_classification() {
        assert!(KpiError::InvalidAmount.is_input_error());
        assert!(KpiError::SameYear.is_input_error());
        assert!(!KpiError::Storage("disk".into()).is_input_error());
        assert!(!KpiError::InvalidIndexTable("empty".into()).is_input_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kpi_err: KpiError = io_err.into();
        assert!(matches!(kpi_err, KpiError::Io(_)));
    }
}
