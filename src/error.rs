//! Error types for the year_trade crate

use thiserror::Error;

/// Custom error types for the year_trade crate
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Error related to data validation or shape
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from malformed boundary input (bad tokens, count mismatch)
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, AnalysisError>;
