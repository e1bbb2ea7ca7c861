//! Error taxonomy for the payout pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// First problem found while inspecting a raw batch. Row numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("CSV file is empty")]
    EmptyInput,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid date format in row {row}. Expected YYYY-MM-DD")]
    InvalidDateFormat { row: usize },

    #[error("Invalid Net amount in row {row}")]
    InvalidAmount { row: usize },

    #[error("Missing Type in row {row}")]
    MissingType { row: usize },

    #[error("Missing Card Brand in row {row}")]
    MissingCardBrand { row: usize },
}

#[derive(Debug, Error)]
pub enum PayoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please upload a CSV file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("Error parsing CSV: {0}")]
    MalformedFile(String),

    /// Normalization failed on a batch that passed validation.
    #[error("Error processing data: {0}")]
    ProcessingFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayoutError>;
