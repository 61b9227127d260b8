// File: crates/likeplot-core/src/error.rs
// Summary: Typed errors for the rollup core and the CSV loader.

use thiserror::Error;

/// Rejected input to a rollup or chart build. Never recovered internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("input is empty; no groups can be formed")]
    EmptyInput,
    #[error("measurement {value} in group '{group}' is not a finite number")]
    NonFinite { group: String, value: f64 },
    #[error("measurement {value} is not a finite number")]
    NonFiniteValue { value: f64 },
}

/// Failure while turning a CSV file into typed records.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("line {line}: column '{column}' value '{value}' is not a finite number")]
    NonNumeric { line: u64, column: &'static str, value: String },
    #[error("line {line}: cannot parse date '{value}'")]
    BadDate { line: u64, value: String },
}
