//! Error types for effect size computation
//!
//! Errors are reserved for caller contract violations: out-of-domain
//! parameters such as a target correlation above one or a negative cell
//! count. Degenerate statistics (zero denominators) are not errors; they are
//! reported through [`crate::Measure::Undefined`].

use thiserror::Error;

/// Core error type for effect size operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter outside its closed range
    pub fn out_of_range(name: &str, value: f64, low: f64, high: f64) -> Self {
        Self::InvalidParameter(format!("{name} = {value} must be in [{low}, {high}]"))
    }

    /// Create an error for a negative contingency count
    pub fn negative_count(cell: &str, value: i64) -> Self {
        Self::InvalidInput(format!("Cell {cell} = {value} must be a non-negative count"))
    }

    /// Create an error for NaN/Inf parameters
    pub fn non_finite(name: &str) -> Self {
        Self::InvalidParameter(format!("{name} must be finite"))
    }
}
