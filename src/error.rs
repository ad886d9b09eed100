//! Error types for the aerorisk library.

use thiserror::Error;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Errors that can occur while scoring a flight.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// A raw input field is outside its documented range.
    #[error("input out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A categorical code has no entry in the reliability table.
    #[error("unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: String },

    /// A classifier artifact failed to load or to produce a score.
    #[error("scoring backend '{backend}' failed: {reason}")]
    BackendFailure { backend: String, reason: String },

    /// A backend returned a probability outside [0, 1] or a non-finite value.
    #[error("scoring backend '{backend}' returned invalid probability {value}")]
    InvalidProbability { backend: String, value: f64 },

    /// A reference table could not be loaded or parsed.
    #[error("reference table error: {0}")]
    TableLoad(String),

    /// A probability distribution was constructed with invalid mass.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
}
