//! Error types for pr-io.

use thiserror::Error;

/// Problems with the course description.  Any of these stops the run before
/// the first tick.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {field} must not be negative (got {value})")]
    Negative {
        line:  usize,
        field: &'static str,
        value: i64,
    },

    #[error("input ended early: {what} missing")]
    Missing { what: &'static str },

    #[error("expected {expected} learner lines, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("line {line}: learner {id} listed twice")]
    DuplicateLearner { line: usize, id: u32 },
}

/// Alias for `Result<T, InputError>`.
pub type InputResult<T> = Result<T, InputError>;

/// Errors that can occur when writing simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
