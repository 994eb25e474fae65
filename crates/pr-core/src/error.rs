//! Framework error type.
//!
//! Sub-crates define their own error enums for their invariants; `PrError`
//! covers what is shared between them: invalid configuration.

use thiserror::Error;

/// The top-level error type for `pr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PrError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pr-core`.
pub type PrResult<T> = Result<T, PrError>;
