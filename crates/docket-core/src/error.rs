//! Error types for the core workbench crate.

use thiserror::Error;

/// Errors returned by workbench operations.
///
/// All variants are recoverable and surfaced to the caller as inline
/// messages; none are fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocketCoreError {
    /// Submitted text was blank or whitespace-only.
    #[error("empty input")]
    EmptyInput,
    /// Identifier already present in the target collection.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    /// Identifier not present in the target collection.
    #[error("not found: {0}")]
    NotFound(String),
    /// A required field failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}
