//! Error types for the dialect layer.

use crate::handle::HandleError;

/// Errors that can occur in dialect operations with an error channel.
///
/// Capabilities whose contract has no error return (schema introspection
/// predicates, current-database lookup, insert-with-returning) do not use
/// this type directly; they degrade to a safe default and, where a scope is
/// involved, record the failure in the scope's error accumulator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// A limit value was not a non-negative integer.
    #[error("invalid limit value: {value:?}")]
    InvalidLimit {
        /// The rejected value.
        value: String,
    },

    /// An offset value was not a non-negative integer.
    #[error("invalid offset value: {value:?}")]
    InvalidOffset {
        /// The rejected value.
        value: String,
    },

    /// The database handle reported an error.
    #[error("database error: {0}")]
    Handle(#[from] HandleError),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
