//! Errors raised by the aggregate itself.

use thiserror::Error;

/// Result type for fallible aggregate accessors.
pub type AccessResult<T> = Result<T, AccessError>;

/// Misuse of an aggregate's accessors.
///
/// Aggregates never fail during construction or rendering; the only thing a
/// caller can get wrong is asking for an element that does not exist.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// Requested position is past the end of the aggregate.
    #[error("index {index} out of bounds for aggregate of {len} errors")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl AccessError {
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}
