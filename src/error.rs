//! Error types for batchmark
//!
//! Every error is local and fatal to the operation that raised it: a failed
//! mutate fails that one call without touching other records, and a failed
//! aggregation aborts the strategy invocation that requested it. There is no
//! retry path; silently absorbing an error would corrupt benchmark validity.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Batchmark error types
#[derive(Error, Debug)]
pub enum Error {
    /// Record index outside the store bounds
    #[error("record index {index} out of range (store holds {len} records)")]
    IndexOutOfRange {
        /// Requested record index
        index: usize,
        /// Number of records in the store
        len: usize,
    },

    /// Replacement value sequence does not match the record length
    #[error("record length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Length fixed at record construction
        expected: usize,
        /// Length of the offered replacement
        actual: usize,
    },

    /// Aggregation over a store with no records (mean would divide by zero)
    #[error("cannot aggregate over an empty record store")]
    EmptyStore,

    /// Generator configuration rejected (e.g. negative or NaN std-dev)
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}
