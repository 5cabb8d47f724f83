//! Error taxonomy for the adjustment pipeline.
//!
//! Client-caused failures (validation and reconciliation rejections) carry
//! every offending id so the caller can self-correct in one pass.
//! Infrastructure failures are kept separate and are never retried here.

use thiserror::Error;

/// Structural failure of the raw batch input, before any store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload did not decode to a batch with a non-empty `products` list.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A single entry was missing an id or carried a non-integer quantity.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
}

/// Infrastructure-level store failure. Fatal for the current batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("store unavailable: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Batch-level rejection from the reconciliation engine.
///
/// Every variant aborts the whole batch; no record is mutated on rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// At least one request id matched no inventory record. Lists every such id.
    #[error("product IDs not found in database: {}", .0.join(", "))]
    UnknownProductIds(Vec<String>),

    /// At least one id occurred more than once among matched requests.
    #[error("duplicate product IDs found: {}", .0.join(", "))]
    DuplicateProductIds(Vec<String>),

    /// At least one candidate quantity would drop below zero.
    #[error("not enough stock for the following IDs: {}", .0.join(", "))]
    InsufficientStock(Vec<String>),

    /// At least one candidate quantity would exceed the representable range.
    #[error("quantity out of range for the following IDs: {}", .0.join(", "))]
    QuantityOutOfRange(Vec<String>),

    /// The store could not be read or written. Not retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}
