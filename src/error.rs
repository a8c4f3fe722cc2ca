//! Error types for building code tables.

use std::collections::TryReserveError;
use thiserror::Error;

/// Error variants for queue, scan and configuration failures.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry was inserted into a queue already holding `capacity` entries.
    /// The entry is dropped.
    #[error("priority queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// `peek_min` or `extract_min` was called on an empty queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The queue's backing storage could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Alphabet sizes must lie in `1..=256` since symbols are bytes.
    #[error("invalid alphabet size: {0} (expected 1..=256)")]
    InvalidAlphabet(usize),

    /// `Weighting::Scaled` needs a finite divisor greater than zero.
    #[error("invalid weight divisor: {0}")]
    InvalidDivisor(f64),

    /// Reading the input stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
