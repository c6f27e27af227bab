//! Error type for chunked scan operations

use thiserror::Error;

/// Errors surfaced by the scan engine
#[derive(Debug, Error)]
pub enum ScanError {
    /// Worker count was not positive and the policy rejects it
    #[error("invalid worker count: {requested} (must be at least 1)")]
    InvalidWorkerCount {
        /// Worker count as requested by the caller
        requested: isize,
    },

    /// Output buffer does not have the same length as the input
    #[error("output length {output} does not match input length {input}")]
    LengthMismatch {
        /// Input length
        input: usize,
        /// Output length
        output: usize,
    },

    /// Checked arithmetic overflowed while processing a chunk
    #[error("integer overflow while scanning chunk {chunk}")]
    Overflow {
        /// Index of the chunk whose accumulation overflowed
        chunk: usize,
    },

    /// A dedicated worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
