use trellis_store::StoreError;

/// Errors from chunked-object operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// Failure from the backing store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A chunk flagged as compressed could not be expanded.
    #[error("chunk decompression failed (sequence {sequence_number}): {reason}")]
    Decompression { sequence_number: u64, reason: String },

    /// A chunk payload could not be compressed for storage.
    #[error("chunk compression failed: {0}")]
    Compression(String),
}

/// Result alias for chunked-object operations.
pub type ObjectResult<T> = Result<T, ObjectError>;
