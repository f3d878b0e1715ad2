/// Errors from backing-store operations.
///
/// The in-memory backend never produces these; real adapters wrap
/// connectivity, timeout, and malformed-statement failures in
/// [`StoreError::Backend`]. Retry and backoff are the adapter's or the
/// caller's concern, never the core's.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failure reported by the storage adapter.
    #[error("backing store failure: {0}")]
    Backend(String),

    /// A row could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
