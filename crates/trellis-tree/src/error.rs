use trellis_object::ObjectError;
use trellis_store::StoreError;

/// Errors from namespace operations.
///
/// Lookup misses are `Ok(None)`, never errors; the conflict variants
/// abort a single create and leave no partial state beyond the row level.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The named parent collection has no self record.
    #[error("no such collection: {0}")]
    NoSuchCollection(String),

    /// A collection already occupies the target name.
    #[error("collection already exists: {0}")]
    CollectionConflict(String),

    /// A data object already occupies the target name.
    #[error("an object already occupies: {0}")]
    ResourceConflict(String),

    /// `create_root` was called but a root self record exists.
    #[error("root collection already exists")]
    RootExists,

    /// A child name was empty, `"."`, or contained a separator.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Failure from the backing store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Failure from the chunked object store during recursive delete.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Result alias for namespace operations.
pub type TreeResult<T> = Result<T, TreeError>;
