use trellis_object::ObjectError;
use trellis_store::StoreError;
use trellis_tree::TreeError;

/// Errors from indexing and search.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Failure from the backing store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Failure resolving a hit through the tree namespace.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Failure resolving a hit through the object store.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
