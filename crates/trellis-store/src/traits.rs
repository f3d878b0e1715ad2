//! The storage traits defining the wide-column boundary.
//!
//! Any backend (in-memory, CQL driver, test double) implements these to
//! carry Trellis data. Implementations must be thread-safe (`Send + Sync`)
//! and honor single-partition semantics: no operation here spans
//! partitions, and multi-row consistency is the caller's problem.

use trellis_types::ObjectId;

use crate::error::StoreResult;
use crate::fields::{ChunkField, StaticField};
use crate::rows::{ChunkRow, IndexRow, ObjectStatics, TreeEntryRow};

/// Storage for the `tree_entry` table.
pub trait TreeStore: Send + Sync {
    /// Read one row by its full primary key.
    ///
    /// Returns `Ok(None)` if the row does not exist.
    fn get(&self, container: &str, name: &str) -> StoreResult<Option<TreeEntryRow>>;

    /// Write (create or overwrite) one row. Last write wins.
    fn put(&self, row: &TreeEntryRow) -> StoreResult<()>;

    /// Delete one row. Returns `true` if it existed.
    fn delete(&self, container: &str, name: &str) -> StoreResult<bool>;

    /// Clustering scan: every row sharing `container`, ascending by name.
    fn scan_container(&self, container: &str) -> StoreResult<Vec<TreeEntryRow>>;

    /// Partition-scoped delete of every row under `container`. Returns the
    /// number of rows removed.
    fn delete_container(&self, container: &str) -> StoreResult<usize>;
}

/// Storage for the `data_object` table.
pub trait ObjectStore: Send + Sync {
    /// Read the static columns of a partition.
    ///
    /// Returns `Ok(None)` if no identity has been written for `uuid`.
    fn get_statics(&self, uuid: &ObjectId) -> StoreResult<Option<ObjectStatics>>;

    /// Write the static columns of a partition. Last write wins.
    fn put_statics(&self, statics: &ObjectStatics) -> StoreResult<()>;

    /// Apply identity-scoped updates. Returns `false` if the partition has
    /// no statics row to update.
    fn update_statics(&self, uuid: &ObjectId, fields: &[StaticField]) -> StoreResult<bool>;

    /// Write one chunk row. Re-writing a sequence number silently
    /// replaces the previous blob.
    fn put_chunk(&self, uuid: &ObjectId, chunk: &ChunkRow) -> StoreResult<()>;

    /// Read one chunk row by clustering key.
    fn get_chunk(&self, uuid: &ObjectId, sequence_number: u64) -> StoreResult<Option<ChunkRow>>;

    /// Clustering scan: every chunk of the partition, ascending by
    /// `sequence_number`. Gaps in the numbering are preserved as-is.
    fn scan_chunks(&self, uuid: &ObjectId) -> StoreResult<Vec<ChunkRow>>;

    /// Apply chunk-scoped updates. Returns `false` if the chunk row does
    /// not exist.
    fn update_chunk(
        &self,
        uuid: &ObjectId,
        sequence_number: u64,
        fields: &[ChunkField],
    ) -> StoreResult<bool>;

    /// Remove the whole partition: statics and every chunk, in one scoped
    /// delete. Returns `true` if anything existed.
    fn delete_partition(&self, uuid: &ObjectId) -> StoreResult<bool>;
}

/// Storage for the `search_index` table.
pub trait IndexStore: Send + Sync {
    /// Write one index row. Identical `(term, term_type, object_id)`
    /// tuples overwrite.
    fn put(&self, row: &IndexRow) -> StoreResult<()>;

    /// All rows with an exact term match.
    fn scan_term(&self, term: &str) -> StoreResult<Vec<IndexRow>>;

    /// All rows pointing at `object_id`. No secondary index accelerates
    /// this; backends may have to walk the table.
    fn scan_object(&self, object_id: &str) -> StoreResult<Vec<IndexRow>>;

    /// Delete one row by its full primary key. Returns `true` if it
    /// existed.
    fn delete(&self, term: &str, term_type: &str, object_id: &str) -> StoreResult<bool>;
}
