//! In-memory, `BTreeMap`-based backend.
//!
//! Intended for tests and embedding. Keys are ordered tuples, so the
//! clustering-order scans the wide-column store would provide fall out of
//! map iteration order for free.

use std::collections::BTreeMap;
use std::sync::RwLock;

use trellis_types::ObjectId;

use crate::error::StoreResult;
use crate::fields::{ChunkField, StaticField};
use crate::rows::{ChunkRow, IndexRow, ObjectStatics, TreeEntryRow};
use crate::traits::{IndexStore, ObjectStore, TreeStore};

/// One `data_object` partition: a statics header plus chunk rows keyed by
/// sequence number.
#[derive(Clone, Debug, Default)]
struct ObjectPartition {
    statics: Option<ObjectStatics>,
    chunks: BTreeMap<u64, ChunkRow>,
}

impl ObjectPartition {
    fn is_empty(&self) -> bool {
        self.statics.is_none() && self.chunks.is_empty()
    }
}

/// In-memory backend implementing all three storage traits.
///
/// All rows are held behind `RwLock`s for safe concurrent access and are
/// cloned on read/write, mirroring the value semantics of a remote store.
#[derive(Default)]
pub struct MemoryStore {
    tree: RwLock<BTreeMap<(String, String), TreeEntryRow>>,
    objects: RwLock<BTreeMap<ObjectId, ObjectPartition>>,
    index: RwLock<BTreeMap<(String, String, String), IndexRow>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `tree_entry` rows currently stored.
    pub fn tree_row_count(&self) -> usize {
        self.tree.read().expect("lock poisoned").len()
    }

    /// Number of `data_object` partitions currently stored.
    pub fn object_partition_count(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Number of `search_index` rows currently stored.
    pub fn index_row_count(&self) -> usize {
        self.index.read().expect("lock poisoned").len()
    }

    /// Remove everything from all three tables.
    pub fn clear(&self) {
        self.tree.write().expect("lock poisoned").clear();
        self.objects.write().expect("lock poisoned").clear();
        self.index.write().expect("lock poisoned").clear();
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("tree_rows", &self.tree_row_count())
            .field("object_partitions", &self.object_partition_count())
            .field("index_rows", &self.index_row_count())
            .finish()
    }
}

impl TreeStore for MemoryStore {
    fn get(&self, container: &str, name: &str) -> StoreResult<Option<TreeEntryRow>> {
        let map = self.tree.read().expect("lock poisoned");
        Ok(map.get(&(container.to_string(), name.to_string())).cloned())
    }

    fn put(&self, row: &TreeEntryRow) -> StoreResult<()> {
        let mut map = self.tree.write().expect("lock poisoned");
        map.insert((row.container.clone(), row.name.clone()), row.clone());
        Ok(())
    }

    fn delete(&self, container: &str, name: &str) -> StoreResult<bool> {
        let mut map = self.tree.write().expect("lock poisoned");
        Ok(map
            .remove(&(container.to_string(), name.to_string()))
            .is_some())
    }

    fn scan_container(&self, container: &str) -> StoreResult<Vec<TreeEntryRow>> {
        let map = self.tree.read().expect("lock poisoned");
        // Tuple ordering makes this a contiguous range, ascending by name.
        let lo = (container.to_string(), String::new());
        let rows = map
            .range(lo..)
            .take_while(|((c, _), _)| c == container)
            .map(|(_, row)| row.clone())
            .collect();
        Ok(rows)
    }

    fn delete_container(&self, container: &str) -> StoreResult<usize> {
        let mut map = self.tree.write().expect("lock poisoned");
        let keys: Vec<_> = map
            .range((container.to_string(), String::new())..)
            .take_while(|((c, _), _)| c == container)
            .map(|(k, _)| k.clone())
            .collect();
        for key in &keys {
            map.remove(key);
        }
        Ok(keys.len())
    }
}

impl ObjectStore for MemoryStore {
    fn get_statics(&self, uuid: &ObjectId) -> StoreResult<Option<ObjectStatics>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(uuid).and_then(|p| p.statics.clone()))
    }

    fn put_statics(&self, statics: &ObjectStatics) -> StoreResult<()> {
        let mut map = self.objects.write().expect("lock poisoned");
        let partition = map.entry(statics.uuid.clone()).or_default();
        partition.statics = Some(statics.clone());
        Ok(())
    }

    fn update_statics(&self, uuid: &ObjectId, fields: &[StaticField]) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        let Some(statics) = map.get_mut(uuid).and_then(|p| p.statics.as_mut()) else {
            return Ok(false);
        };
        for field in fields {
            field.apply(statics);
        }
        Ok(true)
    }

    fn put_chunk(&self, uuid: &ObjectId, chunk: &ChunkRow) -> StoreResult<()> {
        let mut map = self.objects.write().expect("lock poisoned");
        let partition = map.entry(uuid.clone()).or_default();
        partition.chunks.insert(chunk.sequence_number, chunk.clone());
        Ok(())
    }

    fn get_chunk(&self, uuid: &ObjectId, sequence_number: u64) -> StoreResult<Option<ChunkRow>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map
            .get(uuid)
            .and_then(|p| p.chunks.get(&sequence_number).cloned()))
    }

    fn scan_chunks(&self, uuid: &ObjectId) -> StoreResult<Vec<ChunkRow>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map
            .get(uuid)
            .map(|p| p.chunks.values().cloned().collect())
            .unwrap_or_default())
    }

    fn update_chunk(
        &self,
        uuid: &ObjectId,
        sequence_number: u64,
        fields: &[ChunkField],
    ) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        let Some(chunk) = map
            .get_mut(uuid)
            .and_then(|p| p.chunks.get_mut(&sequence_number))
        else {
            return Ok(false);
        };
        for field in fields {
            field.apply(chunk);
        }
        Ok(true)
    }

    fn delete_partition(&self, uuid: &ObjectId) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        match map.remove(uuid) {
            Some(partition) => Ok(!partition.is_empty()),
            None => Ok(false),
        }
    }
}

impl IndexStore for MemoryStore {
    fn put(&self, row: &IndexRow) -> StoreResult<()> {
        let mut map = self.index.write().expect("lock poisoned");
        map.insert(
            (
                row.term.clone(),
                row.term_type.clone(),
                row.object_id.clone(),
            ),
            row.clone(),
        );
        Ok(())
    }

    fn scan_term(&self, term: &str) -> StoreResult<Vec<IndexRow>> {
        let map = self.index.read().expect("lock poisoned");
        let lo = (term.to_string(), String::new(), String::new());
        Ok(map
            .range(lo..)
            .take_while(|((t, _, _), _)| t == term)
            .map(|(_, row)| row.clone())
            .collect())
    }

    fn scan_object(&self, object_id: &str) -> StoreResult<Vec<IndexRow>> {
        let map = self.index.read().expect("lock poisoned");
        Ok(map
            .values()
            .filter(|row| row.object_id == object_id)
            .cloned()
            .collect())
    }

    fn delete(&self, term: &str, term_type: &str, object_id: &str) -> StoreResult<bool> {
        let mut map = self.index.write().expect("lock poisoned");
        Ok(map
            .remove(&(
                term.to_string(),
                term_type.to_string(),
                object_id.to_string(),
            ))
            .is_some())
    }
}
