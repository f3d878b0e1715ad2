//! The chunked object engine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use trellis_acl::{build_acl, build_acl_from_specs, AceSpec, GroupDirectory};
use trellis_store::{ChunkField, ChunkRow, ObjectStatics, ObjectStore, StaticField};
use trellis_types::ObjectId;

use crate::compress::decompress;
use crate::error::ObjectResult;
use crate::identity::ObjectIdentity;

/// Create, append to, read, and delete chunked objects.
///
/// The engine holds an explicit store handle; there is no ambient
/// configuration. Cloning is cheap and shares the handle.
#[derive(Clone)]
pub struct ObjectEngine {
    store: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for ObjectEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectEngine").finish_non_exhaustive()
    }
}

impl ObjectEngine {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Create a new identity holding `data` as chunk 0.
    ///
    /// The static columns and chunk 0 are written together. The blob is
    /// stored exactly as handed in: when `compressed` is set, `data` must
    /// already be a frame [`compress`] would produce. `size` and
    /// `checksum` stay unset; the caller maintains them via [`update`].
    ///
    /// [`compress`]: crate::compress::compress
    /// [`update`]: ObjectEngine::update
    pub fn create(&self, data: &[u8], compressed: bool) -> ObjectResult<ObjectIdentity> {
        let uuid = ObjectId::new();
        let statics = ObjectStatics::new(uuid.clone(), Utc::now());
        self.store.put_statics(&statics)?;
        self.write_chunk(&uuid, 0, data, compressed)?;
        debug!(uuid = %uuid, compressed, "object identity created");
        Ok(ObjectIdentity::from(statics))
    }

    /// Append one chunk, blob stored as given. The caller owns sequence
    /// numbering and pre-packages compressed blobs; re-appending an
    /// existing number silently replaces that chunk.
    pub fn append_chunk(
        &self,
        uuid: &ObjectId,
        sequence_number: u64,
        data: &[u8],
        compressed: bool,
    ) -> ObjectResult<()> {
        self.write_chunk(uuid, sequence_number, data, compressed)?;
        debug!(uuid = %uuid, sequence_number, compressed, "chunk appended");
        Ok(())
    }

    fn write_chunk(
        &self,
        uuid: &ObjectId,
        sequence_number: u64,
        data: &[u8],
        compressed: bool,
    ) -> ObjectResult<()> {
        self.store.put_chunk(
            uuid,
            &ChunkRow {
                sequence_number,
                blob: data.to_vec(),
                compressed,
            },
        )?;
        Ok(())
    }

    /// Find an identity by uuid.
    pub fn find(&self, uuid: &ObjectId) -> ObjectResult<Option<ObjectIdentity>> {
        Ok(self.store.get_statics(uuid)?.map(ObjectIdentity::from))
    }

    /// Read the object's content a chunk at a time, in ascending sequence
    /// order. Compressed chunks are expanded before they are yielded.
    ///
    /// The reader is finite and forward-only; calling `read_content`
    /// again restarts from the first chunk.
    pub fn read_content(&self, uuid: &ObjectId) -> ObjectResult<ContentReader> {
        let chunks = self.store.scan_chunks(uuid)?;
        Ok(ContentReader {
            chunks: chunks.into_iter(),
        })
    }

    /// Apply identity-scoped updates. `modified_ts` is bumped unless the
    /// caller supplies an explicit value. Returns `false` if no identity
    /// exists for `uuid`.
    pub fn update(&self, uuid: &ObjectId, fields: Vec<StaticField>) -> ObjectResult<bool> {
        let mut routed = vec![StaticField::ModifiedTs(Utc::now())];
        routed.extend(fields);
        let applied = self.store.update_statics(uuid, &routed)?;
        if !applied {
            warn!(uuid = %uuid, "static update against missing identity");
        }
        Ok(applied)
    }

    /// Apply chunk-scoped updates. Returns `false` if the chunk row does
    /// not exist.
    pub fn update_chunk(
        &self,
        uuid: &ObjectId,
        sequence_number: u64,
        fields: Vec<ChunkField>,
    ) -> ObjectResult<bool> {
        Ok(self.store.update_chunk(uuid, sequence_number, &fields)?)
    }

    /// Delete the whole partition: identity and every chunk, one scoped
    /// delete. Returns `true` if anything existed.
    pub fn delete(&self, uuid: &ObjectId) -> ObjectResult<bool> {
        let existed = self.store.delete_partition(uuid)?;
        debug!(uuid = %uuid, existed, "object partition deleted");
        Ok(existed)
    }

    /// Install an ACL on a fresh object. Same replace semantics as
    /// [`update_acl`].
    ///
    /// [`update_acl`]: ObjectEngine::update_acl
    pub fn create_acl(
        &self,
        uuid: &ObjectId,
        dir: &dyn GroupDirectory,
        read_ids: &[String],
        write_ids: &[String],
    ) -> ObjectResult<Vec<String>> {
        self.update_acl(uuid, dir, read_ids, write_ids)
    }

    /// Replace the object's ACL from two lists of group ids. Returns the
    /// identifiers that could not be resolved and were dropped.
    pub fn update_acl(
        &self,
        uuid: &ObjectId,
        dir: &dyn GroupDirectory,
        read_ids: &[String],
        write_ids: &[String],
    ) -> ObjectResult<Vec<String>> {
        let build = build_acl(dir, read_ids, write_ids);
        self.update(uuid, vec![StaticField::Acl(build.acl)])?;
        Ok(build.dropped)
    }

    /// Replace the object's ACL from explicit ACE descriptors (the
    /// protocol-request form). Returns the dropped identifiers.
    pub fn update_acl_from_specs(
        &self,
        uuid: &ObjectId,
        dir: &dyn GroupDirectory,
        specs: &[AceSpec],
    ) -> ObjectResult<Vec<String>> {
        let build = build_acl_from_specs(dir, specs);
        self.update(uuid, vec![StaticField::Acl(build.acl)])?;
        Ok(build.dropped)
    }
}

/// Iterator over an object's content, one decoded chunk per item.
pub struct ContentReader {
    chunks: std::vec::IntoIter<ChunkRow>,
}

impl Iterator for ContentReader {
    type Item = ObjectResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        if chunk.compressed {
            Some(decompress(&chunk.blob, chunk.sequence_number))
        } else {
            Some(Ok(chunk.blob))
        }
    }
}

impl ContentReader {
    /// Drain the reader into one contiguous buffer.
    pub fn collect_bytes(self) -> ObjectResult<Vec<u8>> {
        let mut out = Vec::new();
        for chunk in self {
            out.extend_from_slice(&chunk?);
        }
        Ok(out)
    }
}
