//! Row structs mirroring the wide-column schema.
//!
//! Three tables back the whole system:
//!
//! - `tree_entry`, primary key `(container, name)` — the flat keyed table
//!   the namespace tree is reconstructed from
//! - `data_object`, partition key `uuid`, clustering key `sequence_number`
//!   — static (per-partition) columns plus one row per chunk
//! - `search_index`, primary key `(term, term_type, object_id)`

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trellis_types::{AclMap, Metadata, NodeId, ObjectId};

/// Name of a collection's self record within its own partition.
pub const SELF_RECORD: &str = ".";

/// One row of the `tree_entry` table.
///
/// A collection at path P is represented by a *self record* `(P, ".")`
/// carrying the container columns, and a *child record*
/// `(parent(P), basename(P) + "/")` in its parent's partition referencing
/// the same id. Data objects appear only as child records (no trailing
/// slash).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntryRow {
    /// Normalized absolute path of the owning collection (partition key).
    pub container: String,
    /// `"."` for a self record, otherwise the child's raw name
    /// (clustering key).
    pub name: String,
    /// Identity of the referenced node: a collection id for self and
    /// collection-child records, an object uuid for object children.
    pub id: Option<String>,
    /// Identity of the collection itself; present on self records only.
    pub container_id: Option<NodeId>,
    pub container_create_ts: Option<DateTime<Utc>>,
    pub container_modified_ts: Option<DateTime<Utc>>,
    /// Collection metadata; populated on self records only.
    pub container_metadata: Metadata,
    /// Collection ACL; populated on self records only.
    pub container_acl: AclMap,
}

impl TreeEntryRow {
    /// Build the self record for a collection at `path`.
    pub fn self_record(path: impl Into<String>, id: NodeId, now: DateTime<Utc>) -> Self {
        Self {
            container: path.into(),
            name: SELF_RECORD.to_string(),
            id: Some(id.to_string()),
            container_id: Some(id),
            container_create_ts: Some(now),
            container_modified_ts: Some(now),
            container_metadata: Metadata::new(),
            container_acl: AclMap::new(),
        }
    }

    /// Build the child record referencing a collection named `name` (no
    /// trailing slash; it is appended here).
    pub fn collection_child(container: impl Into<String>, name: &str, id: &NodeId) -> Self {
        Self {
            container: container.into(),
            name: format!("{name}/"),
            id: Some(id.to_string()),
            container_id: None,
            container_create_ts: None,
            container_modified_ts: None,
            container_metadata: Metadata::new(),
            container_acl: AclMap::new(),
        }
    }

    /// Build the child record referencing a data object named `name`.
    pub fn object_child(container: impl Into<String>, name: &str, id: &ObjectId) -> Self {
        Self {
            container: container.into(),
            name: name.to_string(),
            id: Some(id.to_string()),
            container_id: None,
            container_create_ts: None,
            container_modified_ts: None,
            container_metadata: Metadata::new(),
            container_acl: AclMap::new(),
        }
    }

    /// `true` for a collection's own `(path, ".")` row.
    pub fn is_self_record(&self) -> bool {
        self.name == SELF_RECORD
    }

    /// `true` for a child record referencing a collection (trailing slash).
    pub fn is_collection_child(&self) -> bool {
        !self.is_self_record() && self.name.ends_with('/')
    }
}

/// Static (partition-wide) columns of a `data_object` partition.
///
/// The partition acts like an inode header followed by an ordered list of
/// blob rows: one instance of these columns is shared by every chunk row
/// under the same uuid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStatics {
    pub uuid: ObjectId,
    pub checksum: Option<String>,
    pub size: u64,
    pub metadata: Metadata,
    pub mimetype: Option<String>,
    pub alt_url: BTreeSet<String>,
    pub create_ts: DateTime<Utc>,
    pub modified_ts: DateTime<Utc>,
    pub object_type: String,
    pub acl: AclMap,
    /// Back-pointer to the owning tree path. An integrity aid, never used
    /// for navigation.
    pub treepath: Option<String>,
}

impl ObjectStatics {
    /// Fresh statics for a new identity. `size` and `checksum` stay at
    /// their defaults; maintaining them is the caller's job.
    pub fn new(uuid: ObjectId, now: DateTime<Utc>) -> Self {
        Self {
            uuid,
            checksum: None,
            size: 0,
            metadata: Metadata::new(),
            mimetype: None,
            alt_url: BTreeSet::new(),
            create_ts: now,
            modified_ts: now,
            object_type: "UNKNOWN".to_string(),
            acl: AclMap::new(),
            treepath: None,
        }
    }
}

/// One chunk row of a `data_object` partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRow {
    /// Clustering key. Caller-assigned; gaps are allowed, read-back is
    /// ascending.
    pub sequence_number: u64,
    pub blob: Vec<u8>,
    /// Whether `blob` is a compressed frame that must be expanded on read.
    pub compressed: bool,
}

/// One row of the `search_index` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRow {
    pub term: String,
    /// Which attribute the term came from (`name`, `metadata`, ...).
    pub term_type: String,
    /// Collection path or object uuid the term points back to.
    pub object_id: String,
    /// `"collection"` or `"object"`.
    pub object_type: String,
}
