//! The `Collection` projection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use trellis_store::TreeEntryRow;
use trellis_types::{
    decode_meta, decode_metadata, metadata_to_list, AclMap, MetaValue, Metadata, NodeId,
};

use crate::path;

/// A directory-like namespace node, derived from a self record.
///
/// `Collection` is a transient read view: only the engine creates and
/// destroys the underlying `tree_entry` pairs, and a `Collection` is
/// never persisted on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub id: NodeId,
    /// Basename of the path; the root presents as `"Home"`.
    pub name: String,
    pub path: String,
    /// Path of the parent collection; `None` for the root.
    pub parent: Option<String>,
    pub metadata: Metadata,
    pub acl: AclMap,
    pub create_ts: Option<DateTime<Utc>>,
    pub modified_ts: Option<DateTime<Utc>>,
}

impl Collection {
    /// Project a self record. Returns `None` for rows that are not a
    /// well-formed self record (wrong name, or no container id).
    pub fn from_row(row: TreeEntryRow) -> Option<Self> {
        if !row.is_self_record() {
            return None;
        }
        let id = row.container_id?;
        let (parent, name) = match path::split(&row.container) {
            Some((parent, name)) => (Some(parent), name),
            None => (None, "Home".to_string()),
        };
        Some(Self {
            id,
            name,
            path: row.container,
            parent,
            metadata: row.container_metadata,
            acl: row.container_acl,
            create_ts: row.container_create_ts,
            modified_ts: row.container_modified_ts,
        })
    }

    /// `true` for the single parentless collection at `/`.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Decoded metadata map.
    pub fn metadata(&self) -> BTreeMap<String, MetaValue> {
        decode_metadata(&self.metadata)
    }

    /// Decoded value of one metadata key.
    pub fn metadata_value(&self, key: &str) -> Option<MetaValue> {
        self.metadata.get(key).map(|raw| decode_meta(raw))
    }

    /// Metadata flattened to key/value couples (list values element-wise).
    pub fn metadata_list(&self) -> Vec<(String, String)> {
        metadata_to_list(&self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_projects_as_home() {
        let row = TreeEntryRow::self_record("/", NodeId::new(), Utc::now());
        let collection = Collection::from_row(row).unwrap();
        assert!(collection.is_root());
        assert_eq!(collection.name, "Home");
        assert_eq!(collection.path, "/");
        assert_eq!(collection.parent, None);
    }

    #[test]
    fn nested_collection_has_parent() {
        let row = TreeEntryRow::self_record("/archive/2015", NodeId::new(), Utc::now());
        let collection = Collection::from_row(row).unwrap();
        assert!(!collection.is_root());
        assert_eq!(collection.name, "2015");
        assert_eq!(collection.parent.as_deref(), Some("/archive"));
    }

    #[test]
    fn child_record_is_not_a_collection() {
        let row = TreeEntryRow::collection_child("/", "archive", &NodeId::new());
        assert!(Collection::from_row(row).is_none());
    }
}
