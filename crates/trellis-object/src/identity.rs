//! Read view over an object's static columns.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use trellis_store::ObjectStatics;
use trellis_types::{decode_meta, decode_metadata, metadata_to_list, AclMap, MetaValue, ObjectId};

/// One logical binary object: the identity-wide attributes shared by all
/// of its chunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectIdentity {
    statics: ObjectStatics,
}

impl ObjectIdentity {
    pub fn uuid(&self) -> &ObjectId {
        &self.statics.uuid
    }

    pub fn checksum(&self) -> Option<&str> {
        self.statics.checksum.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.statics.size
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.statics.mimetype.as_deref()
    }

    pub fn alt_url(&self) -> &BTreeSet<String> {
        &self.statics.alt_url
    }

    pub fn create_ts(&self) -> DateTime<Utc> {
        self.statics.create_ts
    }

    pub fn modified_ts(&self) -> DateTime<Utc> {
        self.statics.modified_ts
    }

    pub fn object_type(&self) -> &str {
        &self.statics.object_type
    }

    pub fn acl(&self) -> &AclMap {
        &self.statics.acl
    }

    /// Back-pointer to the owning tree path, if the ingest set one.
    pub fn treepath(&self) -> Option<&str> {
        self.statics.treepath.as_deref()
    }

    /// Decoded metadata map.
    pub fn metadata(&self) -> BTreeMap<String, MetaValue> {
        decode_metadata(&self.statics.metadata)
    }

    /// Decoded value of one metadata key.
    pub fn metadata_value(&self, key: &str) -> Option<MetaValue> {
        self.statics.metadata.get(key).map(|raw| decode_meta(raw))
    }

    /// Metadata flattened to key/value couples (list values element-wise).
    pub fn metadata_list(&self) -> Vec<(String, String)> {
        metadata_to_list(&self.statics.metadata)
    }

    /// The underlying row, for callers that need raw column access.
    pub fn statics(&self) -> &ObjectStatics {
        &self.statics
    }
}

impl From<ObjectStatics> for ObjectIdentity {
    fn from(statics: ObjectStatics) -> Self {
        Self { statics }
    }
}
