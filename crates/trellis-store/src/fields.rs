//! Typed routing for `data_object` updates.
//!
//! Static columns and chunk rows live in different logical rows of the
//! same partition, so they take different UPDATE shapes. Each updatable
//! field is an enum variant rather than a caller-supplied column-name
//! string, so a static value can never be aimed at a chunk row (or vice
//! versa) and the compiler owns the routing.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trellis_types::{AclMap, Metadata};

use crate::rows::{ChunkRow, ObjectStatics};

/// One identity-scoped (static column) update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaticField {
    Checksum(String),
    Size(u64),
    Metadata(Metadata),
    Mimetype(String),
    AltUrl(BTreeSet<String>),
    CreateTs(DateTime<Utc>),
    ModifiedTs(DateTime<Utc>),
    ObjectType(String),
    Acl(AclMap),
    Treepath(String),
}

impl StaticField {
    /// Column name, for logging and statement building by real adapters.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Checksum(_) => "checksum",
            Self::Size(_) => "size",
            Self::Metadata(_) => "metadata",
            Self::Mimetype(_) => "mimetype",
            Self::AltUrl(_) => "alt_url",
            Self::CreateTs(_) => "create_ts",
            Self::ModifiedTs(_) => "modified_ts",
            Self::ObjectType(_) => "type",
            Self::Acl(_) => "acl",
            Self::Treepath(_) => "treepath",
        }
    }

    /// Apply this update to an in-memory statics row.
    pub fn apply(&self, statics: &mut ObjectStatics) {
        match self {
            Self::Checksum(v) => statics.checksum = Some(v.clone()),
            Self::Size(v) => statics.size = *v,
            Self::Metadata(v) => statics.metadata = v.clone(),
            Self::Mimetype(v) => statics.mimetype = Some(v.clone()),
            Self::AltUrl(v) => statics.alt_url = v.clone(),
            Self::CreateTs(v) => statics.create_ts = *v,
            Self::ModifiedTs(v) => statics.modified_ts = *v,
            Self::ObjectType(v) => statics.object_type = v.clone(),
            Self::Acl(v) => statics.acl = v.clone(),
            Self::Treepath(v) => statics.treepath = Some(v.clone()),
        }
    }
}

/// One chunk-scoped update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkField {
    Blob(Vec<u8>),
    Compressed(bool),
}

impl ChunkField {
    /// Column name, for logging and statement building by real adapters.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Blob(_) => "blob",
            Self::Compressed(_) => "compressed",
        }
    }

    /// Apply this update to an in-memory chunk row.
    pub fn apply(&self, chunk: &mut ChunkRow) {
        match self {
            Self::Blob(v) => chunk.blob = v.clone(),
            Self::Compressed(v) => chunk.compressed = *v,
        }
    }
}
