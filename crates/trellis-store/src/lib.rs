//! Backing-store boundary for Trellis.
//!
//! Trellis talks to its wide-column store exclusively through partition and
//! clustering-key operations: get/put/delete by key, an ascending
//! clustering-key scan within one partition, and partition-scoped deletes.
//! No joins, no multi-row transactions, no LIKE scans. This crate defines
//! that boundary:
//!
//! - Row structs mirroring the three tables ([`TreeEntryRow`],
//!   [`ObjectStatics`] + [`ChunkRow`], [`IndexRow`])
//! - One trait per table ([`TreeStore`], [`ObjectStore`], [`IndexStore`])
//! - Typed update routing ([`StaticField`], [`ChunkField`]) so callers can
//!   never aim a static-column value at a per-chunk row or vice versa
//! - [`MemoryStore`] — a `BTreeMap`-backed backend for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every operation touches a single partition.
//! 2. Writes are last-write-wins at the row level; the store provides no
//!    cross-row atomicity and none is assumed upstream.
//! 3. Lookup misses are `Ok(None)`, never errors.
//! 4. Adapter failures surface as [`StoreError::Backend`] and are not
//!    retried here.

pub mod error;
pub mod fields;
pub mod memory;
pub mod rows;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fields::{ChunkField, StaticField};
pub use memory::MemoryStore;
pub use rows::{ChunkRow, IndexRow, ObjectStatics, TreeEntryRow, SELF_RECORD};
pub use traits::{IndexStore, ObjectStore, TreeStore};
