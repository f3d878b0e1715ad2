//! Tree namespace engine for Trellis.
//!
//! The namespace is a tree reconstructed by convention from a flat keyed
//! table: every collection at path P owns a *self record* `(P, ".")` and
//! is referenced by one *child record* `(parent(P), basename(P) + "/")`
//! in its parent's partition, both sharing one id. There are no native
//! parent pointers and no multi-row transactions; the two records are
//! written independently and [`TreeEngine::repair`] restores the pairing
//! invariant after a crash between the writes.
//!
//! # Key Types
//!
//! - [`TreeEngine`] — create/find/list/delete collections, recursive
//!   delete, pairing repair, ACL management, permission resolution
//! - [`Collection`] — transient projection over a self record; never
//!   independently persisted
//! - [`path`] — the `merge`/`split` path algebra with its root special
//!   cases

pub mod collection;
pub mod engine;
pub mod error;
pub mod path;
pub mod perm;

pub use collection::Collection;
pub use engine::{RepairReport, TreeEngine};
pub use error::{TreeError, TreeResult};
