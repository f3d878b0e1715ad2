//! ACL codec for Trellis.
//!
//! Access-control entries are stored as compact bitmasks. This crate owns
//! the encoding in both directions plus ACL construction:
//!
//! - [`AccessLevel`] — the three defined levels (`read`, `write`,
//!   `read/write`) and their mask codec. Masks outside the three levels
//!   decode to `None` and are ignored by resolution, never raised.
//! - [`ActionSet`] / [`Action`] — the effective action vocabulary
//!   (`read`, `write`, `delete`, `edit`).
//! - [`build_acl`] / [`build_acl_from_specs`] — replace-semantics ACL
//!   construction with identifier resolution through a [`GroupDirectory`].
//!   Unresolvable identifiers are dropped but *reported*, not silently
//!   swallowed.
//!
//! Permission resolution with upward tree inheritance lives in
//! `trellis-tree`; this crate is deliberately storage-free.

pub mod action;
pub mod build;
pub mod mask;

pub use action::{Action, ActionSet};
pub use build::{
    build_acl, build_acl_from_specs, default_acl, read_acl, AceSpec, AclBuild, GroupDirectory,
    MemoryGroupDirectory,
};
pub use mask::{direct_actions, AccessLevel, ACE_DELETE, ACE_EDIT, ACE_READ, ACE_WRITE};
