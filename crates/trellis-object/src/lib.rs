//! Chunked object storage for Trellis.
//!
//! A binary object is one `data_object` partition: static columns carry
//! the identity-wide attributes (checksum, size, metadata, mimetype, ACL,
//! tree back-pointer), and each chunk is one clustering row under the
//! same uuid. The tree namespace only references objects by identity;
//! content flows through this crate independently of it.
//!
//! # Key Types
//!
//! - [`ObjectEngine`] — create/append/read/update/delete over an
//!   `Arc<dyn ObjectStore>` handle
//! - [`ObjectIdentity`] — read view over the static columns with decoded
//!   metadata accessors
//! - [`ContentReader`] — iterator yielding chunk payloads in ascending
//!   sequence order, expanding compressed chunks on the way out
//!
//! # Design Rules
//!
//! 1. Chunk sequence numbers are caller-assigned; gaps are legal and
//!    re-appending a number silently replaces that chunk.
//! 2. `size` and `checksum` are caller-maintained via [`ObjectEngine::update`];
//!    creation never computes them.
//! 3. Static and per-chunk updates take different typed paths and can
//!    never be mixed up.

pub mod compress;
pub mod engine;
pub mod error;
pub mod identity;

pub use engine::{ContentReader, ObjectEngine};
pub use error::{ObjectError, ObjectResult};
pub use identity::ObjectIdentity;
