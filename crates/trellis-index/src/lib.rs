//! Best-effort term index for Trellis.
//!
//! Selected attributes of collections and data objects are tokenized into
//! `(term, term_type, object_id)` rows. The index exists to satisfy
//! lookups, never to be authoritative: searches re-resolve every hit
//! through the tree engine, filter by read permission, and silently drop
//! rows whose node has vanished.
//!
//! # Key Types
//!
//! - [`TermIndex`] — `index` / `find` / `reset`
//! - [`IndexTarget`] — collection-or-object view the writer indexes
//! - [`SearchHit`] — one visible match
//! - [`token`] — the lowercase, stop-word, min-length tokenizer

pub mod engine;
pub mod error;
pub mod token;

pub use engine::{IndexTarget, SearchHit, TermIndex};
pub use error::{IndexError, IndexResult};
