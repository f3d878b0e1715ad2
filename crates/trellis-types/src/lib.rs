//! Foundation types for Trellis.
//!
//! This crate provides the identifier, metadata, ACL, and principal types
//! used throughout the Trellis storage layer. Every other Trellis crate
//! depends on `trellis-types`.
//!
//! # Key Types
//!
//! - [`NodeId`] — identity of a namespace node (collection)
//! - [`ObjectId`] — partition-level identity of a chunked data object
//! - [`Ace`] / [`AclMap`] — access-control entries as stored in the
//!   backing store's user-defined type
//! - [`MetaValue`] — decoded metadata value (text or list of text)
//! - [`User`] / [`Group`] — consumed collaborator surfaces; identity
//!   storage itself lives outside this workspace

pub mod ace;
pub mod error;
pub mod id;
pub mod meta;
pub mod principal;

pub use ace::{Ace, AceType, AclMap};
pub use error::TypeError;
pub use id::{NodeId, ObjectId};
pub use meta::{
    decode_meta, decode_metadata, encode_meta, encode_metadata, metadata_to_list, MetaValue,
    Metadata,
};
pub use principal::{Group, User, AUTHENTICATED};
