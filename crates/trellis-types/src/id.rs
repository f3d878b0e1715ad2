//! String-backed identifiers for namespace nodes and data objects.
//!
//! The backing store keys everything by text columns, so both identifier
//! kinds are newtypes over a uuid-v4 simple (hex, no hyphens) string. The
//! newtypes exist only to keep node and object identities from being
//! swapped at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Identity of a namespace node (a collection's `container_id`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

/// Partition-level identity of a chunked data object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

macro_rules! text_id {
    ($name:ident) => {
        impl $name {
            /// Allocate a fresh random identity.
            pub fn new() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// The raw text form as stored in the backing store.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || s.chars().any(char::is_whitespace) {
                    return Err(TypeError::InvalidId(s.to_string()));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

text_id!(NodeId);
text_id!(ObjectId);
