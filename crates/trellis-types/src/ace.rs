//! Access-control entry structures as stored in the backing store.
//!
//! One [`Ace`] grants (or, in principle, denies) a permission mask to a
//! single identifier. An ACL is a map from identifier to ACE with
//! replace-on-write semantics; incremental single-entry edits are never
//! issued against the store.
//!
//! Mask and flag interpretation lives in `trellis-acl`; this crate only
//! carries the raw representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// ACL map keyed by group id or the `AUTHENTICATED@` sentinel.
pub type AclMap = BTreeMap<String, Ace>;

/// Whether an ACE grants or denies its mask.
///
/// Deny entries are representable for schema compatibility but are never
/// produced by the ACL build paths and are not consulted by permission
/// resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AceType {
    Allow,
    Deny,
}

impl fmt::Display for AceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "ALLOW"),
            Self::Deny => write!(f, "DENY"),
        }
    }
}

/// One access-control entry, mirroring the store's `Ace` user-defined type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ace {
    /// Grant or deny.
    pub acetype: AceType,
    /// Display identifier of the principal (group name or `AUTHENTICATED@`).
    pub identifier: String,
    /// Inheritance bits. Currently always propagate-to-descendants (0).
    pub aceflags: u32,
    /// Bitmask over the granted actions; see `trellis-acl` for the bits.
    pub acemask: u32,
}

impl Ace {
    /// Build an ALLOW entry with no inheritance flags.
    pub fn allow(identifier: impl Into<String>, acemask: u32) -> Self {
        Self {
            acetype: AceType::Allow,
            identifier: identifier.into(),
            aceflags: 0,
            acemask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_constructor() {
        let ace = Ace::allow("archivists", 0x03);
        assert_eq!(ace.acetype, AceType::Allow);
        assert_eq!(ace.identifier, "archivists");
        assert_eq!(ace.aceflags, 0);
        assert_eq!(ace.acemask, 0x03);
    }

    #[test]
    fn acetype_serializes_uppercase() {
        let json = serde_json::to_string(&AceType::Allow).unwrap();
        assert_eq!(json, "\"ALLOW\"");
        let back: AceType = serde_json::from_str("\"DENY\"").unwrap();
        assert_eq!(back, AceType::Deny);
    }

    #[test]
    fn ace_roundtrip() {
        let ace = Ace::allow("AUTHENTICATED@", 0x01);
        let json = serde_json::to_string(&ace).unwrap();
        let back: Ace = serde_json::from_str(&json).unwrap();
        assert_eq!(ace, back);
    }
}
