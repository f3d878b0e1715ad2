//! Principal surfaces consumed by permission resolution.
//!
//! User and group storage (and password handling) live outside this
//! workspace; Trellis only reads the fields that ACL resolution needs.

use serde::{Deserialize, Serialize};

/// Sentinel identifier meaning "any authenticated principal".
pub const AUTHENTICATED: &str = "AUTHENTICATED@";

/// A user as seen by permission resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Administrators bypass all ACL checks.
    pub administrator: bool,
    pub active: bool,
    /// Ids of the groups this user belongs to.
    pub groups: Vec<String>,
}

impl User {
    /// A regular (non-administrator) user in the given groups.
    pub fn member(username: impl Into<String>, groups: Vec<String>) -> Self {
        let username = username.into();
        Self {
            id: username.clone(),
            username,
            administrator: false,
            active: true,
            groups,
        }
    }

    /// An administrator with no group memberships.
    pub fn administrator(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: username.clone(),
            username,
            administrator: true,
            active: true,
            groups: Vec::new(),
        }
    }
}

/// A group as seen by ACL identifier resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub owner: String,
}
