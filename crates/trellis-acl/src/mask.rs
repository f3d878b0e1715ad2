//! Acemask bit flags and the level⇄mask codec.
//!
//! Only three access levels are ever written by the build paths: `read`,
//! `write`, and `read/write`. The inverse direction is total over masks the
//! forward direction produces; any other mask decodes to `None` and is
//! skipped by resolution (a foreign ACE in the store must never make a
//! permission check fail).

use trellis_types::{AclMap, User, AUTHENTICATED};

use crate::action::{Action, ActionSet};

pub const ACE_READ: u32 = 0x01;
pub const ACE_WRITE: u32 = 0x02;
pub const ACE_DELETE: u32 = 0x04;
pub const ACE_EDIT: u32 = 0x08;

/// A human-readable access level, the unit the ACL build paths work in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Read,
    ReadWrite,
    Write,
}

impl AccessLevel {
    /// Encode to the stored acemask.
    pub fn mask(self) -> u32 {
        match self {
            Self::Read => ACE_READ,
            Self::Write => ACE_WRITE | ACE_DELETE | ACE_EDIT,
            Self::ReadWrite => ACE_READ | ACE_WRITE | ACE_DELETE | ACE_EDIT,
        }
    }

    /// Decode a stored acemask. Returns `None` for any mask the forward
    /// direction cannot produce.
    pub fn from_mask(mask: u32) -> Option<Self> {
        if mask == Self::Read.mask() {
            Some(Self::Read)
        } else if mask == Self::Write.mask() {
            Some(Self::Write)
        } else if mask == Self::ReadWrite.mask() {
            Some(Self::ReadWrite)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read/write",
        }
    }

    /// Parse the wire/display form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "read/write" => Some(Self::ReadWrite),
            _ => None,
        }
    }

    /// The actions this level grants. `write` implies `delete` and `edit`.
    pub fn actions(self) -> ActionSet {
        match self {
            Self::Read => [Action::Read].into_iter().collect(),
            Self::Write => [Action::Write, Action::Delete, Action::Edit]
                .into_iter()
                .collect(),
            Self::ReadWrite => ActionSet::all(),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode the actions `acl` grants `user` directly, with no inheritance
/// and no administrator bypass.
///
/// Every identifier in the user's groups plus `AUTHENTICATED@` is looked
/// up as a key; hits have their masks decoded to levels and the level
/// actions unioned in. Undecodable masks contribute nothing.
pub fn direct_actions(acl: &AclMap, user: &User) -> ActionSet {
    let mut actions = ActionSet::empty();
    for gid in user.groups.iter().map(String::as_str).chain([AUTHENTICATED]) {
        if let Some(ace) = acl.get(gid) {
            if let Some(level) = AccessLevel::from_mask(ace.acemask) {
                actions = actions.union(level.actions());
            }
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::Ace;

    #[test]
    fn level_mask_roundtrip() {
        for level in [
            AccessLevel::Read,
            AccessLevel::Write,
            AccessLevel::ReadWrite,
        ] {
            assert_eq!(AccessLevel::from_mask(level.mask()), Some(level));
        }
    }

    #[test]
    fn unknown_masks_decode_to_none() {
        assert_eq!(AccessLevel::from_mask(0), None);
        assert_eq!(AccessLevel::from_mask(ACE_DELETE), None);
        assert_eq!(AccessLevel::from_mask(0xFFFF), None);
    }

    #[test]
    fn str_forms_roundtrip() {
        for level in [
            AccessLevel::Read,
            AccessLevel::Write,
            AccessLevel::ReadWrite,
        ] {
            assert_eq!(AccessLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(AccessLevel::parse("execute"), None);
    }

    #[test]
    fn write_level_implies_delete_and_edit() {
        let actions = AccessLevel::Write.actions();
        assert!(!actions.contains(Action::Read));
        assert!(actions.contains(Action::Write));
        assert!(actions.contains(Action::Delete));
        assert!(actions.contains(Action::Edit));
    }

    #[test]
    fn direct_actions_unions_group_grants() {
        let mut acl = AclMap::new();
        acl.insert(
            "g1".to_string(),
            Ace::allow("archivists", AccessLevel::Read.mask()),
        );
        acl.insert(
            "g2".to_string(),
            Ace::allow("curators", AccessLevel::Write.mask()),
        );
        let user = User::member("kira", vec!["g1".to_string(), "g2".to_string()]);

        let actions = direct_actions(&acl, &user);
        assert_eq!(actions, ActionSet::all());
    }

    #[test]
    fn direct_actions_sees_authenticated_sentinel() {
        let mut acl = AclMap::new();
        acl.insert(
            AUTHENTICATED.to_string(),
            Ace::allow(AUTHENTICATED, AccessLevel::Read.mask()),
        );
        let user = User::member("kira", vec![]);
        assert!(direct_actions(&acl, &user).contains(Action::Read));
    }

    #[test]
    fn direct_actions_skips_undecodable_masks() {
        let mut acl = AclMap::new();
        acl.insert("g1".to_string(), Ace::allow("weird", 0x40));
        let user = User::member("kira", vec!["g1".to_string()]);
        assert!(direct_actions(&acl, &user).is_empty());
    }

    #[test]
    fn direct_actions_ignores_unrelated_groups() {
        let mut acl = AclMap::new();
        acl.insert(
            "g9".to_string(),
            Ace::allow("others", AccessLevel::ReadWrite.mask()),
        );
        let user = User::member("kira", vec!["g1".to_string()]);
        assert!(direct_actions(&acl, &user).is_empty());
    }
}
