//! ACL construction with identifier resolution.
//!
//! ACLs are replace-on-write: the caller-supplied input is the complete
//! new ACL, and any identifier absent from it loses all access. Raw
//! identifiers resolve through a [`GroupDirectory`] to a display name;
//! the literal `AUTHENTICATED@` sentinel passes through. Identifiers that
//! resolve to nothing are excluded from the map but reported back in
//! [`AclBuild::dropped`], so a typo in a group id is visible to callers.

use trellis_types::{Ace, AceType, AclMap, Group, AUTHENTICATED};

use crate::mask::AccessLevel;

/// Group lookup seam consumed by ACL construction.
///
/// Group storage lives outside this workspace; implementations bridge to
/// wherever groups actually live.
pub trait GroupDirectory: Send + Sync {
    /// Look up a group by display name.
    fn find(&self, name: &str) -> Option<Group>;

    /// Look up a group by internal id.
    fn find_by_id(&self, id: &str) -> Option<Group>;
}

/// In-memory directory for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryGroupDirectory {
    groups: Vec<Group>,
}

impl MemoryGroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.groups.push(Group {
            id: id.into(),
            name: name.into(),
            owner: String::new(),
        });
    }
}

impl GroupDirectory for MemoryGroupDirectory {
    fn find(&self, name: &str) -> Option<Group> {
        self.groups.iter().find(|g| g.name == name).cloned()
    }

    fn find_by_id(&self, id: &str) -> Option<Group> {
        self.groups.iter().find(|g| g.id == id).cloned()
    }
}

/// Outcome of an ACL build: the map to store, plus every identifier that
/// could not be resolved and was left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AclBuild {
    pub acl: AclMap,
    pub dropped: Vec<String>,
}

/// An explicit ACE descriptor, the request form used by protocol-level
/// ACL updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AceSpec {
    /// Group display name or the `AUTHENTICATED@` sentinel.
    pub identifier: String,
    pub acetype: AceType,
    pub aceflags: u32,
    pub level: AccessLevel,
}

/// Build a complete ACL from two lists of group ids.
///
/// An id present in both lists gets `read/write`. Ids resolve through
/// `dir` (internal id → display name); unresolvable ids land in
/// `dropped`.
pub fn build_acl(dir: &dyn GroupDirectory, read_ids: &[String], write_ids: &[String]) -> AclBuild {
    let mut levels: Vec<(String, AccessLevel)> = Vec::new();
    for gid in read_ids {
        levels.push((gid.clone(), AccessLevel::Read));
    }
    for gid in write_ids {
        if let Some(entry) = levels.iter_mut().find(|(id, _)| id == gid) {
            entry.1 = AccessLevel::ReadWrite;
        } else {
            levels.push((gid.clone(), AccessLevel::Write));
        }
    }

    let mut build = AclBuild::default();
    for (gid, level) in levels {
        let identifier = if let Some(group) = dir.find_by_id(&gid) {
            group.name
        } else if gid.eq_ignore_ascii_case(AUTHENTICATED) {
            AUTHENTICATED.to_string()
        } else {
            tracing::warn!(identifier = %gid, "dropping unresolvable ACL identifier");
            build.dropped.push(gid);
            continue;
        };
        build
            .acl
            .insert(gid.clone(), Ace::allow(identifier, level.mask()));
    }
    build
}

/// Build a complete ACL from explicit ACE descriptors.
///
/// Identifiers are display names here (the protocol form); the stored map
/// is keyed by the resolved group id.
pub fn build_acl_from_specs(dir: &dyn GroupDirectory, specs: &[AceSpec]) -> AclBuild {
    let mut build = AclBuild::default();
    for spec in specs {
        let (key, identifier) = if let Some(group) = dir.find(&spec.identifier) {
            (group.id, group.name)
        } else if spec.identifier.eq_ignore_ascii_case(AUTHENTICATED) {
            (AUTHENTICATED.to_string(), AUTHENTICATED.to_string())
        } else {
            tracing::warn!(identifier = %spec.identifier, "dropping unresolvable ACL identifier");
            build.dropped.push(spec.identifier.clone());
            continue;
        };
        build.acl.insert(
            key,
            Ace {
                acetype: spec.acetype,
                identifier,
                aceflags: spec.aceflags,
                acemask: spec.level.mask(),
            },
        );
    }
    build
}

/// List which identifiers hold read and write access.
///
/// The inverse of [`build_acl`]: `read/write` entries land in both lists,
/// entries with undecodable masks in neither.
pub fn read_acl(acl: &AclMap) -> (Vec<String>, Vec<String>) {
    let mut read_ids = Vec::new();
    let mut write_ids = Vec::new();
    for (gid, ace) in acl {
        match AccessLevel::from_mask(ace.acemask) {
            Some(AccessLevel::Read) => read_ids.push(gid.clone()),
            Some(AccessLevel::Write) => write_ids.push(gid.clone()),
            Some(AccessLevel::ReadWrite) => {
                read_ids.push(gid.clone());
                write_ids.push(gid.clone());
            }
            // Unknown combination; contributes to neither list.
            None => {}
        }
    }
    (read_ids, write_ids)
}

/// The ACL a fresh root collection starts with: any authenticated
/// principal may read.
pub fn default_acl() -> AclMap {
    let mut acl = AclMap::new();
    acl.insert(
        AUTHENTICATED.to_string(),
        Ace::allow(AUTHENTICATED, AccessLevel::Read.mask()),
    );
    acl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MemoryGroupDirectory {
        let mut dir = MemoryGroupDirectory::new();
        dir.add("g-arch", "archivists");
        dir.add("g-cur", "curators");
        dir
    }

    #[test]
    fn both_lists_means_read_write() {
        let dir = directory();
        let build = build_acl(
            &dir,
            &["g-arch".to_string()],
            &["g-arch".to_string(), "g-cur".to_string()],
        );
        assert!(build.dropped.is_empty());

        let arch = &build.acl["g-arch"];
        assert_eq!(
            AccessLevel::from_mask(arch.acemask),
            Some(AccessLevel::ReadWrite)
        );
        assert_eq!(arch.identifier, "archivists");

        let cur = &build.acl["g-cur"];
        assert_eq!(AccessLevel::from_mask(cur.acemask), Some(AccessLevel::Write));
    }

    #[test]
    fn unresolvable_ids_are_reported_not_stored() {
        let dir = directory();
        let build = build_acl(&dir, &["nope".to_string()], &[]);
        assert!(build.acl.is_empty());
        assert_eq!(build.dropped, vec!["nope".to_string()]);
    }

    #[test]
    fn authenticated_sentinel_passes_through() {
        let dir = directory();
        let build = build_acl(&dir, &["authenticated@".to_string()], &[]);
        assert!(build.dropped.is_empty());
        // Keyed by the id the caller supplied, identifier normalized.
        let ace = &build.acl["authenticated@"];
        assert_eq!(ace.identifier, AUTHENTICATED);
    }

    #[test]
    fn specs_resolve_names_to_ids() {
        let dir = directory();
        let build = build_acl_from_specs(
            &dir,
            &[AceSpec {
                identifier: "archivists".to_string(),
                acetype: AceType::Allow,
                aceflags: 0,
                level: AccessLevel::Read,
            }],
        );
        assert!(build.dropped.is_empty());
        let ace = &build.acl["g-arch"];
        assert_eq!(ace.identifier, "archivists");
        assert_eq!(AccessLevel::from_mask(ace.acemask), Some(AccessLevel::Read));
    }

    #[test]
    fn specs_report_unknown_names() {
        let dir = directory();
        let build = build_acl_from_specs(
            &dir,
            &[AceSpec {
                identifier: "ghosts".to_string(),
                acetype: AceType::Allow,
                aceflags: 0,
                level: AccessLevel::Write,
            }],
        );
        assert!(build.acl.is_empty());
        assert_eq!(build.dropped, vec!["ghosts".to_string()]);
    }

    #[test]
    fn read_acl_inverts_build() {
        let dir = directory();
        let build = build_acl(
            &dir,
            &["g-arch".to_string()],
            &["g-arch".to_string(), "g-cur".to_string()],
        );
        let (read_ids, write_ids) = read_acl(&build.acl);
        assert_eq!(read_ids, vec!["g-arch".to_string()]);
        assert_eq!(write_ids, vec!["g-arch".to_string(), "g-cur".to_string()]);
    }

    #[test]
    fn read_acl_skips_unknown_masks() {
        let mut acl = AclMap::new();
        acl.insert("g1".to_string(), Ace::allow("weird", 0x80));
        let (read_ids, write_ids) = read_acl(&acl);
        assert!(read_ids.is_empty());
        assert!(write_ids.is_empty());
    }

    #[test]
    fn default_acl_grants_authenticated_read() {
        let acl = default_acl();
        let ace = &acl[AUTHENTICATED];
        assert_eq!(AccessLevel::from_mask(ace.acemask), Some(AccessLevel::Read));
    }

    #[test]
    fn replace_semantics_absent_identifier_has_no_access() {
        let dir = directory();
        let build = build_acl(&dir, &["g-arch".to_string()], &[]);
        assert!(!build.acl.contains_key("g-cur"));
    }
}
