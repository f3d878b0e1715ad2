//! The tree namespace engine.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use trellis_acl::{build_acl, build_acl_from_specs, default_acl, AceSpec, GroupDirectory};
use trellis_object::ObjectEngine;
use trellis_store::{StaticField, TreeEntryRow, TreeStore, SELF_RECORD};
use trellis_types::{encode_metadata, MetaValue, NodeId, ObjectId};

use crate::collection::Collection;
use crate::error::{TreeError, TreeResult};
use crate::path;

/// What a [`TreeEngine::repair`] pass fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// The parent's child record was missing and has been recreated.
    pub recreated_child: bool,
    /// Paths of dangling child records that referenced no self record.
    pub removed_dangling: Vec<String>,
}

impl RepairReport {
    /// `true` when the pass found nothing to fix.
    pub fn is_clean(&self) -> bool {
        !self.recreated_child && self.removed_dangling.is_empty()
    }
}

/// Creates, finds, lists, and deletes collections, and resolves
/// permissions over them.
///
/// Creating a collection is two independent single-partition writes (the
/// self record, then the parent's child record). A crash between them
/// leaves a half-paired collection; [`repair`] is the idempotent
/// reconciliation pass that restores the invariant. Concurrent creates
/// for the same path can both pass the existence checks — last write
/// wins on the conflicting rows, which the backing store cannot prevent
/// without a consensus primitive it does not have.
///
/// [`repair`]: TreeEngine::repair
#[derive(Clone)]
pub struct TreeEngine {
    store: Arc<dyn TreeStore>,
    objects: ObjectEngine,
}

impl std::fmt::Debug for TreeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeEngine").finish_non_exhaustive()
    }
}

impl TreeEngine {
    pub fn new(store: Arc<dyn TreeStore>, objects: ObjectEngine) -> Self {
        Self { store, objects }
    }

    /// The object engine contents flow through.
    pub fn objects(&self) -> &ObjectEngine {
        &self.objects
    }

    /// Create the root collection with the default ACL.
    ///
    /// The root has a self record at `("/", ".")` and no child record
    /// anywhere — it is the one parentless collection.
    pub fn create_root(&self) -> TreeResult<Collection> {
        if self.store.get(path::ROOT, SELF_RECORD)?.is_some() {
            return Err(TreeError::RootExists);
        }
        let mut row = TreeEntryRow::self_record(path::ROOT, NodeId::new(), Utc::now());
        row.container_acl = default_acl();
        self.store.put(&row)?;
        info!("root collection created");
        Ok(Collection::from_row(row).expect("self record projects"))
    }

    /// Find a collection by exact path.
    pub fn find(&self, target: &str) -> TreeResult<Option<Collection>> {
        let target = path::normalize(target);
        Ok(self
            .store
            .get(&target, SELF_RECORD)?
            .and_then(Collection::from_row))
    }

    /// Create a collection under `container`.
    ///
    /// Checks run in order: the parent must exist
    /// ([`TreeError::NoSuchCollection`]), the name must not be held by an
    /// object ([`TreeError::ResourceConflict`]) nor by a collection
    /// ([`TreeError::CollectionConflict`]). The self record and the
    /// parent's child record are then written independently, sharing one
    /// generated id.
    pub fn create_collection(
        &self,
        container: &str,
        name: &str,
        metadata: BTreeMap<String, MetaValue>,
    ) -> TreeResult<Collection> {
        let container = path::normalize(container);
        let name = valid_name(name)?;
        if self.find(&container)?.is_none() {
            return Err(TreeError::NoSuchCollection(container));
        }
        let target = path::merge(&container, name);
        if self.store.get(&container, name)?.is_some() {
            return Err(TreeError::ResourceConflict(target));
        }
        if self.find(&target)?.is_some() {
            return Err(TreeError::CollectionConflict(target));
        }

        let id = NodeId::new();
        let mut self_row = TreeEntryRow::self_record(&target, id.clone(), Utc::now());
        self_row.container_metadata = encode_metadata(&metadata);
        self.store.put(&self_row)?;
        self.store
            .put(&TreeEntryRow::collection_child(&container, name, &id))?;
        debug!(path = %target, id = %id, "collection created");
        Ok(Collection::from_row(self_row).expect("self record projects"))
    }

    /// Names of the child collections and child objects of `container`,
    /// in name order. A missing collection lists as empty.
    pub fn list_children(&self, container: &str) -> TreeResult<(Vec<String>, Vec<String>)> {
        let container = path::normalize(container);
        let mut collections = Vec::new();
        let mut objects = Vec::new();
        for row in self.store.scan_container(&container)? {
            if row.is_self_record() {
                continue;
            }
            if row.is_collection_child() {
                collections.push(row.name.trim_end_matches('/').to_string());
            } else {
                objects.push(row.name);
            }
        }
        Ok((collections, objects))
    }

    /// Replace a collection's metadata and bump its modified timestamp.
    /// Returns the updated projection, or `None` if the path is missing.
    pub fn update_metadata(
        &self,
        target: &str,
        metadata: BTreeMap<String, MetaValue>,
    ) -> TreeResult<Option<Collection>> {
        let target = path::normalize(target);
        let Some(mut row) = self.store.get(&target, SELF_RECORD)? else {
            return Ok(None);
        };
        row.container_metadata = encode_metadata(&metadata);
        row.container_modified_ts = Some(Utc::now());
        self.store.put(&row)?;
        Ok(Collection::from_row(row))
    }

    /// Delete a collection: its whole partition (self record plus any
    /// child references it held) and the child record in its parent.
    /// Does not recurse; the referenced children become unreachable if
    /// any remain. Returns `false` if the path was already missing.
    pub fn delete_collection(&self, target: &str) -> TreeResult<bool> {
        let target = path::normalize(target);
        let Some(collection) = self.find(&target)? else {
            return Ok(false);
        };
        self.store.delete_container(&target)?;
        if let Some(parent) = &collection.parent {
            self.store
                .delete(parent, &format!("{}/", collection.name))?;
        }
        debug!(path = %target, "collection deleted");
        Ok(true)
    }

    /// Depth-first recursive delete: contained objects, then child
    /// collections, then the collection itself.
    ///
    /// Not atomic — a crash mid-recursion leaves a partially deleted
    /// subtree. Every step tolerates already-missing nodes, so re-issuing
    /// the call finishes the job.
    pub fn delete_recursive(&self, target: &str) -> TreeResult<()> {
        let target = path::normalize(target);
        if self.find(&target)?.is_none() {
            return Ok(());
        }
        let (collections, objects) = self.list_children(&target)?;
        for name in objects {
            if let Some(row) = self.store.get(&target, &name)? {
                if let Some(uuid) = row.id.as_deref().and_then(|id| ObjectId::from_str(id).ok()) {
                    self.objects.delete(&uuid)?;
                }
                self.store.delete(&target, &name)?;
            }
        }
        for name in collections {
            self.delete_recursive(&path::merge(&target, &name))?;
        }
        self.delete_collection(&target)?;
        Ok(())
    }

    /// Reference an existing data object from the tree.
    ///
    /// Writes the object child record and stamps the object's `treepath`
    /// back-pointer. Same conflict checks as [`create_collection`].
    ///
    /// [`create_collection`]: TreeEngine::create_collection
    pub fn attach_object(
        &self,
        container: &str,
        name: &str,
        uuid: &ObjectId,
    ) -> TreeResult<String> {
        let container = path::normalize(container);
        let name = valid_name(name)?;
        if self.find(&container)?.is_none() {
            return Err(TreeError::NoSuchCollection(container));
        }
        let target = path::merge(&container, name);
        if self.store.get(&container, name)?.is_some() {
            return Err(TreeError::ResourceConflict(target));
        }
        if self.store.get(&container, &format!("{name}/"))?.is_some()
            || self.find(&target)?.is_some()
        {
            return Err(TreeError::CollectionConflict(target));
        }
        self.store
            .put(&TreeEntryRow::object_child(&container, name, uuid))?;
        self.objects
            .update(uuid, vec![StaticField::Treepath(target.clone())])?;
        debug!(path = %target, uuid = %uuid, "object attached");
        Ok(target)
    }

    /// Remove an object's child record. The object partition itself is
    /// untouched. Returns `false` if no such reference existed.
    pub fn detach_object(&self, container: &str, name: &str) -> TreeResult<bool> {
        let container = path::normalize(container);
        Ok(self.store.delete(&container, name)?)
    }

    /// The uuid referenced by an object child record, if any.
    pub fn find_object_id(&self, container: &str, name: &str) -> TreeResult<Option<ObjectId>> {
        let container = path::normalize(container);
        let Some(row) = self.store.get(&container, name)? else {
            return Ok(None);
        };
        Ok(row.id.as_deref().and_then(|id| ObjectId::from_str(id).ok()))
    }

    /// Idempotent pairing reconciliation for the collection at `target`.
    ///
    /// Collection creation is two independent writes, so a crash between
    /// them leaves either a self record with no parent reference or a
    /// dangling child record with no self record. This pass detects both
    /// and fixes them: the missing child record is recreated, dangling
    /// child records are removed. Safe to re-run any number of times.
    pub fn repair(&self, target: &str) -> TreeResult<RepairReport> {
        let target = path::normalize(target);
        let mut report = RepairReport::default();

        match self.find(&target)? {
            Some(collection) => {
                if let Some(parent) = &collection.parent {
                    let child_name = format!("{}/", collection.name);
                    if self.store.get(parent, &child_name)?.is_none() {
                        self.store.put(&TreeEntryRow::collection_child(
                            parent,
                            &collection.name,
                            &collection.id,
                        ))?;
                        warn!(path = %target, "recreated missing child record");
                        report.recreated_child = true;
                    }
                }
                for row in self.store.scan_container(&target)? {
                    if !row.is_collection_child() {
                        continue;
                    }
                    let child_path =
                        path::merge(&target, row.name.trim_end_matches('/'));
                    if self.find(&child_path)?.is_none() {
                        self.store.delete(&target, &row.name)?;
                        warn!(path = %child_path, "removed dangling child record");
                        report.removed_dangling.push(child_path);
                    }
                }
            }
            None => {
                // No self record: clear the dangling reference, if any.
                if let Some((parent, name)) = path::split(&target) {
                    if self.store.delete(&parent, &format!("{name}/"))? {
                        warn!(path = %target, "removed dangling child record");
                        report.removed_dangling.push(target);
                    }
                }
            }
        }
        Ok(report)
    }

    /// Install an ACL on a fresh collection. Same replace semantics as
    /// [`update_acl`].
    ///
    /// [`update_acl`]: TreeEngine::update_acl
    pub fn create_acl(
        &self,
        target: &str,
        dir: &dyn GroupDirectory,
        read_ids: &[String],
        write_ids: &[String],
    ) -> TreeResult<Vec<String>> {
        self.update_acl(target, dir, read_ids, write_ids)
    }

    /// Replace a collection's ACL from two lists of group ids. Returns
    /// the identifiers that could not be resolved and were dropped.
    pub fn update_acl(
        &self,
        target: &str,
        dir: &dyn GroupDirectory,
        read_ids: &[String],
        write_ids: &[String],
    ) -> TreeResult<Vec<String>> {
        let build = build_acl(dir, read_ids, write_ids);
        self.replace_acl(target, build.acl)?;
        Ok(build.dropped)
    }

    /// Replace a collection's ACL from explicit ACE descriptors (the
    /// protocol-request form). Returns the dropped identifiers.
    pub fn update_acl_from_specs(
        &self,
        target: &str,
        dir: &dyn GroupDirectory,
        specs: &[AceSpec],
    ) -> TreeResult<Vec<String>> {
        let build = build_acl_from_specs(dir, specs);
        self.replace_acl(target, build.acl)?;
        Ok(build.dropped)
    }

    fn replace_acl(&self, target: &str, acl: trellis_types::AclMap) -> TreeResult<()> {
        let target = path::normalize(target);
        let mut row = self
            .store
            .get(&target, SELF_RECORD)?
            .ok_or_else(|| TreeError::NoSuchCollection(target.clone()))?;
        row.container_acl = acl;
        row.container_modified_ts = Some(Utc::now());
        self.store.put(&row)?;
        Ok(())
    }

    /// The group ids holding read and write access on a collection.
    pub fn read_acl(&self, target: &str) -> TreeResult<(Vec<String>, Vec<String>)> {
        let collection = self
            .find(target)?
            .ok_or_else(|| TreeError::NoSuchCollection(path::normalize(target)))?;
        Ok(trellis_acl::read_acl(&collection.acl))
    }
}

fn valid_name(name: &str) -> TreeResult<&str> {
    let trimmed = name.trim_matches('/');
    if trimmed.is_empty() || trimmed == SELF_RECORD || trimmed.contains('/') {
        return Err(TreeError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_store::{MemoryStore, ObjectStore as _};

    fn engine() -> TreeEngine {
        let store = Arc::new(MemoryStore::new());
        let objects = ObjectEngine::new(store.clone());
        TreeEngine::new(store, objects)
    }

    fn engine_with_store() -> (TreeEngine, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let objects = ObjectEngine::new(store.clone());
        (TreeEngine::new(store.clone(), objects), store)
    }

    // -----------------------------------------------------------------------
    // Root
    // -----------------------------------------------------------------------

    #[test]
    fn create_root_once() {
        let engine = engine();
        let root = engine.create_root().unwrap();
        assert!(root.is_root());
        assert_eq!(root.name, "Home");
        assert_eq!(root.path, "/");
        assert!(!root.acl.is_empty()); // default ACL installed

        assert!(matches!(
            engine.create_root(),
            Err(TreeError::RootExists)
        ));
    }

    // -----------------------------------------------------------------------
    // Create / find
    // -----------------------------------------------------------------------

    #[test]
    fn path_roundtrip() {
        let engine = engine();
        engine.create_root().unwrap();
        engine
            .create_collection("/", "archive", BTreeMap::new())
            .unwrap();
        let created = engine
            .create_collection("/archive", "2015", BTreeMap::new())
            .unwrap();
        assert_eq!(created.path, "/archive/2015");

        let found = engine.find("/archive/2015").unwrap().unwrap();
        assert_eq!(found.path, "/archive/2015");
        assert_eq!(found.parent.as_deref(), Some("/archive"));
        assert_eq!(found.name, "2015");
    }

    #[test]
    fn pairing_invariant_after_create_and_delete() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        let created = engine
            .create_collection("/", "docs", BTreeMap::new())
            .unwrap();

        // Exactly one self record and one child record, sharing the id.
        let self_row = TreeStore::get(&*store, "/docs", ".").unwrap().unwrap();
        let child_row = TreeStore::get(&*store, "/", "docs/").unwrap().unwrap();
        assert_eq!(self_row.container_id, Some(created.id.clone()));
        assert_eq!(child_row.id, Some(created.id.to_string()));

        engine.delete_collection("/docs").unwrap();
        assert!(TreeStore::get(&*store, "/docs", ".").unwrap().is_none());
        assert!(TreeStore::get(&*store, "/", "docs/").unwrap().is_none());
    }

    #[test]
    fn create_requires_parent() {
        let engine = engine();
        engine.create_root().unwrap();
        let err = engine
            .create_collection("/missing", "x", BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, TreeError::NoSuchCollection(p) if p == "/missing"));
    }

    #[test]
    fn duplicate_collection_conflicts() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "x", BTreeMap::new()).unwrap();
        let err = engine
            .create_collection("/", "x", BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, TreeError::CollectionConflict(p) if p == "/x"));
    }

    #[test]
    fn object_name_conflicts_as_resource() {
        let engine = engine();
        engine.create_root().unwrap();
        let identity = engine.objects().create(b"data", false).unwrap();
        engine.attach_object("/", "x", identity.uuid()).unwrap();

        let err = engine
            .create_collection("/", "x", BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, TreeError::ResourceConflict(p) if p == "/x"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let engine = engine();
        engine.create_root().unwrap();
        for bad in ["", ".", "a/b", "//"] {
            assert!(matches!(
                engine.create_collection("/", bad, BTreeMap::new()),
                Err(TreeError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn metadata_is_stored_encoded() {
        let engine = engine();
        engine.create_root().unwrap();
        let mut metadata = BTreeMap::new();
        metadata.insert("title".to_string(), MetaValue::from("survey"));
        let created = engine.create_collection("/", "m", metadata).unwrap();
        assert_eq!(
            created.metadata_value("title"),
            Some(MetaValue::from("survey"))
        );
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    #[test]
    fn list_children_partitions_by_convention() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "sub", BTreeMap::new()).unwrap();
        let identity = engine.objects().create(b"data", false).unwrap();
        engine
            .attach_object("/", "notes.txt", identity.uuid())
            .unwrap();

        let (collections, objects) = engine.list_children("/").unwrap();
        assert_eq!(collections, vec!["sub".to_string()]);
        assert_eq!(objects, vec!["notes.txt".to_string()]);
    }

    #[test]
    fn list_missing_collection_is_empty() {
        let engine = engine();
        let (collections, objects) = engine.list_children("/nowhere").unwrap();
        assert!(collections.is_empty());
        assert!(objects.is_empty());
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[test]
    fn update_metadata_replaces_and_bumps() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "u", BTreeMap::new()).unwrap();

        let mut metadata = BTreeMap::new();
        metadata.insert("k".to_string(), MetaValue::from("v"));
        let updated = engine.update_metadata("/u", metadata).unwrap().unwrap();
        assert_eq!(updated.metadata_value("k"), Some(MetaValue::from("v")));
        assert!(updated.modified_ts >= updated.create_ts);

        assert!(engine
            .update_metadata("/missing", BTreeMap::new())
            .unwrap()
            .is_none());
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_missing_collection_is_false() {
        let engine = engine();
        engine.create_root().unwrap();
        assert!(!engine.delete_collection("/ghost").unwrap());
    }

    #[test]
    fn recursive_delete_clears_subtree_and_objects() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        engine.create_collection("/", "a", BTreeMap::new()).unwrap();
        engine.create_collection("/a", "b", BTreeMap::new()).unwrap();
        let identity = engine.objects().create(b"payload", false).unwrap();
        let uuid = identity.uuid().clone();
        engine.attach_object("/a/b", "blob", &uuid).unwrap();

        engine.delete_recursive("/a").unwrap();

        assert!(engine.find("/a").unwrap().is_none());
        assert!(engine.find("/a/b").unwrap().is_none());
        assert!(store.get_statics(&uuid).unwrap().is_none());
        let (collections, _) = engine.list_children("/").unwrap();
        assert!(collections.is_empty());
    }

    #[test]
    fn recursive_delete_is_reissuable() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "a", BTreeMap::new()).unwrap();
        engine.delete_recursive("/a").unwrap();
        // Second pass over the missing subtree is a no-op.
        engine.delete_recursive("/a").unwrap();
    }

    // -----------------------------------------------------------------------
    // Object references
    // -----------------------------------------------------------------------

    #[test]
    fn attach_stamps_treepath_and_resolves() {
        let engine = engine();
        engine.create_root().unwrap();
        let identity = engine.objects().create(b"data", false).unwrap();
        let target = engine
            .attach_object("/", "report.txt", identity.uuid())
            .unwrap();
        assert_eq!(target, "/report.txt");

        let found = engine.find_object_id("/", "report.txt").unwrap().unwrap();
        assert_eq!(&found, identity.uuid());

        let identity = engine.objects().find(identity.uuid()).unwrap().unwrap();
        assert_eq!(identity.treepath(), Some("/report.txt"));
    }

    #[test]
    fn attach_conflicts_with_collection() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "x", BTreeMap::new()).unwrap();
        let identity = engine.objects().create(b"data", false).unwrap();
        let err = engine.attach_object("/", "x", identity.uuid()).unwrap_err();
        assert!(matches!(err, TreeError::CollectionConflict(_)));
    }

    #[test]
    fn detach_leaves_object_partition() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        let identity = engine.objects().create(b"data", false).unwrap();
        engine.attach_object("/", "r", identity.uuid()).unwrap();

        assert!(engine.detach_object("/", "r").unwrap());
        assert!(!engine.detach_object("/", "r").unwrap());
        assert!(store.get_statics(identity.uuid()).unwrap().is_some());
    }

    // -----------------------------------------------------------------------
    // Repair
    // -----------------------------------------------------------------------

    #[test]
    fn repair_recreates_missing_child_record() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        engine.create_collection("/", "half", BTreeMap::new()).unwrap();
        // Simulate a crash after the self record write.
        TreeStore::delete(&*store, "/", "half/").unwrap();

        let report = engine.repair("/half").unwrap();
        assert!(report.recreated_child);
        assert!(TreeStore::get(&*store, "/", "half/").unwrap().is_some());

        // Second pass finds nothing.
        assert!(engine.repair("/half").unwrap().is_clean());
    }

    #[test]
    fn repair_removes_dangling_child_record() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        engine.create_collection("/", "gone", BTreeMap::new()).unwrap();
        // Simulate a crash during delete: self partition wiped, child left.
        store.delete_container("/gone").unwrap();

        let report = engine.repair("/gone").unwrap();
        assert_eq!(report.removed_dangling, vec!["/gone".to_string()]);
        assert!(TreeStore::get(&*store, "/", "gone/").unwrap().is_none());
        assert!(engine.repair("/gone").unwrap().is_clean());
    }

    #[test]
    fn repair_scans_children_of_intact_collection() {
        let (engine, store) = engine_with_store();
        engine.create_root().unwrap();
        engine.create_collection("/", "ok", BTreeMap::new()).unwrap();
        engine.create_collection("/", "broken", BTreeMap::new()).unwrap();
        store.delete_container("/broken").unwrap();

        let report = engine.repair("/").unwrap();
        assert_eq!(report.removed_dangling, vec!["/broken".to_string()]);
        let (collections, _) = engine.list_children("/").unwrap();
        assert_eq!(collections, vec!["ok".to_string()]);
    }

    // -----------------------------------------------------------------------
    // ACL plumbing
    // -----------------------------------------------------------------------

    #[test]
    fn update_and_read_acl() {
        let engine = engine();
        engine.create_root().unwrap();
        engine.create_collection("/", "secured", BTreeMap::new()).unwrap();

        let mut dir = trellis_acl::MemoryGroupDirectory::new();
        dir.add("g-arch", "archivists");

        let dropped = engine
            .update_acl(
                "/secured",
                &dir,
                &["g-arch".to_string(), "g-typo".to_string()],
                &["g-arch".to_string()],
            )
            .unwrap();
        assert_eq!(dropped, vec!["g-typo".to_string()]);

        let (read_ids, write_ids) = engine.read_acl("/secured").unwrap();
        assert_eq!(read_ids, vec!["g-arch".to_string()]);
        assert_eq!(write_ids, vec!["g-arch".to_string()]);
    }

    #[test]
    fn acl_on_missing_collection_errors() {
        let engine = engine();
        engine.create_root().unwrap();
        let dir = trellis_acl::MemoryGroupDirectory::new();
        assert!(matches!(
            engine.update_acl("/none", &dir, &[], &[]),
            Err(TreeError::NoSuchCollection(_))
        ));
        assert!(matches!(
            engine.read_acl("/none"),
            Err(TreeError::NoSuchCollection(_))
        ));
    }
}
