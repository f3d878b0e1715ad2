//! The index writer and permission-filtered search.

use std::sync::Arc;

use tracing::debug;
use trellis_acl::Action;
use trellis_object::ObjectIdentity;
use trellis_store::{IndexRow, IndexStore};
use trellis_tree::{Collection, TreeEngine};
use trellis_types::User;

use crate::error::IndexResult;
use crate::token;

/// A node the index can point back to: either side of the namespace.
///
/// Collections are addressed by path (the tree has no id lookup without a
/// full scan), objects by uuid.
#[derive(Clone, Copy, Debug)]
pub enum IndexTarget<'a> {
    Collection(&'a Collection),
    Object(&'a ObjectIdentity),
}

impl IndexTarget<'_> {
    /// The `object_id` column value for rows pointing at this node.
    pub fn object_id(&self) -> String {
        match self {
            Self::Collection(c) => c.path.clone(),
            Self::Object(o) => o.uuid().to_string(),
        }
    }

    /// The `object_type` column value.
    pub fn object_type(&self) -> &'static str {
        match self {
            Self::Collection(_) => "collection",
            Self::Object(_) => "object",
        }
    }

    /// One plain attribute by field name. `metadata` is not an attribute;
    /// the writer expands it per key.
    fn attribute(&self, field: &str) -> Option<String> {
        match self {
            Self::Collection(c) => match field {
                "name" => Some(c.name.clone()),
                "path" => Some(c.path.clone()),
                _ => None,
            },
            Self::Object(o) => match field {
                "mimetype" => o.mimetype().map(str::to_string),
                "type" => Some(o.object_type().to_string()),
                "checksum" => o.checksum().map(str::to_string),
                "treepath" => o.treepath().map(str::to_string),
                _ => None,
            },
        }
    }

    fn metadata_list(&self) -> Vec<(String, String)> {
        match self {
            Self::Collection(c) => c.metadata_list(),
            Self::Object(o) => o.metadata_list(),
        }
    }
}

/// One visible search match.
///
/// A node matching several query terms (or the same term under several
/// term types) is reported once, in first-seen order, rather than once
/// per index row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// Collection path or object uuid.
    pub object_id: String,
    /// `"collection"` or `"object"`.
    pub object_type: String,
    /// Always 1, even when several index rows point at the node. Kept so
    /// callers that aggregate across pages do not need a different shape.
    pub hit_count: usize,
}

/// Best-effort term index over the namespace.
///
/// Never authoritative: rows are written after the node they describe and
/// removed after it is gone, so the search path re-resolves every hit
/// through the tree and drops the ones that no longer exist or that the
/// caller cannot read.
#[derive(Clone)]
pub struct TermIndex {
    store: Arc<dyn IndexStore>,
    tree: TreeEngine,
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex").finish_non_exhaustive()
    }
}

impl TermIndex {
    pub fn new(store: Arc<dyn IndexStore>, tree: TreeEngine) -> Self {
        Self { store, tree }
    }

    /// Index the named fields of a node. Returns the number of rows
    /// written.
    ///
    /// The field `"metadata"` expands to the decoded values (list values
    /// element-wise), split tokens only, under the `metadata` term type.
    /// Any other field tokenizes that attribute under its own name and
    /// also writes the whole value as one term, so exact lookups work for
    /// multi-word attributes. Unset attributes contribute nothing.
    pub fn index(&self, target: IndexTarget<'_>, fields: &[&str]) -> IndexResult<usize> {
        let object_id = target.object_id();
        let object_type = target.object_type();
        let mut written = 0;
        for field in fields {
            if *field == "metadata" {
                for (_, value) in target.metadata_list() {
                    let terms = token::tokenize(&value);
                    written += self.write_terms(&terms, "metadata", &object_id, object_type)?;
                }
            } else if let Some(value) = target.attribute(field) {
                let mut terms = token::tokenize(&value);
                terms.extend(token::whole_term(&value));
                written += self.write_terms(&terms, field, &object_id, object_type)?;
            }
        }
        debug!(object_id = %object_id, rows = written, "indexed");
        Ok(written)
    }

    fn write_terms(
        &self,
        terms: &[String],
        term_type: &str,
        object_id: &str,
        object_type: &str,
    ) -> IndexResult<usize> {
        for term in terms {
            self.store.put(&IndexRow {
                term: term.clone(),
                term_type: term_type.to_string(),
                object_id: object_id.to_string(),
                object_type: object_type.to_string(),
            })?;
        }
        Ok(terms.len())
    }

    /// Exact-term search, filtered to nodes `user` can read.
    ///
    /// Query terms are lowercased; stop words and too-short terms are
    /// skipped outright. Hits keep first-seen order, one per node.
    pub fn find(&self, terms: &[&str], user: &User) -> IndexResult<Vec<SearchHit>> {
        let mut hits: Vec<SearchHit> = Vec::new();
        for term in terms {
            let term = term.trim().to_lowercase();
            if !token::indexable(&term) {
                continue;
            }
            for row in self.store.scan_term(&term)? {
                if hits.iter().any(|h| h.object_id == row.object_id) {
                    continue;
                }
                if self.readable(&row, user)? {
                    hits.push(SearchHit {
                        object_id: row.object_id,
                        object_type: row.object_type,
                        hit_count: 1,
                    });
                }
            }
        }
        Ok(hits)
    }

    /// Resolve one index row back to its node and check read access.
    /// Rows pointing at vanished nodes resolve to not-readable.
    fn readable(&self, row: &IndexRow, user: &User) -> IndexResult<bool> {
        if row.object_type == "collection" {
            match self.tree.find(&row.object_id)? {
                Some(collection) => Ok(self.tree.user_can(&collection, user, Action::Read)?),
                None => Ok(false),
            }
        } else {
            let Ok(uuid) = row.object_id.parse() else {
                return Ok(false);
            };
            match self.tree.objects().find(&uuid)? {
                Some(identity) => Ok(self.tree.object_user_can(&identity, user, Action::Read)?),
                None => Ok(false),
            }
        }
    }

    /// Remove every index row pointing at `object_id`, one by one.
    /// Returns the number removed.
    pub fn reset(&self, object_id: &str) -> IndexResult<usize> {
        let rows = self.store.scan_object(object_id)?;
        let mut removed = 0;
        for row in &rows {
            if self.store.delete(&row.term, &row.term_type, &row.object_id)? {
                removed += 1;
            }
        }
        debug!(object_id = %object_id, rows = removed, "index reset");
        Ok(removed)
    }
}
