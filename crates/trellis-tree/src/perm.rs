//! Permission resolution with upward inheritance.
//!
//! A node with an empty ACL defers to its closest ancestor that has one;
//! the root is the terminal fallback. Administrators bypass resolution
//! entirely. Objects without an ACL of their own fall back to the
//! collection their `treepath` points into.

use tracing::warn;
use trellis_acl::{direct_actions, Action, ActionSet};
use trellis_object::ObjectIdentity;
use trellis_types::User;

use crate::collection::Collection;
use crate::engine::TreeEngine;
use crate::error::TreeResult;
use crate::path;

impl TreeEngine {
    /// The actions `user` holds on a collection, after inheritance.
    ///
    /// Walks toward the root until a node with a non-empty ACL decides,
    /// or the root is reached with nothing granted. A broken chain (a
    /// parent path with no self record) resolves to no access.
    pub fn authorized_actions(&self, collection: &Collection, user: &User) -> TreeResult<ActionSet> {
        if user.administrator {
            return Ok(ActionSet::all());
        }
        let mut current = collection.clone();
        loop {
            if !current.acl.is_empty() {
                return Ok(direct_actions(&current.acl, user));
            }
            let Some(parent) = &current.parent else {
                return Ok(ActionSet::empty());
            };
            match self.find(parent)? {
                Some(next) => current = next,
                None => {
                    warn!(path = %current.path, "inheritance chain broken, denying");
                    return Ok(ActionSet::empty());
                }
            }
        }
    }

    /// Single-action check over [`authorized_actions`].
    ///
    /// [`authorized_actions`]: TreeEngine::authorized_actions
    pub fn user_can(&self, collection: &Collection, user: &User, action: Action) -> TreeResult<bool> {
        Ok(self.authorized_actions(collection, user)?.contains(action))
    }

    /// The actions `user` holds on a data object.
    ///
    /// An object's own ACL decides when non-empty. Otherwise the object
    /// inherits from the collection containing its `treepath`; an object
    /// with neither grants nothing (administrators aside).
    pub fn object_actions(&self, identity: &ObjectIdentity, user: &User) -> TreeResult<ActionSet> {
        if user.administrator {
            return Ok(ActionSet::all());
        }
        if !identity.acl().is_empty() {
            return Ok(direct_actions(identity.acl(), user));
        }
        let Some(treepath) = identity.treepath() else {
            return Ok(ActionSet::empty());
        };
        let Some((container, _)) = path::split(treepath) else {
            return Ok(ActionSet::empty());
        };
        match self.find(&container)? {
            Some(collection) => self.authorized_actions(&collection, user),
            None => Ok(ActionSet::empty()),
        }
    }

    /// Single-action check over [`object_actions`].
    ///
    /// [`object_actions`]: TreeEngine::object_actions
    pub fn object_user_can(
        &self,
        identity: &ObjectIdentity,
        user: &User,
        action: Action,
    ) -> TreeResult<bool> {
        Ok(self.object_actions(identity, user)?.contains(action))
    }
}
