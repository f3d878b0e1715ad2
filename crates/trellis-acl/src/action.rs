//! The effective action vocabulary and a small set type over it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One action a principal may be granted on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
    Delete,
    Edit,
}

impl Action {
    const ALL: [Action; 4] = [Action::Read, Action::Write, Action::Delete, Action::Edit];

    fn bit(self) -> u8 {
        match self {
            Action::Read => 0b0001,
            Action::Write => 0b0010,
            Action::Delete => 0b0100,
            Action::Edit => 0b1000,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Read => write!(f, "read"),
            Action::Write => write!(f, "write"),
            Action::Delete => write!(f, "delete"),
            Action::Edit => write!(f, "edit"),
        }
    }
}

/// A set of [`Action`]s, bit-packed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSet(u8);

impl ActionSet {
    /// The empty set: no access.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every action. What administrators get unconditionally.
    pub fn all() -> Self {
        Self(0b1111)
    }

    pub fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    #[must_use]
    pub fn union(self, other: ActionSet) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained actions in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for action in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{action}")?;
            first = false;
        }
        Ok(())
    }
}
