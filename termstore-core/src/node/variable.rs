//! Query variable handles.

use super::{term_cmp, term_eq};
use crate::ident::TermId;
use crate::storage::NodeStorage;
use std::cmp::Ordering;
use std::sync::Arc;

/// An interned query variable.
///
/// In a pattern, a variable marks an unbound position. Anonymous variables
/// come from syntactic blank nodes in query position and never join across
/// patterns by name.
#[derive(Clone)]
pub struct Variable {
    id: TermId,
    storage: NodeStorage,
}

impl Variable {
    /// Intern a named variable.
    pub fn new(name: &str, storage: &NodeStorage) -> Self {
        Self {
            id: storage.intern_variable(name, false),
            storage: storage.clone(),
        }
    }

    /// Intern an anonymous variable.
    pub fn anonymous(name: &str, storage: &NodeStorage) -> Self {
        Self {
            id: storage.intern_variable(name, true),
            storage: storage.clone(),
        }
    }

    pub(crate) fn from_parts(id: TermId, storage: NodeStorage) -> Self {
        debug_assert!(id.is_variable());
        Self { id, storage }
    }

    pub(crate) fn into_parts(self) -> (TermId, NodeStorage) {
        (self.id, self.storage)
    }

    /// The packed term id.
    pub fn id(&self) -> TermId {
        self.id
    }

    /// The storage this handle resolves through.
    pub fn storage(&self) -> &NodeStorage {
        &self.storage
    }

    /// The variable name, without the `?` prefix.
    pub fn name(&self) -> Arc<str> {
        self.storage.variable_data(self.id).name
    }

    /// Whether this is an anonymous variable.
    pub fn is_anonymous(&self) -> bool {
        self.storage.variable_data(self.id).anonymous
    }

    /// Re-intern into another storage.
    pub fn to_storage(&self, target: &NodeStorage) -> Variable {
        if &self.storage == target {
            return self.clone();
        }
        let data = self.storage.variable_data(self.id);
        Variable {
            id: target.intern_variable(&data.name, data.anonymous),
            storage: target.clone(),
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        term_eq(self.id, &self.storage, other.id, &other.storage)
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        term_cmp(self.id, &self.storage, other.id, &other.storage)
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variable(?{})", self.name())
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_anonymous_are_distinct() {
        let storage = NodeStorage::new_sync();
        let named = Variable::new("x", &storage);
        let anon = Variable::anonymous("x", &storage);
        assert_ne!(named, anon);
        assert!(!named.is_anonymous());
        assert!(anon.is_anonymous());
    }

    #[test]
    fn test_interning_dedupes() {
        let storage = NodeStorage::new_sync();
        let a = Variable::new("x", &storage);
        let b = Variable::new("x", &storage);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.to_string(), "?x");
    }
}
