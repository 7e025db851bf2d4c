//! Blank node handles.

use super::{term_cmp, term_eq};
use crate::ident::TermId;
use crate::scope::WeakNodeScope;
use crate::storage::NodeStorage;
use std::cmp::Ordering;
use std::sync::Arc;

/// An interned blank node.
///
/// Identity is the pair (label, scope): equal labels interned through
/// different scopes — or one with and one without a scope — are distinct
/// nodes. Scoped construction goes through
/// [`NodeScope::get_or_generate`](crate::scope::NodeScope::get_or_generate).
#[derive(Clone)]
pub struct BlankNode {
    id: TermId,
    storage: NodeStorage,
}

impl BlankNode {
    /// Intern an unscoped blank node with the given label (no `_:` prefix).
    pub fn new(label: &str, storage: &NodeStorage) -> Self {
        Self {
            id: storage.intern_bnode(label, None),
            storage: storage.clone(),
        }
    }

    pub(crate) fn from_parts(id: TermId, storage: NodeStorage) -> Self {
        debug_assert!(id.is_blank());
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

    /// The label, without the `_:` prefix.
    pub fn label(&self) -> Arc<str> {
        self.storage.bnode_data(self.id).label
    }

    /// The scope this node was interned under, if any.
    pub fn scope(&self) -> Option<WeakNodeScope> {
        self.storage.bnode_data(self.id).scope
    }

    /// Re-intern into another storage (preserving the scope reference).
    pub fn to_storage(&self, target: &NodeStorage) -> BlankNode {
        if &self.storage == target {
            return self.clone();
        }
        let data = self.storage.bnode_data(self.id);
        BlankNode {
            id: target.intern_bnode(&data.label, data.scope),
            storage: target.clone(),
        }
    }
}

impl PartialEq for BlankNode {
    fn eq(&self, other: &Self) -> bool {
        term_eq(self.id, &self.storage, other.id, &other.storage)
    }
}

impl Eq for BlankNode {}

impl PartialOrd for BlankNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlankNode {
    fn cmp(&self, other: &Self) -> Ordering {
        term_cmp(self.id, &self.storage, other.id, &other.storage)
    }
}

impl std::fmt::Debug for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlankNode(_:{})", self.label())
    }
}

impl std::fmt::Display for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_interning_dedupes_by_label() {
        let storage = NodeStorage::new_sync();
        let a = BlankNode::new("b0", &storage);
        let b = BlankNode::new("b0", &storage);
        let c = BlankNode::new("b1", &storage);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.label().as_ref(), "b0");
        assert!(a.scope().is_none());
    }

    #[test]
    fn test_display() {
        let storage = NodeStorage::new_sync();
        assert_eq!(BlankNode::new("b0", &storage).to_string(), "_:b0");
    }
}
