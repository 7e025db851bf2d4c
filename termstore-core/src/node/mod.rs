//! User-facing term handles.
//!
//! A handle is a [`TermId`] plus a [`NodeStorage`] reference; all payload
//! access resolves lazily through the storage. Equality and ordering
//! between handles of the same storage are cheap id comparisons; handles
//! from different storages compare by resolved content (never by raw id),
//! and can be moved across storages with the explicit `to_storage`
//! re-interning methods.

mod bnode;
mod iri;
mod literal;
mod variable;

pub use bnode::BlankNode;
pub use iri::Iri;
pub use literal::Literal;
pub use variable::Variable;

use crate::ident::{NodeKind, TermId};
use crate::storage::NodeStorage;
use std::cmp::Ordering;

/// Content identity of a term, independent of which storage interned it.
/// Used for cross-storage equality and for SPARQL-order comparison.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub(crate) enum TermContent {
    Blank {
        label: String,
        scope: Option<crate::scope::WeakNodeScope>,
    },
    Iri(String),
    Literal {
        datatype_iri: String,
        lexical: String,
        language: Option<String>,
    },
    Variable {
        name: String,
        anonymous: bool,
    },
}

pub(crate) fn term_content(id: TermId, storage: &NodeStorage) -> TermContent {
    match id.kind() {
        NodeKind::Blank => {
            let data = storage.bnode_data(id);
            TermContent::Blank {
                label: data.label.to_string(),
                scope: data.scope,
            }
        }
        NodeKind::Iri => TermContent::Iri(storage.iri_data(id).iri.to_string()),
        NodeKind::Literal => {
            let literal = Literal::from_parts(id, storage.clone());
            TermContent::Literal {
                datatype_iri: literal.datatype_iri(),
                lexical: literal.lexical_form(),
                language: literal.language_tag(),
            }
        }
        NodeKind::Variable => {
            let data = storage.variable_data(id);
            TermContent::Variable {
                name: data.name.to_string(),
                anonymous: data.anonymous,
            }
        }
    }
}

/// Shared equality: id comparison within one storage, content comparison
/// across storages.
pub(crate) fn term_eq(a: TermId, sa: &NodeStorage, b: TermId, sb: &NodeStorage) -> bool {
    if sa == sb {
        return a == b;
    }
    if a.kind() != b.kind() {
        return false;
    }
    term_content(a, sa) == term_content(b, sb)
}

/// Shared ordering: SPARQL node-kind order first
/// (`Blank < Iri < Literal < Variable`), then kind-specific content order.
pub(crate) fn term_cmp(a: TermId, sa: &NodeStorage, b: TermId, sb: &NodeStorage) -> Ordering {
    if sa == sb && a == b {
        return Ordering::Equal;
    }
    a.kind()
        .cmp(&b.kind())
        .then_with(|| term_content(a, sa).cmp(&term_content(b, sb)))
}

/// A term of any kind: the unifying handle over [`Iri`], [`BlankNode`],
/// [`Literal`], and [`Variable`].
#[derive(Clone)]
pub struct Node {
    id: TermId,
    storage: NodeStorage,
}

impl Node {
    pub(crate) fn from_parts(id: TermId, storage: NodeStorage) -> Self {
        Self { id, storage }
    }

    /// The packed term id.
    pub fn id(&self) -> TermId {
        self.id
    }

    /// The storage this handle resolves through.
    pub fn storage(&self) -> &NodeStorage {
        &self.storage
    }

    /// The term kind.
    pub fn kind(&self) -> NodeKind {
        self.id.kind()
    }

    pub fn is_iri(&self) -> bool {
        self.id.is_iri()
    }

    pub fn is_blank(&self) -> bool {
        self.id.is_blank()
    }

    pub fn is_literal(&self) -> bool {
        self.id.is_literal()
    }

    pub fn is_variable(&self) -> bool {
        self.id.is_variable()
    }

    /// Downcast to an IRI handle.
    pub fn as_iri(&self) -> Option<Iri> {
        self.is_iri()
            .then(|| Iri::from_parts(self.id, self.storage.clone()))
    }

    /// Downcast to a blank node handle.
    pub fn as_blank(&self) -> Option<BlankNode> {
        self.is_blank()
            .then(|| BlankNode::from_parts(self.id, self.storage.clone()))
    }

    /// Downcast to a literal handle.
    pub fn as_literal(&self) -> Option<Literal> {
        self.is_literal()
            .then(|| Literal::from_parts(self.id, self.storage.clone()))
    }

    /// Downcast to a variable handle.
    pub fn as_variable(&self) -> Option<Variable> {
        self.is_variable()
            .then(|| Variable::from_parts(self.id, self.storage.clone()))
    }

    /// The packed id, checked against an expected storage.
    ///
    /// For consumers that strip handles down to raw ids (indexes, quad
    /// stores): fails with [`Error::StorageMismatch`] instead of handing out
    /// an id that would be silently compared against ids of another
    /// backend. Re-intern with [`to_storage`](Self::to_storage) first.
    pub fn id_in(&self, storage: &NodeStorage) -> crate::error::Result<TermId> {
        if &self.storage == storage {
            Ok(self.id)
        } else {
            Err(crate::error::Error::StorageMismatch(
                self.id.storage_id().as_u16(),
                storage.id().as_u16(),
            ))
        }
    }

    /// Re-intern this term into another storage.
    ///
    /// The only sanctioned way to combine terms from different storages:
    /// identifiers are never copied across backend boundaries.
    pub fn to_storage(&self, target: &NodeStorage) -> Node {
        if &self.storage == target {
            return self.clone();
        }
        match self.kind() {
            NodeKind::Iri => Node::from(
                Iri::from_parts(self.id, self.storage.clone()).to_storage(target),
            ),
            NodeKind::Blank => Node::from(
                BlankNode::from_parts(self.id, self.storage.clone()).to_storage(target),
            ),
            NodeKind::Literal => Node::from(
                Literal::from_parts(self.id, self.storage.clone()).to_storage(target),
            ),
            NodeKind::Variable => Node::from(
                Variable::from_parts(self.id, self.storage.clone()).to_storage(target),
            ),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        term_eq(self.id, &self.storage, other.id, &other.storage)
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        term_cmp(self.id, &self.storage, other.id, &other.storage)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Display;
        match self.kind() {
            NodeKind::Iri => Iri::from_parts(self.id, self.storage.clone()).fmt(f),
            NodeKind::Blank => BlankNode::from_parts(self.id, self.storage.clone()).fmt(f),
            NodeKind::Literal => Literal::from_parts(self.id, self.storage.clone()).fmt(f),
            NodeKind::Variable => Variable::from_parts(self.id, self.storage.clone()).fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        let (id, storage) = iri.into_parts();
        Self { id, storage }
    }
}

impl From<BlankNode> for Node {
    fn from(bnode: BlankNode) -> Self {
        let (id, storage) = bnode.into_parts();
        Self { id, storage }
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        let (id, storage) = literal.into_parts();
        Self { id, storage }
    }
}

impl From<Variable> for Node {
    fn from(variable: Variable) -> Self {
        let (id, storage) = variable.into_parts();
        Self { id, storage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NodeStorage;

    #[test]
    fn test_sparql_node_kind_order() {
        let storage = NodeStorage::new_sync();
        let blank = Node::from(BlankNode::new("b", &storage));
        let iri = Node::from(Iri::new("http://x", &storage));
        let literal = Node::from(Literal::new_simple("s", &storage));
        let variable = Node::from(Variable::new("v", &storage));

        assert!(blank < iri);
        assert!(iri < literal);
        assert!(literal < variable);
    }

    #[test]
    fn test_order_holds_across_storages() {
        let s1 = NodeStorage::new_sync();
        let s2 = NodeStorage::new_sync();
        let blank = Node::from(BlankNode::new("b", &s1));
        let iri = Node::from(Iri::new("http://x", &s2));
        assert!(blank < iri);
    }

    #[test]
    fn test_cross_storage_equality_by_content() {
        let s1 = NodeStorage::new_sync();
        let s2 = NodeStorage::new_sync();
        let a = Node::from(Iri::new("http://example.org/x", &s1));
        let b = Node::from(Iri::new("http://example.org/x", &s2));
        assert_ne!(a.id(), b.id(), "different storages stamp different ids");
        assert_eq!(a, b, "content equality reconciles storages");
    }

    #[test]
    fn test_downcasts() {
        let storage = NodeStorage::new_sync();
        let node = Node::from(Iri::new("http://x", &storage));
        assert!(node.as_iri().is_some());
        assert!(node.as_literal().is_none());
        assert!(node.as_blank().is_none());
        assert!(node.as_variable().is_none());
    }

    #[test]
    fn test_id_in_guards_against_foreign_storage() {
        let s1 = NodeStorage::new_sync();
        let s2 = NodeStorage::new_sync();
        let node = Node::from(Iri::new("http://example.org/x", &s1));

        assert_eq!(node.id_in(&s1).unwrap(), node.id());
        assert!(matches!(
            node.id_in(&s2),
            Err(crate::error::Error::StorageMismatch(_, _))
        ));
        // reconcile explicitly, then the id is usable
        assert!(node.to_storage(&s2).id_in(&s2).is_ok());
    }

    #[test]
    fn test_to_storage_reinterns() {
        let s1 = NodeStorage::new_sync();
        let s2 = NodeStorage::new_sync();
        let node = Node::from(Iri::new("http://example.org/x", &s1));
        let moved = node.to_storage(&s2);
        assert_eq!(moved.storage(), &s2);
        assert_eq!(node, moved);
        assert_ne!(node.id().storage_id(), moved.id().storage_id());
    }
}
