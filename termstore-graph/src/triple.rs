//! Triples and quads: fixed-arity tuples of term handles.

use termstore_core::{Iri, Node, NodeStorage};

/// An RDF triple.
///
/// The predicate position should be an IRI; this is the writer's contract,
/// not enforced here (patterns reuse the same positions with variables).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    /// Create a triple from its components.
    pub fn new(subject: impl Into<Node>, predicate: impl Into<Node>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Extend into a quad in the given named graph.
    pub fn in_graph(self, graph: impl Into<Node>) -> Quad {
        Quad {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
            graph: graph.into(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// An RDF quad: a triple plus a graph name.
///
/// The default graph is named by the reserved empty IRI.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Quad {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
    pub graph: Node,
}

impl Quad {
    /// Create a quad from its components.
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
        graph: impl Into<Node>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// Create a quad in the default graph.
    pub fn new_default_graph(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
        storage: &NodeStorage,
    ) -> Self {
        Self::new(subject, predicate, object, default_graph(storage))
    }

    /// The triple part of this quad.
    pub fn triple(&self) -> Triple {
        Triple {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }

    /// Whether this quad lives in the default graph.
    pub fn is_default_graph(&self) -> bool {
        self.graph
            .as_iri()
            .is_some_and(|iri| iri.as_str().is_empty())
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_default_graph() {
            write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
        } else {
            write!(
                f,
                "{} {} {} {} .",
                self.subject, self.predicate, self.object, self.graph
            )
        }
    }
}

/// The default graph name: the reserved empty IRI.
pub(crate) fn default_graph(storage: &NodeStorage) -> Node {
    Node::from(Iri::new(termstore_vocab::DEFAULT_GRAPH, storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use termstore_core::{Iri, Literal};

    #[test]
    fn test_triple_display() {
        let storage = NodeStorage::new_sync();
        let triple = Triple::new(
            Iri::new("http://example.org/alice", &storage),
            Iri::new("http://xmlns.com/foaf/0.1/name", &storage),
            Literal::new_simple("Alice", &storage),
        );
        assert_eq!(
            triple.to_string(),
            "<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" ."
        );
    }

    #[test]
    fn test_default_graph_quad() {
        let storage = NodeStorage::new_sync();
        let quad = Quad::new_default_graph(
            Iri::new("http://example.org/s", &storage),
            Iri::new("http://example.org/p", &storage),
            Iri::new("http://example.org/o", &storage),
            &storage,
        );
        assert!(quad.is_default_graph());

        let named = quad
            .triple()
            .in_graph(Iri::new("http://example.org/g", &storage));
        assert!(!named.is_default_graph());
    }

    #[test]
    fn test_quads_compare_by_term_content() {
        let storage = NodeStorage::new_sync();
        let s = Iri::new("http://example.org/s", &storage);
        let p = Iri::new("http://example.org/p", &storage);
        let a = Quad::new_default_graph(
            s.clone(),
            p.clone(),
            Literal::new_simple("a", &storage),
            &storage,
        );
        let b = Quad::new_default_graph(s, p, Literal::new_simple("b", &storage), &storage);
        assert_ne!(a, b);
        assert!(a < b);
    }
}
