//! Triple/quad patterns and solutions.
//!
//! A pattern is a tuple of term handles where any position may hold a
//! [`Variable`]. Matching compares bound positions by handle equality (an
//! id comparison within one storage) and captures variable positions into a
//! [`Solution`]; the same variable appearing at several positions must bind
//! to the same term.

use crate::triple::{Quad, Triple};
use termstore_core::{Node, Variable};
use std::sync::Arc;

/// One match: bindings from variable names to terms, in pattern position
/// order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Solution {
    bindings: Vec<(Arc<str>, Node)>,
}

impl Solution {
    /// The term bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.bindings
            .iter()
            .find(|(var, _)| var.as_ref() == name)
            .map(|(_, node)| node)
    }

    /// Number of distinct bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if the pattern had no variables.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in pattern position order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.bindings.iter().map(|(var, node)| (var.as_ref(), node))
    }

    /// Bind a position: variables capture (consistently), bound terms must
    /// match. Returns false on mismatch.
    fn accept(&mut self, pattern: &Node, term: &Node) -> bool {
        match pattern.as_variable() {
            Some(var) => {
                let name = var.name();
                match self.get(&name) {
                    Some(bound) => bound == term,
                    None => {
                        self.bindings.push((name, term.clone()));
                        true
                    }
                }
            }
            None => pattern == term,
        }
    }
}

/// A triple pattern: subject/predicate/object, each possibly a variable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TriplePattern {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl TriplePattern {
    /// Create a pattern from its components.
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Whether this pattern matches the triple.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.bindings(triple).is_some()
    }

    /// Match and capture variable bindings. `None` on mismatch.
    pub fn bindings(&self, triple: &Triple) -> Option<Solution> {
        let mut solution = Solution::default();
        (solution.accept(&self.subject, &triple.subject)
            && solution.accept(&self.predicate, &triple.predicate)
            && solution.accept(&self.object, &triple.object))
        .then_some(solution)
    }

    /// Extend into a quad pattern for the given graph position.
    pub fn in_graph(self, graph: impl Into<Node>) -> QuadPattern {
        QuadPattern {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
            graph: graph.into(),
        }
    }

    /// A pattern with fresh variables in all three positions.
    pub fn wildcard(storage: &termstore_core::NodeStorage) -> Self {
        Self {
            subject: Variable::new("s", storage).into(),
            predicate: Variable::new("p", storage).into(),
            object: Variable::new("o", storage).into(),
        }
    }
}

/// A quad pattern: a triple pattern plus a graph position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct QuadPattern {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
    pub graph: Node,
}

impl QuadPattern {
    /// Create a pattern from its components.
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

    /// Whether this pattern matches the quad.
    pub fn matches(&self, quad: &Quad) -> bool {
        self.bindings(quad).is_some()
    }

    /// Match and capture variable bindings. `None` on mismatch.
    pub fn bindings(&self, quad: &Quad) -> Option<Solution> {
        let mut solution = Solution::default();
        (solution.accept(&self.graph, &quad.graph)
            && solution.accept(&self.subject, &quad.subject)
            && solution.accept(&self.predicate, &quad.predicate)
            && solution.accept(&self.object, &quad.object))
        .then_some(solution)
    }
}
