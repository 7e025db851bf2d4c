//! A single RDF graph: a set of triples.

use crate::pattern::{Solution, TriplePattern};
use crate::triple::Triple;
use std::collections::BTreeSet;

/// A collection of RDF triples with set semantics.
///
/// Triples hold interned handles, so insertion and membership checks are
/// id comparisons when all terms come from one storage. Iteration is in
/// term order (subject, predicate, object).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns whether the graph changed.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Remove a triple. Returns whether it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Whether the graph contains the triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All solutions of `pattern` over this graph.
    pub fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Solution> {
        self.triples
            .iter()
            .filter_map(|triple| pattern.bindings(triple))
            .collect()
    }

    /// Triples matching `pattern`.
    pub fn matching<'a>(
        &'a self,
        pattern: &'a TriplePattern,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(|triple| pattern.matches(triple))
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for triple in &self.triples {
            writeln!(f, "{}", triple)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termstore_core::{Iri, Literal, NodeStorage, Variable};

    fn name_triples(storage: &NodeStorage) -> Vec<Triple> {
        let name = Iri::new("http://xmlns.com/foaf/0.1/name", storage);
        vec![
            Triple::new(
                Iri::new("http://example.org/alice", storage),
                name.clone(),
                Literal::new_simple("Alice", storage),
            ),
            Triple::new(
                Iri::new("http://example.org/bob", storage),
                name.clone(),
                Literal::new_simple("Bob", storage),
            ),
            Triple::new(
                Iri::new("http://example.org/alice", storage),
                Iri::new("http://xmlns.com/foaf/0.1/knows", storage),
                Iri::new("http://example.org/bob", storage),
            ),
        ]
    }

    #[test]
    fn test_set_semantics() {
        let storage = NodeStorage::new_sync();
        let mut graph = Graph::new();
        let triples = name_triples(&storage);

        assert!(graph.insert(triples[0].clone()));
        assert!(!graph.insert(triples[0].clone()), "duplicates collapse");
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&triples[0]));

        assert!(graph.remove(&triples[0]));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_match_pattern_binds_variables() {
        let storage = NodeStorage::new_sync();
        let graph: Graph = name_triples(&storage).into_iter().collect();

        let pattern = TriplePattern::new(
            Variable::new("who", &storage),
            Iri::new("http://xmlns.com/foaf/0.1/name", &storage),
            Variable::new("name", &storage),
        );
        let solutions = graph.match_pattern(&pattern);
        assert_eq!(solutions.len(), 2);

        let names: Vec<String> = solutions
            .iter()
            .map(|s| s.get("name").unwrap().to_string())
            .collect();
        assert!(names.contains(&"\"Alice\"".to_string()));
        assert!(names.contains(&"\"Bob\"".to_string()));
    }

    #[test]
    fn test_fully_bound_pattern_checks_membership() {
        let storage = NodeStorage::new_sync();
        let triples = name_triples(&storage);
        let graph: Graph = triples.clone().into_iter().collect();

        let present = TriplePattern::new(
            triples[2].subject.clone(),
            triples[2].predicate.clone(),
            triples[2].object.clone(),
        );
        assert_eq!(graph.match_pattern(&present).len(), 1);

        let absent = TriplePattern::new(
            triples[2].object.clone(),
            triples[2].predicate.clone(),
            triples[2].subject.clone(),
        );
        assert!(graph.match_pattern(&absent).is_empty());
    }

    #[test]
    fn test_matching_iterator() {
        let storage = NodeStorage::new_sync();
        let graph: Graph = name_triples(&storage).into_iter().collect();
        let wildcard = TriplePattern::wildcard(&storage);
        assert_eq!(graph.matching(&wildcard).count(), 3);
    }
}
