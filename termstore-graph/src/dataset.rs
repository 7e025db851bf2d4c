//! A dataset: a default graph plus named graphs, with a quad-level API.

use crate::graph::Graph;
use crate::pattern::{QuadPattern, Solution};
use crate::triple::{default_graph, Quad, Triple};
use std::collections::BTreeMap;
use termstore_core::{Node, NodeStorage};

/// An RDF dataset: one default graph and any number of named graphs.
///
/// Quads route to the graph named by their graph position; the reserved
/// empty IRI names the default graph.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    default: Graph,
    named: BTreeMap<Node, Graph>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quad into the graph it names. Returns whether the dataset
    /// changed.
    pub fn insert(&mut self, quad: Quad) -> bool {
        let triple = quad.triple();
        if quad.is_default_graph() {
            self.default.insert(triple)
        } else {
            self.named.entry(quad.graph).or_default().insert(triple)
        }
    }

    /// Remove a quad. Returns whether it was present. Emptied named graphs
    /// are dropped.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        let triple = quad.triple();
        if quad.is_default_graph() {
            return self.default.remove(&triple);
        }
        let Some(graph) = self.named.get_mut(&quad.graph) else {
            return false;
        };
        let removed = graph.remove(&triple);
        if removed && graph.is_empty() {
            self.named.remove(&quad.graph);
        }
        removed
    }

    /// Whether the dataset contains the quad.
    pub fn contains(&self, quad: &Quad) -> bool {
        let triple = quad.triple();
        if quad.is_default_graph() {
            self.default.contains(&triple)
        } else {
            self.named
                .get(&quad.graph)
                .is_some_and(|graph| graph.contains(&triple))
        }
    }

    /// The default graph.
    pub fn default_graph(&self) -> &Graph {
        &self.default
    }

    /// Mutable access to the default graph.
    pub fn default_graph_mut(&mut self) -> &mut Graph {
        &mut self.default
    }

    /// The named graph for `name`, if present.
    pub fn graph(&self, name: &Node) -> Option<&Graph> {
        self.named.get(name)
    }

    /// Iterate named graphs in name order.
    pub fn graphs(&self) -> impl Iterator<Item = (&Node, &Graph)> {
        self.named.iter()
    }

    /// Total number of quads.
    pub fn len(&self) -> usize {
        self.default.len() + self.named.values().map(Graph::len).sum::<usize>()
    }

    /// True if the dataset holds no quads.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all quads; `storage` supplies the default-graph name node.
    pub fn quads<'a>(&'a self, storage: &NodeStorage) -> impl Iterator<Item = Quad> + 'a {
        let default_name = default_graph(storage);
        let default = self
            .default
            .iter()
            .cloned()
            .map(move |triple| attach(triple, default_name.clone()));
        let named = self.named.iter().flat_map(|(name, graph)| {
            graph
                .iter()
                .cloned()
                .map(move |triple| attach(triple, name.clone()))
        });
        default.chain(named)
    }

    /// All solutions of `pattern` over the dataset, graph position
    /// included. A variable in graph position ranges over the default graph
    /// too (binding the empty IRI).
    pub fn match_pattern(&self, pattern: &QuadPattern, storage: &NodeStorage) -> Vec<Solution> {
        self.quads(storage)
            .filter_map(|quad| pattern.bindings(&quad))
            .collect()
    }
}

fn attach(triple: Triple, graph: Node) -> Quad {
    Quad {
        subject: triple.subject,
        predicate: triple.predicate,
        object: triple.object,
        graph,
    }
}
