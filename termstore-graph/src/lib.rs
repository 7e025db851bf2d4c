//! Graph and dataset containers over interned term handles.
//!
//! Triples and quads hold [`Node`](termstore_core::Node) handles, so
//! container operations (insert, contains, pattern matching) compare terms
//! by their packed ids — cheap integer comparisons as long as all terms
//! come from one storage.
//!
//! Pattern matching substitutes a [`Variable`](termstore_core::Variable) at
//! any position: bound positions must match exactly, variable positions
//! capture bindings into a [`Solution`]. Repeated variables within one
//! pattern must bind consistently.
//!
//! Graphs use set semantics: handles are interned, so equal triples
//! collapse to one entry.

mod dataset;
mod graph;
mod pattern;
mod triple;

pub use dataset::Dataset;
pub use graph::Graph;
pub use pattern::{QuadPattern, Solution, TriplePattern};
pub use triple::{Quad, Triple};
