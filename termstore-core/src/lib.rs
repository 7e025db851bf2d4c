//! # termstore-core
//!
//! Interning node storage engine for RDF terms.
//!
//! This crate provides:
//! - Bit-packed term identifiers (`TermId`, `NodeId`, `LiteralTag`) that
//!   encode term kind, owning storage instance, and — for small literal
//!   values — the value itself
//! - A typed literal system: 30+ XSD/OWL datatypes with capability traits
//!   (parsing, canonical serialization, EBV, comparison, checked numeric
//!   ops, inlining, subtype casts) and a runtime registry
//! - Pluggable storage backends (`NodeStorageBackend`) with a thread-safe
//!   reference implementation (`SyncNodeStorage`)
//! - Value-semantics term handles (`Node`, `Iri`, `BlankNode`, `Literal`,
//!   `Variable`) that resolve lazily through their storage
//! - Blank node scoping with generation-checked weak references
//! - Open and closed namespace helpers
//!
//! ## Design principles
//!
//! 1. **Explicit storage passing**: every constructor takes a
//!    `&NodeStorage`; the process-wide default instance is a convenience
//!    for top-level callers only.
//! 2. **Cheap comparisons**: same-storage handles compare by id bits;
//!    inlined literals decode without any storage access.
//! 3. **Typed results for expected failures**: subtype casts, numeric
//!    errors, and dead-scope upgrades return dedicated error enums, not the
//!    crate-wide error.
//!
//! ## Example
//!
//! ```
//! use termstore_core::{Literal, NodeStorage};
//! use termstore_core::datatypes::Boolean;
//!
//! let storage = NodeStorage::new_sync();
//! let lit = Literal::new("1", termstore_vocab::xsd::BOOLEAN, &storage)?;
//! assert_eq!(lit.lexical_form(), "true");
//! assert_eq!(lit.value::<Boolean>()?, true);
//! # Ok::<(), termstore_core::Error>(())
//! ```

pub mod datatypes;
pub mod error;
pub mod ident;
pub mod namespaces;
pub mod node;
pub mod scope;
pub mod storage;
pub mod view;

// Re-export main types
pub use error::{CastError, Error, NumericError, ParseError, Result, ScopeError};
pub use ident::{LiteralId, LiteralTag, NodeId, NodeKind, StorageId, TermId};
pub use node::{BlankNode, Iri, Literal, Node, Variable};
pub use scope::{NodeScope, WeakNodeScope};
pub use storage::{NodeStorage, NodeStorageBackend, SyncNodeStorage};
pub use view::{
    BNodeData, BNodeView, IriData, IriView, LiteralData, LiteralView, VariableData, VariableView,
};
