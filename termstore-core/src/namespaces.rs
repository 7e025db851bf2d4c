//! Namespace helpers: build IRIs from a prefix and a suffix, with a cache
//! to avoid storage round trips.
//!
//! An open [`Namespace`] accepts any suffix. A [`ClosedNamespace`] is fixed
//! at construction: resolving a suffix outside its vocabulary is an error.
//! Closed namespaces for the core vocabularies ([`rdf`], [`rdfs`], [`xsd`],
//! [`owl`]) are provided with suffix lists from `termstore-vocab`.

use crate::error::{Error, Result};
use crate::ident::TermId;
use crate::node::Iri;
use crate::storage::NodeStorage;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// An open namespace: a prefix plus a suffix → IRI cache.
pub struct Namespace {
    prefix: Arc<str>,
    storage: NodeStorage,
    cache: Mutex<FxHashMap<Box<str>, TermId>>,
}

impl Namespace {
    /// Create a namespace for `prefix` (without angle brackets).
    pub fn new(prefix: &str, storage: &NodeStorage) -> Self {
        Self {
            prefix: Arc::from(prefix),
            storage: storage.clone(),
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// The namespace prefix IRI.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build (and cache) the IRI `prefix + suffix`.
    pub fn resolve(&self, suffix: &str) -> Iri {
        let mut cache = self.cache.lock();
        if let Some(&id) = cache.get(suffix) {
            return Iri::from_parts(id, self.storage.clone());
        }
        let iri = Iri::new(&format!("{}{}", self.prefix, suffix), &self.storage);
        cache.insert(Box::from(suffix), iri.id());
        iri
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

/// A namespace with a fixed vocabulary.
///
/// All member IRIs are interned at construction; [`resolve`](Self::resolve)
/// of an unknown suffix fails instead of extending the namespace.
pub struct ClosedNamespace {
    prefix: Arc<str>,
    storage: NodeStorage,
    members: FxHashMap<Box<str>, TermId>,
}

impl ClosedNamespace {
    /// Create a closed namespace over the given suffixes.
    pub fn new<'a>(
        prefix: &str,
        suffixes: impl IntoIterator<Item = &'a str>,
        storage: &NodeStorage,
    ) -> Self {
        let members = suffixes
            .into_iter()
            .map(|suffix| {
                let iri = Iri::new(&format!("{}{}", prefix, suffix), storage);
                (Box::from(suffix), iri.id())
            })
            .collect();
        Self {
            prefix: Arc::from(prefix),
            storage: storage.clone(),
            members,
        }
    }

    /// The namespace prefix IRI.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolve a suffix to its member IRI.
    ///
    /// Fails with [`Error::UnknownNamespaceTerm`] for suffixes outside the
    /// vocabulary.
    pub fn resolve(&self, suffix: &str) -> Result<Iri> {
        self.members
            .get(suffix)
            .map(|&id| Iri::from_parts(id, self.storage.clone()))
            .ok_or_else(|| Error::unknown_namespace_term(self.prefix.as_ref(), suffix))
    }
}

/// The RDF vocabulary as a closed namespace.
pub fn rdf(storage: &NodeStorage) -> ClosedNamespace {
    ClosedNamespace::new(
        termstore_vocab::rdf::NS,
        termstore_vocab::rdf::SUFFIXES.iter().copied(),
        storage,
    )
}

/// The RDFS vocabulary as a closed namespace.
pub fn rdfs(storage: &NodeStorage) -> ClosedNamespace {
    ClosedNamespace::new(
        termstore_vocab::rdfs::NS,
        termstore_vocab::rdfs::SUFFIXES.iter().copied(),
        storage,
    )
}

/// The XSD datatype vocabulary as a closed namespace.
pub fn xsd(storage: &NodeStorage) -> ClosedNamespace {
    ClosedNamespace::new(
        termstore_vocab::xsd::NS,
        termstore_vocab::xsd::SUFFIXES.iter().copied(),
        storage,
    )
}

/// The OWL vocabulary as a closed namespace.
pub fn owl(storage: &NodeStorage) -> ClosedNamespace {
    ClosedNamespace::new(
        termstore_vocab::owl::NS,
        termstore_vocab::owl::SUFFIXES.iter().copied(),
        storage,
    )
}
