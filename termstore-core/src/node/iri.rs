//! IRI handles.

use super::{term_cmp, term_eq};
use crate::ident::{tag_to_iri_id, LiteralTag, NodeKind, TermId};
use crate::storage::NodeStorage;
use std::cmp::Ordering;
use std::sync::Arc;

/// An interned IRI.
#[derive(Clone)]
pub struct Iri {
    id: TermId,
    storage: NodeStorage,
}

impl Iri {
    /// Intern `iri` in the given storage.
    pub fn new(iri: &str, storage: &NodeStorage) -> Self {
        Self {
            id: storage.intern_iri(iri),
            storage: storage.clone(),
        }
    }

    /// The IRI of a fixed datatype tag. Resolves to a reserved id without a
    /// table lookup.
    pub fn from_datatype_tag(tag: LiteralTag, storage: &NodeStorage) -> Self {
        debug_assert!(tag.is_fixed());
        Self {
            id: TermId::new(tag_to_iri_id(tag), NodeKind::Iri, storage.id(), false),
            storage: storage.clone(),
        }
    }

    pub(crate) fn from_parts(id: TermId, storage: NodeStorage) -> Self {
        debug_assert!(id.is_iri());
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

    /// The IRI string.
    pub fn as_str(&self) -> Arc<str> {
        self.storage.iri_data(self.id).iri
    }

    /// Re-intern into another storage.
    pub fn to_storage(&self, target: &NodeStorage) -> Iri {
        if &self.storage == target {
            return self.clone();
        }
        Iri::new(&self.as_str(), target)
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        term_eq(self.id, &self.storage, other.id, &other.storage)
    }
}

impl Eq for Iri {}

impl PartialOrd for Iri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> Ordering {
        term_cmp(self.id, &self.storage, other.id, &other.storage)
    }
}

impl std::fmt::Debug for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iri({})", self.as_str())
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::tags;

    #[test]
    fn test_interning_is_idempotent() {
        let storage = NodeStorage::new_sync();
        let a = Iri::new("http://example.org/x", &storage);
        let b = Iri::new("http://example.org/x", &storage);
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.as_str().as_ref(), "http://example.org/x");
    }

    #[test]
    fn test_from_datatype_tag_matches_interned_iri() {
        let storage = NodeStorage::new_sync();
        let fast = Iri::from_datatype_tag(tags::BOOLEAN, &storage);
        let interned = Iri::new(termstore_vocab::xsd::BOOLEAN, &storage);
        assert_eq!(fast.id(), interned.id());
        assert_eq!(fast.as_str().as_ref(), termstore_vocab::xsd::BOOLEAN);
    }

    #[test]
    fn test_display() {
        let storage = NodeStorage::new_sync();
        let iri = Iri::new("http://example.org/x", &storage);
        assert_eq!(iri.to_string(), "<http://example.org/x>");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let storage = NodeStorage::new_sync();
        // interning order deliberately reversed
        let b = Iri::new("http://b.org", &storage);
        let a = Iri::new("http://a.org", &storage);
        assert!(a < b);
    }
}
