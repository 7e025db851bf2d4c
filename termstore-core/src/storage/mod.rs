//! Node storage: pluggable interning backends behind a shared handle.
//!
//! A [`NodeStorageBackend`] owns four interning tables (IRI, blank node,
//! literal, variable) keyed by backend views. [`NodeStorage`] wraps a
//! backend together with a process-unique [`StorageId`] slot and is the type
//! the rest of the system passes around: it stamps the storage id into
//! [`TermId`]s, applies the literal inlining fast path before the backend is
//! ever consulted, and decodes inlined ids without touching the backend.
//!
//! Storage instances are reference counted; the id slot is released when the
//! last handle drops. A process-wide default instance exists as a
//! convenience for top-level callers — library code always takes an explicit
//! `&NodeStorage`.

pub mod bimap;
mod sync_backend;

pub use sync_backend::SyncNodeStorage;

use crate::datatypes::registry::registry;
use crate::ident::{LiteralId, NodeId, NodeKind, StorageId, TermId};
use crate::view::{
    BNodeData, BNodeView, IriData, IriView, LiteralData, LiteralView, VariableData, VariableView,
};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

/// Interning backend over the four term-kind tables.
///
/// `find_or_make_*` must be safe to call concurrently with itself and with
/// lookups, preserving "at most one record per distinct view". `find_*_data`
/// is only defined for ids this backend issued and has not erased; backends
/// panic otherwise. `erase_*` must not race a lookup/insert of the same id
/// without external synchronization (erasing an entry referenced by live
/// handles invalidates those handles — a caller responsibility).
pub trait NodeStorageBackend: Send + Sync + 'static {
    /// Whether this backend keeps a value-keyed table for the given tag.
    fn has_specialized_storage_for(&self, tag: crate::ident::LiteralTag) -> bool;

    fn find_or_make_iri_id(&self, view: IriView<'_>) -> NodeId;
    fn find_or_make_bnode_id(&self, view: BNodeView<'_>) -> NodeId;
    fn find_or_make_variable_id(&self, view: VariableView<'_>) -> NodeId;
    fn find_or_make_literal_id(&self, view: LiteralView<'_>) -> NodeId;

    fn find_iri_id(&self, view: IriView<'_>) -> NodeId;
    fn find_bnode_id(&self, view: BNodeView<'_>) -> NodeId;
    fn find_variable_id(&self, view: VariableView<'_>) -> NodeId;
    fn find_literal_id(&self, view: LiteralView<'_>) -> NodeId;

    fn find_iri_data(&self, id: NodeId) -> IriData;
    fn find_bnode_data(&self, id: NodeId) -> BNodeData;
    fn find_variable_data(&self, id: NodeId) -> VariableData;
    fn find_literal_data(&self, id: NodeId) -> LiteralData;

    fn erase_iri(&self, id: NodeId) -> bool;
    fn erase_bnode(&self, id: NodeId) -> bool;
    fn erase_variable(&self, id: NodeId) -> bool;
    fn erase_literal(&self, id: NodeId) -> bool;

    /// Total number of live records across all tables.
    fn size(&self) -> usize;
}

// ============================================================================
// Storage id slots
// ============================================================================

struct SlotRegistry {
    /// occupancy bitmap over ids 1..=StorageId::MAX
    used: Vec<bool>,
}

fn slot_registry() -> &'static Mutex<SlotRegistry> {
    static SLOTS: OnceLock<Mutex<SlotRegistry>> = OnceLock::new();
    SLOTS.get_or_init(|| {
        Mutex::new(SlotRegistry {
            used: vec![false; StorageId::MAX as usize + 1],
        })
    })
}

fn allocate_slot() -> StorageId {
    let mut registry = slot_registry().lock();
    for id in 1..=StorageId::MAX {
        if !registry.used[id as usize] {
            registry.used[id as usize] = true;
            return StorageId::new(id);
        }
    }
    panic!("storage id space exhausted ({} live instances)", StorageId::MAX);
}

fn release_slot(id: StorageId) {
    let mut registry = slot_registry().lock();
    registry.used[id.as_u16() as usize] = false;
}

// ============================================================================
// NodeStorage
// ============================================================================

struct StorageInner {
    id: StorageId,
    backend: Arc<dyn NodeStorageBackend>,
}

impl Drop for StorageInner {
    fn drop(&mut self) {
        tracing::debug!(id = self.id.as_u16(), "releasing node storage");
        release_slot(self.id);
    }
}

/// Shared handle on a storage backend instance.
///
/// Cheap to clone (an `Arc` bump). Equality is instance identity.
#[derive(Clone)]
pub struct NodeStorage {
    inner: Arc<StorageInner>,
}

impl NodeStorage {
    /// Create a storage backed by the thread-safe reference backend.
    pub fn new_sync() -> Self {
        Self::with_backend(Arc::new(SyncNodeStorage::new()))
    }

    /// Wrap an existing backend, allocating a fresh storage id.
    pub fn with_backend(backend: Arc<dyn NodeStorageBackend>) -> Self {
        let id = allocate_slot();
        tracing::debug!(id = id.as_u16(), "registered node storage");
        Self {
            inner: Arc::new(StorageInner { id, backend }),
        }
    }

    /// The process-wide default instance.
    ///
    /// A convenience for top-level callers only; all APIs take an explicit
    /// storage so tests and libraries can stay hermetic.
    pub fn default_instance() -> &'static NodeStorage {
        static DEFAULT: OnceLock<NodeStorage> = OnceLock::new();
        DEFAULT.get_or_init(NodeStorage::new_sync)
    }

    /// This instance's storage id.
    pub fn id(&self) -> StorageId {
        self.inner.id
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &dyn NodeStorageBackend {
        self.inner.backend.as_ref()
    }

    /// Total number of live records in the backend.
    pub fn size(&self) -> usize {
        self.inner.backend.size()
    }

    fn term(&self, node_id: NodeId, kind: NodeKind, inlined: bool) -> TermId {
        TermId::new(node_id, kind, self.inner.id, inlined)
    }

    fn check_owns(&self, id: TermId) {
        debug_assert_eq!(
            id.storage_id(),
            self.inner.id,
            "term id belongs to a different storage"
        );
    }

    // ---- IRIs ----

    /// Intern an IRI, returning its term id.
    pub fn intern_iri(&self, iri: &str) -> TermId {
        let node_id = self
            .inner
            .backend
            .find_or_make_iri_id(IriView { iri });
        self.term(node_id, NodeKind::Iri, false)
    }

    /// Look up an IRI without interning it.
    pub fn find_iri(&self, iri: &str) -> Option<TermId> {
        let node_id = self.inner.backend.find_iri_id(IriView { iri });
        (!node_id.is_null()).then(|| self.term(node_id, NodeKind::Iri, false))
    }

    /// Resolve an IRI id. The id must have been issued by this storage.
    pub fn iri_data(&self, id: TermId) -> IriData {
        self.check_owns(id);
        self.inner.backend.find_iri_data(id.node_id())
    }

    // ---- Blank nodes ----

    /// Intern a blank node keyed by label and optional scope.
    pub fn intern_bnode(
        &self,
        label: &str,
        scope: Option<crate::scope::WeakNodeScope>,
    ) -> TermId {
        let node_id = self
            .inner
            .backend
            .find_or_make_bnode_id(BNodeView { label, scope });
        self.term(node_id, NodeKind::Blank, false)
    }

    /// Look up a blank node without interning it.
    pub fn find_bnode(
        &self,
        label: &str,
        scope: Option<crate::scope::WeakNodeScope>,
    ) -> Option<TermId> {
        let node_id = self.inner.backend.find_bnode_id(BNodeView { label, scope });
        (!node_id.is_null()).then(|| self.term(node_id, NodeKind::Blank, false))
    }

    /// Resolve a blank node id.
    pub fn bnode_data(&self, id: TermId) -> BNodeData {
        self.check_owns(id);
        self.inner.backend.find_bnode_data(id.node_id())
    }

    // ---- Variables ----

    /// Intern a query variable.
    pub fn intern_variable(&self, name: &str, anonymous: bool) -> TermId {
        let node_id = self
            .inner
            .backend
            .find_or_make_variable_id(VariableView { name, anonymous });
        self.term(node_id, NodeKind::Variable, false)
    }

    /// Resolve a variable id.
    pub fn variable_data(&self, id: TermId) -> VariableData {
        self.check_owns(id);
        self.inner.backend.find_variable_data(id.node_id())
    }

    // ---- Literals ----

    /// Intern a literal.
    ///
    /// Value views of inlineable datatypes whose value packs losslessly are
    /// encoded directly into the id with no backend entry. Value views of
    /// specialized datatypes go to the backend's value-keyed tables; every
    /// other literal lands in the fallback lexical table (fixed datatypes
    /// canonicalize first, so equal values intern to one entry).
    pub fn intern_literal(&self, view: LiteralView<'_>) -> TermId {
        match view {
            LiteralView::Value { tag, value } => {
                let entry = registry()
                    .find_by_tag(tag)
                    .expect("value views carry a fixed tag");
                if let Some(try_inline) = entry.try_inline {
                    if let Some(bits) = try_inline(value) {
                        let node_id =
                            NodeId::from_literal_parts(LiteralId::new(bits), tag);
                        return self.term(node_id, NodeKind::Literal, true);
                    }
                }
                if self.inner.backend.has_specialized_storage_for(tag) {
                    let node_id = self.inner.backend.find_or_make_literal_id(view);
                    return self.term(node_id, NodeKind::Literal, false);
                }
                // neither inlined nor specialized: store canonical lexical form
                let lexical = (entry.canonical)(value);
                let language = match value {
                    crate::datatypes::LiteralValue::LangString(_, lang) => {
                        Some(lang.as_str())
                    }
                    _ => None,
                };
                let node_id = self.inner.backend.find_or_make_literal_id(
                    LiteralView::Lexical {
                        tag,
                        datatype_iri: entry.iri,
                        lexical: &lexical,
                        language,
                    },
                );
                self.term(node_id, NodeKind::Literal, false)
            }
            LiteralView::Lexical { .. } => {
                let node_id = self.inner.backend.find_or_make_literal_id(view);
                self.term(node_id, NodeKind::Literal, false)
            }
        }
    }

    /// Look up a literal without interning it.
    pub fn find_literal(&self, view: LiteralView<'_>) -> Option<TermId> {
        if let LiteralView::Value { tag, value } = view {
            let entry = registry()
                .find_by_tag(tag)
                .expect("value views carry a fixed tag");
            if let Some(try_inline) = entry.try_inline {
                if let Some(bits) = try_inline(value) {
                    // inlined literals "exist" without any backend entry
                    let node_id = NodeId::from_literal_parts(LiteralId::new(bits), tag);
                    return Some(self.term(node_id, NodeKind::Literal, true));
                }
            }
            if !self.inner.backend.has_specialized_storage_for(tag) {
                let lexical = (entry.canonical)(value);
                let language = match value {
                    crate::datatypes::LiteralValue::LangString(_, lang) => {
                        Some(lang.as_str())
                    }
                    _ => None,
                };
                let node_id = self.inner.backend.find_literal_id(LiteralView::Lexical {
                    tag,
                    datatype_iri: entry.iri,
                    lexical: &lexical,
                    language,
                });
                return (!node_id.is_null())
                    .then(|| self.term(node_id, NodeKind::Literal, false));
            }
        }
        let node_id = self.inner.backend.find_literal_id(view);
        (!node_id.is_null()).then(|| self.term(node_id, NodeKind::Literal, false))
    }

    /// Resolve a literal id. Inlined ids decode without touching the
    /// backend.
    pub fn literal_data(&self, id: TermId) -> LiteralData {
        self.check_owns(id);
        if id.is_inlined() {
            let tag = id.literal_tag();
            let entry = registry()
                .find_by_tag(tag)
                .expect("inlined ids carry a fixed tag");
            let from_inlined = entry
                .from_inlined
                .expect("inlined ids come from inlineable datatypes");
            let bits = id.node_id().literal_id().as_u64();
            return LiteralData::Value {
                tag,
                value: Arc::new(from_inlined(bits)),
            };
        }
        self.inner.backend.find_literal_data(id.node_id())
    }

    // ---- Erasure ----

    /// Remove the backend entry for a term id. Returns whether something
    /// was removed; inlined ids have no entry and always return false.
    ///
    /// Capacity management only: erasing an entry still referenced by live
    /// handles invalidates them.
    pub fn erase(&self, id: TermId) -> bool {
        self.check_owns(id);
        if id.is_inlined() {
            return false;
        }
        let backend = &self.inner.backend;
        let removed = match id.kind() {
            NodeKind::Iri => backend.erase_iri(id.node_id()),
            NodeKind::Blank => backend.erase_bnode(id.node_id()),
            NodeKind::Literal => backend.erase_literal(id.node_id()),
            NodeKind::Variable => backend.erase_variable(id.node_id()),
        };
        if removed {
            tracing::trace!(?id, "erased storage entry");
        }
        removed
    }
}

impl PartialEq for NodeStorage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for NodeStorage {}

impl std::fmt::Debug for NodeStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeStorage")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::LiteralValue;
    use crate::ident::tags;
    use num_bigint::BigInt;

    #[test]
    fn test_storage_ids_are_unique_and_released() {
        let a = NodeStorage::new_sync();
        let b = NodeStorage::new_sync();
        assert_ne!(a.id(), b.id());

        let released = a.id();
        drop(a);
        // the released slot is reusable
        let c = NodeStorage::new_sync();
        let _ = (released, c);
    }

    #[test]
    fn test_intern_iri_is_idempotent() {
        let storage = NodeStorage::new_sync();
        let a = storage.intern_iri("http://example.org/a");
        let b = storage.intern_iri("http://example.org/a");
        assert_eq!(a, b);
        assert_eq!(storage.find_iri("http://example.org/a"), Some(a));
        assert_eq!(storage.find_iri("http://example.org/missing"), None);
        assert_eq!(storage.iri_data(a).iri.as_ref(), "http://example.org/a");
    }

    #[test]
    fn test_reserved_iris_are_seeded() {
        let storage = NodeStorage::new_sync();
        let id = storage
            .find_iri(termstore_vocab::xsd::BOOLEAN)
            .expect("xsd:boolean is seeded");
        assert_eq!(
            crate::ident::iri_id_to_tag(id.node_id()),
            tags::BOOLEAN
        );
        // interning again returns the reserved id
        assert_eq!(storage.intern_iri(termstore_vocab::xsd::BOOLEAN), id);
    }

    #[test]
    fn test_inlined_literal_has_no_backend_entry() {
        let storage = NodeStorage::new_sync();
        let before = storage.size();
        let value = LiteralValue::Bool(true);
        let id = storage.intern_literal(LiteralView::Value {
            tag: tags::BOOLEAN,
            value: &value,
        });
        assert!(id.is_inlined());
        assert_eq!(storage.size(), before, "inlining must not grow the backend");

        // decoding never touches storage
        let data = storage.literal_data(id);
        assert_eq!(data.tag(), tags::BOOLEAN);
        let LiteralData::Value { value, .. } = data else {
            panic!()
        };
        assert_eq!(value.as_ref(), &LiteralValue::Bool(true));
    }

    #[test]
    fn test_overflowing_value_falls_back_to_table() {
        let storage = NodeStorage::new_sync();
        let before = storage.size();
        let big = LiteralValue::BigInt(BigInt::from(1i64 << 50));
        let id = storage.intern_literal(LiteralView::Value {
            tag: tags::INTEGER,
            value: &big,
        });
        assert!(!id.is_inlined());
        assert_eq!(storage.size(), before + 1);

        let data = storage.literal_data(id);
        let LiteralData::Value { value, .. } = data else {
            panic!()
        };
        assert_eq!(value.as_ref(), &big);
    }

    #[test]
    fn test_lexical_literal_interning() {
        let storage = NodeStorage::new_sync();
        let view = LiteralView::Lexical {
            tag: crate::ident::LiteralTag::OTHER,
            datatype_iri: "http://example.org/custom",
            lexical: "anything goes",
            language: None,
        };
        let a = storage.intern_literal(view);
        let b = storage.intern_literal(view);
        assert_eq!(a, b);
        assert_eq!(storage.find_literal(view), Some(a));

        let LiteralData::Lexical {
            datatype_iri,
            lexical,
            ..
        } = storage.literal_data(a)
        else {
            panic!()
        };
        assert_eq!(datatype_iri.as_ref(), "http://example.org/custom");
        assert_eq!(lexical.as_ref(), "anything goes");
    }

    #[test]
    fn test_erase() {
        let storage = NodeStorage::new_sync();
        let id = storage.intern_iri("http://example.org/temp");
        assert!(storage.erase(id));
        assert!(!storage.erase(id));
        assert_eq!(storage.find_iri("http://example.org/temp"), None);

        // inlined ids have nothing to erase
        let value = LiteralValue::Bool(false);
        let inlined = storage.intern_literal(LiteralView::Value {
            tag: tags::BOOLEAN,
            value: &value,
        });
        assert!(!storage.erase(inlined));
    }

    #[test]
    fn test_concurrent_interning_is_idempotent() {
        use std::sync::Barrier;

        let storage = NodeStorage::new_sync();
        let barrier = Barrier::new(8);
        let ids = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let storage = storage.clone();
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        (0..100)
                            .map(|i| storage.intern_iri(&format!("http://example.org/{}", i)))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        // every thread observed the same id for the same IRI
        for thread_ids in &ids[1..] {
            assert_eq!(thread_ids, &ids[0]);
        }
    }
}
