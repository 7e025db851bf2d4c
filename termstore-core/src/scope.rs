//! Blank node scopes: label → node maps with weak, generation-checked
//! references.
//!
//! Scopes give blank node labels document- or graph-local meaning: the same
//! textual label resolved through two different scopes yields two distinct
//! storage entries (the storage keys blank nodes by label *and* scope).
//!
//! Scopes live in a process-wide slot arena. A strong [`NodeScope`] holds a
//! reference count on its slot; [`WeakNodeScope`] stores only `(slot index,
//! generation)` and upgrades via a CAS retry loop that treats a zero
//! refcount or a generation mismatch as a hard failure — a dead scope is
//! never resurrected. Storage records holding a weak reference to a dead
//! scope stay valid; the reference just no longer upgrades.

use crate::error::ScopeError;
use crate::node::BlankNode;
use crate::storage::NodeStorage;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Maximum number of concurrently live scopes.
const MAX_SCOPES: usize = 1024;

struct ScopePayload {
    labels: FxHashMap<Box<str>, crate::ident::TermId>,
    next_fresh: u64,
}

struct Slot {
    /// Strong reference count. Zero means the slot is free.
    refcount: AtomicU32,
    /// Bumped every time the slot is freed; stale weak references fail the
    /// generation check.
    generation: AtomicU64,
    payload: Mutex<Option<ScopePayload>>,
}

struct ScopeArena {
    slots: Vec<Slot>,
}

impl ScopeArena {
    fn new() -> Self {
        let slots = (0..MAX_SCOPES)
            .map(|_| Slot {
                refcount: AtomicU32::new(0),
                generation: AtomicU64::new(1),
                payload: Mutex::new(None),
            })
            .collect();
        Self { slots }
    }
}

fn arena() -> &'static ScopeArena {
    static ARENA: OnceLock<ScopeArena> = OnceLock::new();
    ARENA.get_or_init(ScopeArena::new)
}

// ============================================================================
// NodeScope
// ============================================================================

/// Strong handle on a blank node scope.
///
/// Clone increments the slot refcount; dropping the last clone frees the
/// slot (bumping its generation, so outstanding weak references go dead).
#[derive(Debug)]
pub struct NodeScope {
    index: u16,
    generation: u64,
}

impl NodeScope {
    /// Allocate a fresh scope. Panics if the scope arena is exhausted.
    pub fn new() -> Self {
        let arena = arena();
        for (index, slot) in arena.slots.iter().enumerate() {
            if slot
                .refcount
                .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                let generation = slot.generation.load(Ordering::Acquire);
                *slot.payload.lock() = Some(ScopePayload {
                    labels: FxHashMap::default(),
                    next_fresh: 0,
                });
                tracing::debug!(index, generation, "allocated node scope");
                return Self {
                    index: index as u16,
                    generation,
                };
            }
        }
        panic!("node scope arena exhausted ({} live scopes)", MAX_SCOPES);
    }

    fn slot(&self) -> &'static Slot {
        &arena().slots[self.index as usize]
    }

    /// Create a weak reference to this scope.
    pub fn downgrade(&self) -> WeakNodeScope {
        WeakNodeScope {
            index: self.index,
            generation: self.generation,
        }
    }

    /// Retrieve the blank node for `label`, creating and remembering it on
    /// first use.
    ///
    /// The node is interned in `storage` keyed by `(label, this scope)`, so
    /// equal labels in different scopes stay distinct.
    pub fn get_or_generate(&self, label: &str, storage: &NodeStorage) -> BlankNode {
        let slot = self.slot();
        let mut guard = slot.payload.lock();
        let payload = guard.as_mut().expect("live scope has a payload");

        if let Some(&id) = payload.labels.get(label) {
            if id.storage_id() == storage.id() {
                return BlankNode::from_parts(id, storage.clone());
            }
        }
        let node = storage.intern_bnode(label, Some(self.downgrade()));
        payload.labels.insert(Box::from(label), node);
        BlankNode::from_parts(node, storage.clone())
    }

    /// Generate a fresh blank node with a scope-unique label (`b0`, `b1`, …).
    pub fn fresh(&self, storage: &NodeStorage) -> BlankNode {
        let slot = self.slot();
        let label = {
            let mut guard = slot.payload.lock();
            let payload = guard.as_mut().expect("live scope has a payload");
            let n = payload.next_fresh;
            payload.next_fresh += 1;
            format!("b{}", n)
        };
        let node = storage.intern_bnode(&label, Some(self.downgrade()));
        BlankNode::from_parts(node, storage.clone())
    }

    /// Number of labels this scope remembers.
    pub fn len(&self) -> usize {
        self.slot()
            .payload
            .lock()
            .as_ref()
            .map_or(0, |p| p.labels.len())
    }

    /// True if no labels have been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NodeScope {
    fn clone(&self) -> Self {
        let old = self.slot().refcount.fetch_add(1, Ordering::AcqRel);
        debug_assert!(old > 0, "cloned a dead scope");
        Self {
            index: self.index,
            generation: self.generation,
        }
    }
}

impl Drop for NodeScope {
    fn drop(&mut self) {
        let slot = self.slot();
        if slot.refcount.fetch_sub(1, Ordering::AcqRel) == 1 {
            // last strong reference: free the slot and kill weak references
            slot.generation.fetch_add(1, Ordering::AcqRel);
            *slot.payload.lock() = None;
            tracing::debug!(index = self.index, "freed node scope");
        }
    }
}

impl PartialEq for NodeScope {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl Eq for NodeScope {}

// ============================================================================
// WeakNodeScope
// ============================================================================

/// Weak reference to a scope: slot index plus the generation observed at
/// downgrade time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct WeakNodeScope {
    index: u16,
    generation: u64,
}

impl WeakNodeScope {
    /// Reconstruct a weak reference from raw parts.
    pub fn from_parts(index: u16, generation: u64) -> Self {
        Self { index, generation }
    }

    /// The slot index.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Try to upgrade to a strong handle.
    ///
    /// Fails (returns `None`) if the scope has been freed: refcount zero or
    /// generation mismatch. A CAS retry loop guards against racing with the
    /// final drop — a refcount observed at zero is never re-incremented.
    pub fn try_upgrade(&self) -> Option<NodeScope> {
        let slot = &arena().slots[self.index as usize];
        let mut count = slot.refcount.load(Ordering::Acquire);
        loop {
            if count == 0 {
                return None;
            }
            if slot.generation.load(Ordering::Acquire) != self.generation {
                return None;
            }
            match slot.refcount.compare_exchange_weak(
                count,
                count + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    // re-check the generation: the slot may have been freed
                    // and reallocated between the load and the CAS
                    if slot.generation.load(Ordering::Acquire) != self.generation {
                        drop(NodeScope {
                            index: self.index,
                            generation: self.generation,
                        });
                        return None;
                    }
                    return Some(NodeScope {
                        index: self.index,
                        generation: self.generation,
                    });
                }
                Err(observed) => count = observed,
            }
        }
    }

    /// Upgrade, failing with [`ScopeError::Dead`] if the scope is gone.
    pub fn upgrade(&self) -> Result<NodeScope, ScopeError> {
        self.try_upgrade().ok_or(ScopeError::Dead)
    }
}
