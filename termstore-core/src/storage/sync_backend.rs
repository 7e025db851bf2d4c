//! Thread-safe reference storage backend.
//!
//! One `RwLock`-guarded [`BiDirMap`] per term kind, plus a value-keyed
//! table per specialized literal datatype and a fallback lexical table for
//! everything else. Lookups take the shared lock; inserts take the
//! exclusive lock and re-check existence (double-checked insertion), so
//! concurrent interning of the same view yields exactly one record.

use super::NodeStorageBackend;
use super::bimap::BiDirMap;
use crate::datatypes::registry::{registry, reserved_iris};
use crate::ident::{LiteralId, LiteralTag, NodeId, MIN_DYNAMIC_IRI_ID};
use crate::view::{
    BNodeData, BNodeRecord, BNodeView, BackendRecord, IriData, IriRecord, IriView,
    LexicalLiteralRecord, LiteralData, LiteralView, ValueLiteralRecord, VariableData,
    VariableRecord, VariableView,
};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Shared/exclusive lookup-or-insert over one table.
fn lookup_or_insert<R: BackendRecord>(table: &RwLock<BiDirMap<R>>, view: R::View<'_>) -> u64 {
    {
        let guard = table.read();
        if let Some(id) = guard.find_id(&view) {
            return id;
        }
    }

    let mut guard = table.write();
    // re-check: another thread may have inserted between the locks
    if let Some(id) = guard.find_id(&view) {
        return id;
    }
    guard.insert_assume_absent(view)
}

fn lookup<R: BackendRecord>(table: &RwLock<BiDirMap<R>>, view: R::View<'_>) -> u64 {
    table.read().find_id(&view).unwrap_or(0)
}

fn erase<R: BackendRecord>(table: &RwLock<BiDirMap<R>>, id: u64) -> bool {
    table.write().erase(id)
}

/// Thread-safe reference implementation of [`NodeStorageBackend`].
pub struct SyncNodeStorage {
    iris: RwLock<BiDirMap<IriRecord>>,
    bnodes: RwLock<BiDirMap<BNodeRecord>>,
    variables: RwLock<BiDirMap<VariableRecord>>,
    fallback_literals: RwLock<BiDirMap<LexicalLiteralRecord>>,
    /// One value-keyed table per specialized datatype tag.
    specialized_literals: FxHashMap<u8, RwLock<BiDirMap<ValueLiteralRecord>>>,
}

impl SyncNodeStorage {
    pub fn new() -> Self {
        let mut iris = BiDirMap::with_first_id(1);
        // reserved datatype IRIs occupy their fixed ids from the start
        let mut reserved: Vec<_> = reserved_iris().collect();
        reserved.sort_unstable_by_key(|(_, node_id)| node_id.as_u64());
        for (iri, node_id) in reserved {
            iris.insert_at_assume_absent(node_id.as_u64(), IriView { iri });
        }
        debug_assert_eq!(iris.next_id(), MIN_DYNAMIC_IRI_ID);

        let specialized_literals = registry()
            .entries()
            .iter()
            .filter(|entry| entry.specialized)
            .map(|entry| {
                (
                    entry.tag.as_u8(),
                    RwLock::new(BiDirMap::with_first_id(LiteralId::MIN.as_u64())),
                )
            })
            .collect();

        Self {
            iris: RwLock::new(iris),
            bnodes: RwLock::new(BiDirMap::with_first_id(NodeId::MIN_BNODE.as_u64())),
            variables: RwLock::new(BiDirMap::with_first_id(NodeId::MIN_VARIABLE.as_u64())),
            fallback_literals: RwLock::new(BiDirMap::with_first_id(LiteralId::MIN.as_u64())),
            specialized_literals,
        }
    }

    fn literal_table(
        &self,
        view: &LiteralView<'_>,
    ) -> &RwLock<BiDirMap<ValueLiteralRecord>> {
        let LiteralView::Value { tag, .. } = view else {
            unreachable!("lexical views use the fallback table");
        };
        self.specialized_literals
            .get(&tag.as_u8())
            .expect("value views only target specialized tags")
    }

    fn literal_node_id(table_id: u64, tag: LiteralTag) -> NodeId {
        NodeId::from_literal_parts(LiteralId::new(table_id), tag)
    }
}

impl Default for SyncNodeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStorageBackend for SyncNodeStorage {
    fn has_specialized_storage_for(&self, tag: LiteralTag) -> bool {
        self.specialized_literals.contains_key(&tag.as_u8())
    }

    fn find_or_make_iri_id(&self, view: IriView<'_>) -> NodeId {
        NodeId::new(lookup_or_insert(&self.iris, view))
    }

    fn find_or_make_bnode_id(&self, view: BNodeView<'_>) -> NodeId {
        NodeId::new(lookup_or_insert(&self.bnodes, view))
    }

    fn find_or_make_variable_id(&self, view: VariableView<'_>) -> NodeId {
        NodeId::new(lookup_or_insert(&self.variables, view))
    }

    fn find_or_make_literal_id(&self, view: LiteralView<'_>) -> NodeId {
        match view {
            LiteralView::Value { tag, .. } => {
                let table = self.literal_table(&view);
                Self::literal_node_id(lookup_or_insert(table, view), tag)
            }
            LiteralView::Lexical { tag, .. } => {
                Self::literal_node_id(lookup_or_insert(&self.fallback_literals, view), tag)
            }
        }
    }

    fn find_iri_id(&self, view: IriView<'_>) -> NodeId {
        NodeId::new(lookup(&self.iris, view))
    }

    fn find_bnode_id(&self, view: BNodeView<'_>) -> NodeId {
        NodeId::new(lookup(&self.bnodes, view))
    }

    fn find_variable_id(&self, view: VariableView<'_>) -> NodeId {
        NodeId::new(lookup(&self.variables, view))
    }

    fn find_literal_id(&self, view: LiteralView<'_>) -> NodeId {
        match view {
            LiteralView::Value { tag, .. } => {
                let table = self.literal_table(&view);
                let id = lookup(table, view);
                if id == 0 {
                    NodeId::NULL
                } else {
                    Self::literal_node_id(id, tag)
                }
            }
            LiteralView::Lexical { tag, .. } => {
                let id = lookup(&self.fallback_literals, view);
                if id == 0 {
                    NodeId::NULL
                } else {
                    Self::literal_node_id(id, tag)
                }
            }
        }
    }

    fn find_iri_data(&self, id: NodeId) -> IriData {
        self.iris
            .read()
            .get(id.as_u64())
            .expect("iri id not present in this storage")
            .data()
    }

    fn find_bnode_data(&self, id: NodeId) -> BNodeData {
        self.bnodes
            .read()
            .get(id.as_u64())
            .expect("bnode id not present in this storage")
            .data()
    }

    fn find_variable_data(&self, id: NodeId) -> VariableData {
        self.variables
            .read()
            .get(id.as_u64())
            .expect("variable id not present in this storage")
            .data()
    }

    fn find_literal_data(&self, id: NodeId) -> LiteralData {
        let tag = id.literal_tag();
        let table_id = id.literal_id().as_u64();
        if let Some(table) = self.specialized_literals.get(&tag.as_u8()) {
            return table
                .read()
                .get(table_id)
                .expect("literal id not present in this storage")
                .data();
        }
        self.fallback_literals
            .read()
            .get(table_id)
            .expect("literal id not present in this storage")
            .data()
    }

    fn erase_iri(&self, id: NodeId) -> bool {
        erase(&self.iris, id.as_u64())
    }

    fn erase_bnode(&self, id: NodeId) -> bool {
        erase(&self.bnodes, id.as_u64())
    }

    fn erase_variable(&self, id: NodeId) -> bool {
        erase(&self.variables, id.as_u64())
    }

    fn erase_literal(&self, id: NodeId) -> bool {
        let tag = id.literal_tag();
        let table_id = id.literal_id().as_u64();
        if let Some(table) = self.specialized_literals.get(&tag.as_u8()) {
            return erase(table, table_id);
        }
        erase(&self.fallback_literals, table_id)
    }

    fn size(&self) -> usize {
        self.iris.read().len()
            + self.bnodes.read().len()
            + self.variables.read().len()
            + self.fallback_literals.read().len()
            + self
                .specialized_literals
                .values()
                .map(|table| table.read().len())
                .sum::<usize>()
    }
}
