//! Bidirectional interning table: id → record and view → id.
//!
//! Forward direction is a plain vector offset by the table's first id (ids
//! are dense, sequential, and never reused, so erased slots become holes).
//! Reverse direction is a hash index keyed by the record's cached hash; the
//! key stores `(hash, id)` and the map's hasher passes the stored hash
//! through unchanged, so probes by a view's hash and the map's own rehashes
//! agree.

use crate::view::BackendRecord;
use hashbrown::HashMap;
use hashbrown::hash_map::RawEntryMut;
use std::hash::{BuildHasherDefault, Hash, Hasher};

/// Key of the reverse index: record hash plus the id it maps to.
#[derive(Copy, Clone, Eq, PartialEq)]
struct IdKey {
    hash: u64,
    id: u64,
}

impl Hash for IdKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Hasher that returns the single `u64` written to it.
#[derive(Default)]
struct PassThroughHasher(u64);

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, _bytes: &[u8]) {
        unreachable!("IdKey only writes u64 hashes");
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

type PassThrough = BuildHasherDefault<PassThroughHasher>;

/// Bidirectional map between sequential ids and owned backend records.
pub struct BiDirMap<R> {
    first_id: u64,
    records: Vec<Option<R>>,
    index: HashMap<IdKey, (), PassThrough>,
}

impl<R: BackendRecord> BiDirMap<R> {
    /// Create an empty table whose first assigned id is `first_id`.
    pub fn with_first_id(first_id: u64) -> Self {
        debug_assert!(first_id > 0, "id 0 is the null id");
        Self {
            first_id,
            records: Vec::new(),
            index: HashMap::default(),
        }
    }

    /// Number of live records (holes from erasure excluded).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no live records exist.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The id the next insertion will be assigned.
    pub fn next_id(&self) -> u64 {
        self.first_id + self.records.len() as u64
    }

    fn slot(&self, id: u64) -> Option<usize> {
        id.checked_sub(self.first_id).map(|s| s as usize)
    }

    /// Look up the id of an entry equal to `view`. Never mutates.
    pub fn find_id(&self, view: &R::View<'_>) -> Option<u64> {
        let hash = R::view_hash(view);
        self.index
            .raw_entry()
            .from_hash(hash, |key| {
                self.records[(key.id - self.first_id) as usize]
                    .as_ref()
                    .is_some_and(|record| record.matches(view))
            })
            .map(|(key, ())| key.id)
    }

    /// Insert a record for `view`, assigning the next sequential id.
    ///
    /// The caller must have checked that no equal entry exists.
    pub fn insert_assume_absent(&mut self, view: R::View<'_>) -> u64 {
        let id = self.next_id();
        let record = R::from_view(view);
        let hash = record.cached_hash();
        self.records.push(Some(record));
        self.insert_index(hash, id);
        id
    }

    /// Insert a record for `view` at a caller-chosen id at or above the next
    /// free id; intermediate ids become holes. Used to seed reserved
    /// entries.
    pub fn insert_at_assume_absent(&mut self, id: u64, view: R::View<'_>) {
        let slot = self.slot(id).expect("id below table's first id");
        assert!(
            slot >= self.records.len(),
            "seed id {} already allocated",
            id
        );
        self.records.resize_with(slot + 1, || None);
        let record = R::from_view(view);
        let hash = record.cached_hash();
        self.records[slot] = Some(record);
        self.insert_index(hash, id);
    }

    fn insert_index(&mut self, hash: u64, id: u64) {
        let entry = self
            .index
            .raw_entry_mut()
            .from_hash(hash, |key| key.id == id);
        match entry {
            RawEntryMut::Occupied(_) => unreachable!("id inserted twice"),
            RawEntryMut::Vacant(vacant) => {
                vacant.insert_hashed_nocheck(hash, IdKey { hash, id }, ());
            }
        }
    }

    /// Resolve an id to its record. `None` if the id was never assigned or
    /// was erased.
    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(self.slot(id)?)?.as_ref()
    }

    /// Remove the entry for `id`. Returns whether something was removed.
    /// The id is not reused.
    pub fn erase(&mut self, id: u64) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        let Some(record) = self.records.get_mut(slot).and_then(Option::take) else {
            return false;
        };
        let hash = record.cached_hash();
        let entry = self
            .index
            .raw_entry_mut()
            .from_hash(hash, |key| key.id == id);
        if let RawEntryMut::Occupied(occupied) = entry {
            occupied.remove();
        }
        true
    }
}
