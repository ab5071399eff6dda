use std::collections::BTreeSet;

use thiserror::Error;

use crate::product::types::ProductRecord;

/// Errors from store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Ids are slot indices; negative values are never allocatable.
    #[error("product id {0} is negative")]
    NegativeId(i64),
}

/// In-memory product record store with id recycling.
///
/// Records live in a slot table indexed by id. Deleting a record marks its
/// slot absent (`None`) and returns the id to the free set; the table never
/// shrinks, so id density is preserved. Writes to an id beyond the table
/// backfill the gap with absent, free slots.
///
/// Allocation is first-fit-lowest: [`ProductStore::insert`] always takes the
/// smallest free id, and only grows the table when no freed id remains.
///
/// Free-id membership is tracked by value in a `BTreeSet`, which keeps the
/// set sorted ascending for free.
#[derive(Debug, Default)]
pub struct ProductStore {
    slots: Vec<Option<ProductRecord>>,
    free_ids: BTreeSet<usize>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records, keyed by each record's own id.
    ///
    /// Seeding replays every record through [`ProductStore::put`], so a
    /// sparse seed file produces absent-and-free gap slots rather than
    /// colliding ids later. Records with negative ids are skipped.
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            let id = record.product_id;
            if let Err(e) = store.put(id, record) {
                tracing::warn!("Skipping seed record: {}", e);
            }
        }
        store
    }

    /// All live records, in ascending id order.
    pub fn list(&self) -> Vec<ProductRecord> {
        self.slots.iter().filter_map(Clone::clone).collect()
    }

    /// The record at `id`, if the slot exists and is live.
    pub fn get(&self, id: i64) -> Option<&ProductRecord> {
        let idx = usize::try_from(id).ok()?;
        self.slots.get(idx)?.as_ref()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated slots, live or absent.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Stores a new record under the smallest free id, growing the table
    /// only when no freed id remains. The record's own id is overwritten.
    pub fn insert(&mut self, mut record: ProductRecord) -> ProductRecord {
        let idx = match self.free_ids.pop_first() {
            Some(idx) => idx,
            None => self.slots.len(),
        };
        record.product_id = idx as i64;
        if idx == self.slots.len() {
            self.slots.push(Some(record.clone()));
        } else {
            self.slots[idx] = Some(record.clone());
        }
        record
    }

    /// Stores `record` at exactly `id`, overwriting the record's own id.
    ///
    /// An id within the table reclaims its slot (and leaves the free set if
    /// it was there). An id beyond the table backfills every slot up to
    /// `id - 1` as absent and free, so each skipped id stays independently
    /// allocatable. Negative ids are rejected.
    pub fn put(&mut self, id: i64, mut record: ProductRecord) -> Result<ProductRecord, StoreError> {
        if id < 0 {
            return Err(StoreError::NegativeId(id));
        }
        let idx = id as usize;

        if idx < self.slots.len() {
            self.free_ids.remove(&idx);
        } else {
            for filler in self.slots.len()..idx {
                self.slots.push(None);
                self.free_ids.insert(filler);
            }
            self.slots.push(None);
        }

        record.product_id = id;
        self.slots[idx] = Some(record.clone());
        Ok(record)
    }

    /// Marks the slot at `id` absent and frees the id.
    ///
    /// Returns `false` without mutating anything when there is no live
    /// record at `id` (deletion is idempotent).
    pub fn remove(&mut self, id: i64) -> bool {
        let Ok(idx) = usize::try_from(id) else {
            return false;
        };
        match self.slots.get_mut(idx) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.free_ids.insert(idx);
                true
            }
            _ => false,
        }
    }

    /// Free ids in ascending order.
    pub fn free_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.free_ids.iter().copied()
    }
}
