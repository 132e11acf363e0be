use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use eventdesk_core::{DomainError, DomainResult, Entity, ExpectedRevision, Revisioned};

#[derive(Debug)]
struct Slots<T: Entity> {
    records: Vec<Revisioned<T>>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Slots<T> {
    fn reindex_from(&mut self, start: usize) {
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.index.insert(record.value.id().clone(), pos);
        }
    }
}

/// Ordered, id-indexed in-memory collection of one entity kind.
///
/// Records keep insertion order (lists come back in store order) and are
/// looked up through a hash index. Each record carries a revision used for
/// optimistic concurrency; plain updates ignore it (last write wins).
///
/// A poisoned lock is recovered rather than reported: every mutation leaves
/// the slots consistent before it can panic in caller code.
#[derive(Debug)]
pub struct InMemoryCollection<T: Entity> {
    inner: RwLock<Slots<T>>,
}

impl<T: Entity> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Slots {
                records: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }
}

impl<T> InMemoryCollection<T>
where
    T: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from seed records. Duplicate ids are a conflict.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> DomainResult<Self> {
        let collection = Self::new();
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    fn read(&self) -> RwLockReadGuard<'_, Slots<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.read().index.contains_key(id)
    }

    /// Snapshot of every record in store order.
    pub fn list(&self) -> Vec<T> {
        self.read().records.iter().map(|r| r.value.clone()).collect()
    }

    /// Snapshot of the records matching `pred`, in store order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .records
            .iter()
            .filter(|r| pred(&r.value))
            .map(|r| r.value.clone())
            .collect()
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.get_revisioned(id).map(|r| r.value)
    }

    pub fn get_revisioned(&self, id: &T::Id) -> Option<Revisioned<T>> {
        let slots = self.read();
        let pos = *slots.index.get(id)?;
        slots.records.get(pos).cloned()
    }

    /// Append a record at revision 1.
    pub fn insert(&self, value: T) -> DomainResult<T> {
        let mut slots = self.write();
        let id = value.id().clone();
        if slots.index.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "{} with id {id} already exists",
                T::KIND
            )));
        }
        let pos = slots.records.len();
        slots.records.push(Revisioned {
            revision: 1,
            value: value.clone(),
        });
        slots.index.insert(id, pos);
        Ok(value)
    }

    /// Mutate a record in place.
    ///
    /// `apply` runs against a copy; the stored record is replaced (and its
    /// revision bumped) only if it returns `Ok`. Identifiers are immutable:
    /// a closure that changes the id is rejected as a conflict.
    pub fn update<F>(
        &self,
        id: &T::Id,
        expected: ExpectedRevision,
        apply: F,
    ) -> DomainResult<Revisioned<T>>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let mut slots = self.write();
        let pos = *slots
            .index
            .get(id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;
        let record = &mut slots.records[pos];
        expected.check(record.revision)?;

        let mut draft = record.value.clone();
        apply(&mut draft)?;
        if draft.id() != id {
            return Err(DomainError::conflict(format!("{} id {id} cannot change", T::KIND)));
        }

        record.value = draft;
        record.revision += 1;
        Ok(record.clone())
    }

    pub fn remove(&self, id: &T::Id) -> Option<T> {
        let mut slots = self.write();
        let pos = slots.index.remove(id)?;
        let removed = slots.records.remove(pos);
        slots.reindex_from(pos);
        Some(removed.value)
    }

    /// Remove every record matching `pred`; returns how many were removed.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        let mut slots = self.write();
        let before = slots.records.len();
        slots.records.retain(|r| !pred(&r.value));
        let removed = before - slots.records.len();
        if removed > 0 {
            slots.index.clear();
            slots.reindex_from(0);
        }
        removed
    }
}
