use std::sync::Arc;
use tokio::sync::RwLock;

use models::blog::BlogPost;
use models::proposal::Proposal;

/// Records the store can hold: anything with a numeric id.
pub trait Keyed: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
}

impl Keyed for BlogPost {
    fn id(&self) -> u64 { self.id }
}

impl Keyed for Proposal {
    fn id(&self) -> u64 { self.id }
}

struct Inner<T> {
    /// Insertion order is the enumeration order; never sorted.
    records: Vec<T>,
    next_id: u64,
}

/// Generic in-memory collection with a monotonically increasing id counter.
///
/// Holds records for the process lifetime; nothing is persisted and the
/// contents reset on restart. The `RwLock` gives the at-most-one-writer
/// guarantee the multi-threaded runtime needs. Ids are never reused, even
/// after deletion.
#[derive(Clone)]
pub struct EntityStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T: Keyed> EntityStore<T> {
    /// Empty store; ids start at 1.
    pub fn new() -> Arc<Self> {
        Self::seeded(Vec::new())
    }

    /// Store pre-populated with records; ids continue above the highest
    /// seeded id.
    pub fn seeded(records: Vec<T>) -> Arc<Self> {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Arc::new(Self {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
        })
    }

    /// Issue a fresh id, strictly greater than every id issued before.
    pub async fn next_id(&self) -> u64 {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    /// Snapshot of all records in insertion order.
    pub async fn all(&self) -> Vec<T> {
        let inner = self.inner.read().await;
        inner.records.clone()
    }

    /// Record with the given id, if any.
    pub async fn find(&self, id: u64) -> Option<T> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Append a record to the collection.
    pub async fn insert(&self, record: T) {
        let mut inner = self.inner.write().await;
        inner.records.push(record);
    }

    /// Merge into the record with the given id and return the merged copy,
    /// or `None` if the id does not exist.
    pub async fn replace<F>(&self, id: u64, merge: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let record = inner.records.iter_mut().find(|r| r.id() == id)?;
        merge(record);
        Some(record.clone())
    }

    /// Remove the record with the given id; returns whether it existed.
    pub async fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|r| r.id() != id);
        inner.records.len() != before
    }
}
