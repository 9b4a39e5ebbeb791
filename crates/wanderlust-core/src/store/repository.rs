//! Generic in-memory repository.

use jiff::Timestamp;
use log::{debug, info};
use tokio::sync::RwLock;

use super::{Latency, Operation, Record};
use crate::error::Result;

/// Records plus the last identifier handed out.
struct Collection<T> {
    records: Vec<T>,
    last_issued: i64,
}

impl<T: Record> Collection<T> {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Next time-based identifier: epoch milliseconds, bumped past the last
    /// issued value and past any id already present.
    fn next_id(&mut self, now: Timestamp) -> String {
        let mut candidate = now.as_millisecond().max(self.last_issued + 1);
        while self.position(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }
}

/// Async CRUD access to one in-memory collection.
///
/// Every call waits for the configured [`Latency`] before touching the
/// collection and hands back clones, never references into the store.
pub struct Repository<T> {
    collection: RwLock<Collection<T>>,
    latency: Latency,
}

impl<T: Record> Repository<T> {
    /// Creates a repository seeded with `records`.
    pub fn new(records: Vec<T>, latency: Latency) -> Self {
        Self {
            collection: RwLock::new(Collection {
                records,
                last_issued: 0,
            }),
            latency,
        }
    }

    /// Returns a copy of every record, in insertion order.
    pub async fn get_all(&self) -> Vec<T> {
        self.latency.wait(Operation::GetAll).await;
        let collection = self.collection.read().await;
        debug!("Listing {} {} records", collection.records.len(), T::KIND);
        collection.records.clone()
    }

    /// Returns a copy of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns the record type's not-found error when no record matches.
    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        self.latency.wait(Operation::GetById).await;
        let collection = self.collection.read().await;
        collection
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| T::not_found(id))
    }

    /// Returns copies of all records accepted by `predicate`.
    pub async fn find_all<F>(&self, operation: Operation, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.latency.wait(operation).await;
        let collection = self.collection.read().await;
        let found: Vec<T> = collection
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();

        debug!(
            "{} matched {} {} records",
            operation.as_str(),
            found.len(),
            T::KIND
        );
        found
    }

    /// Stores a new record built from `draft` with a fresh id and creation
    /// timestamp, and returns a copy of it.
    pub async fn create(&self, draft: T::Draft) -> T {
        self.latency.wait(Operation::Create).await;
        let mut collection = self.collection.write().await;

        let now = Timestamp::now();
        let id = collection.next_id(now);
        let record = T::from_draft(draft, id, now);
        collection.records.push(record.clone());

        info!("Created {} {}", T::KIND, record.id());
        record
    }

    /// Applies `patch` to the stored record and returns a copy of the
    /// result together with the changed field names.
    ///
    /// # Errors
    ///
    /// Returns the record type's not-found error when no record matches.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<(T, Vec<String>)> {
        self.latency.wait(Operation::Update).await;
        let mut collection = self.collection.write().await;

        let index = collection.position(id).ok_or_else(|| T::not_found(id))?;
        let record = &mut collection.records[index];
        let changes = record.apply(patch);

        debug!("Updated {} {}: {:?}", T::KIND, id, changes);
        Ok((record.clone(), changes))
    }

    /// Removes the record and returns it.
    ///
    /// # Errors
    ///
    /// Returns the record type's not-found error when no record matches, so
    /// the second of two deletes of the same id fails.
    pub async fn delete(&self, id: &str) -> Result<T> {
        self.latency.wait(Operation::Delete).await;
        let mut collection = self.collection.write().await;

        let index = collection.position(id).ok_or_else(|| T::not_found(id))?;
        let removed = collection.records.remove(index);

        info!("Deleted {} {}", T::KIND, id);
        Ok(removed)
    }

    /// Number of stored records, without simulated latency.
    pub async fn len(&self) -> usize {
        self.collection.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
