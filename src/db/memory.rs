//! In-process store
//!
//! Keeps records in insertion order behind a lock. Used when no database is
//! configured and as the store behind the HTTP tests.

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;

use super::store::{DocumentStore, MovieStore, StoreResult};
use crate::domain::{Entity, Movie};

pub struct MemoryStore<E> {
    records: RwLock<Vec<E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        MemoryStore {
            records: RwLock::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MemoryStore<E> {
    async fn find_all(&self) -> StoreResult<Vec<E>> {
        Ok(self.records.read().clone())
    }

    async fn find_one(&self, draft: &E::Draft) -> StoreResult<Option<E>> {
        Ok(self.records.read().iter().find(|r| r.matches(draft)).cloned())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        Ok(self.records.read().iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        let record = E::from_draft(ObjectId::new().to_hex(), draft);
        self.records.write().push(record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>> {
        let mut records = self.records.write();
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        let before = record.clone();
        record.apply(patch);
        Ok(Some(before))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        let mut records = self.records.write();
        let position = records.iter().position(|r| r.id() == id);
        Ok(position.map(|index| records.remove(index)))
    }
}

#[async_trait]
impl MovieStore for MemoryStore<Movie> {
    async fn find_by_genre(&self, label: &str) -> StoreResult<Vec<Movie>> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|movie| movie.has_genre(label))
            .cloned()
            .collect())
    }
}
