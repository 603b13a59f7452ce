//! Store adapter contract
//!
//! Handlers depend only on these traits. `MongoStore` backs them with a
//! MongoDB collection and `MemoryStore` with an in-process list.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Entity, Movie};

/// Faults raised by a store adapter. The display text is what clients see
/// in the `message` field of a 500 response.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error(transparent)]
    Encode(#[from] bson::ser::Error),
    #[error(transparent)]
    Decode(#[from] bson::de::Error),
    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for one record type
#[async_trait]
pub trait DocumentStore<E: Entity>: Send + Sync {
    /// Every record, in store order
    async fn find_all(&self) -> StoreResult<Vec<E>>;

    /// The first record whose fields all equal the draft's
    async fn find_one(&self, draft: &E::Draft) -> StoreResult<Option<E>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<E>>;

    /// Persist a new record under a freshly assigned id
    async fn create(&self, draft: E::Draft) -> StoreResult<E>;

    /// Apply the patch to the record with this id, returning the record as
    /// it was before the update, or `None` when no record has this id
    async fn update_by_id(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>>;

    /// Remove the record with this id, returning it, or `None` when no
    /// record has this id
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<E>>;
}

/// Movie persistence, adding lookup by genre label
#[async_trait]
pub trait MovieStore: DocumentStore<Movie> {
    /// Movies whose `genre` list contains `label` exactly
    async fn find_by_genre(&self, label: &str) -> StoreResult<Vec<Movie>>;
}
