//! MongoDB-backed store

use std::marker::PhantomData;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::debug;

use super::store::{DocumentStore, MovieStore, StoreError, StoreResult};
use crate::domain::{Entity, Movie};

/// Store adapter over one MongoDB collection
pub struct MongoStore<E> {
    collection: Collection<Document>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoStore<E> {
    pub fn new(database: &Database) -> Self {
        MongoStore {
            collection: database.collection(E::COLLECTION),
            _entity: PhantomData,
        }
    }

    async fn find_many(&self, filter: Document) -> StoreResult<Vec<E>> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        documents.into_iter().map(decode).collect()
    }
}

/// Filter selecting a record by id. Strings that are not ObjectIds cannot
/// name a stored record, so they yield `None`.
fn id_filter(id: &str) -> Option<Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
}

/// Convert a stored document into a record. `_id` is rendered as hex and
/// BSON dates as calendar days, the layouts records read.
fn decode<E: Entity>(mut document: Document) -> StoreResult<E> {
    for (_, value) in document.iter_mut() {
        match value {
            Bson::ObjectId(oid) => {
                let hex = oid.to_hex();
                *value = Bson::String(hex);
            }
            Bson::DateTime(at) => {
                let day = chrono::DateTime::from_timestamp_millis(at.timestamp_millis())
                    .ok_or_else(|| StoreError::Backend(format!("{} holds a date out of range", E::NAME)))?
                    .date_naive();
                *value = Bson::String(day.format("%Y-%m-%d").to_string());
            }
            _ => {}
        }
    }
    Ok(bson::from_document(document)?)
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MongoStore<E> {
    async fn find_all(&self) -> StoreResult<Vec<E>> {
        self.find_many(doc! {}).await
    }

    async fn find_one(&self, draft: &E::Draft) -> StoreResult<Option<E>> {
        let filter = bson::to_document(draft)?;
        self.collection.find_one(filter).await?.map(decode).transpose()
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        self.collection.find_one(filter).await?.map(decode).transpose()
    }

    async fn create(&self, draft: E::Draft) -> StoreResult<E> {
        let document = bson::to_document(&draft)?;
        let result = self.collection.insert_one(document).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend(format!("{} inserted without an ObjectId", E::NAME)))?;

        debug!(collection = E::COLLECTION, id = %id, "Inserted document");
        Ok(E::from_draft(id.to_hex(), draft))
    }

    async fn update_by_id(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };

        let fields = bson::to_document(&patch)?;
        if fields.is_empty() {
            // `$set` rejects an empty document; nothing to change
            return self.collection.find_one(filter).await?.map(decode).transpose();
        }

        self.collection
            .find_one_and_update(filter, doc! { "$set": fields })
            .await?
            .map(decode)
            .transpose()
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        self.collection
            .find_one_and_delete(filter)
            .await?
            .map(decode)
            .transpose()
    }
}

#[async_trait]
impl MovieStore for MongoStore<Movie> {
    async fn find_by_genre(&self, label: &str) -> StoreResult<Vec<Movie>> {
        // Equality against an array field matches any element
        self.find_many(doc! { "genre": label }).await
    }
}
