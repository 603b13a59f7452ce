//! Request flows shared by the movie and genre endpoints
//!
//! Each flow runs its steps strictly in order and touches the store at most
//! twice. Store faults propagate as [`ApiError::Store`].

use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::api::error::{ApiError, MessageResponse};
use crate::db::{DocumentStore, StoreError};
use crate::domain::Entity;
use crate::validation;

/// Log a store fault before it becomes a 500 response
fn store_fault<E: Entity>(operation: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |e| {
        error!(entity = E::NAME, operation, error = %e, "Store operation failed");
        ApiError::Store(e)
    }
}

/// Read a body into a typed draft or patch. Every record field holds text,
/// so numbers and booleans, alone or inside arrays, are taken as their text.
fn cast<T: DeserializeOwned>(body: Map<String, Value>) -> Result<T, serde_json::Error> {
    fn text(value: Value) -> Value {
        match value {
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            other => other,
        }
    }

    let fields = body
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Array(items) => Value::Array(items.into_iter().map(text).collect()),
                scalar => text(scalar),
            };
            (key, value)
        })
        .collect();

    serde_json::from_value(Value::Object(fields))
}

pub async fn list<E, S>(store: &S) -> Result<HttpResponse, ApiError>
where
    E: Entity,
    S: DocumentStore<E> + ?Sized,
{
    let records = store.find_all().await.map_err(store_fault::<E>("list"))?;
    Ok(HttpResponse::Ok().json(records))
}

/// Validate, reject duplicates, then create.
///
/// The duplicate check and the insert are separate store calls, so two
/// identical concurrent requests can both succeed.
pub async fn create<E, S>(store: &S, body: Map<String, Value>) -> Result<HttpResponse, ApiError>
where
    E: Entity,
    S: DocumentStore<E> + ?Sized,
{
    let failures = validation::validate(&body, E::RULES);
    if !failures.is_empty() {
        return Err(ApiError::Validation(failures));
    }

    let draft: E::Draft = cast(body)?;

    let existing = store.find_one(&draft).await.map_err(store_fault::<E>("find_one"))?;
    if existing.is_some() {
        return Err(ApiError::Duplicate(E::NAME));
    }

    let record = store.create(draft).await.map_err(store_fault::<E>("create"))?;
    info!(entity = E::NAME, id = %record.id(), "Record created");

    Ok(HttpResponse::Ok().json(record))
}

/// Update in place, then answer with a fresh read of the record
pub async fn update<E, S>(store: &S, id: String, body: Map<String, Value>) -> Result<HttpResponse, ApiError>
where
    E: Entity,
    S: DocumentStore<E> + ?Sized,
{
    let patch: E::Patch = cast(body)?;

    let previous = store.update_by_id(&id, patch).await.map_err(store_fault::<E>("update"))?;
    if previous.is_none() {
        return Err(ApiError::NotFound { entity: E::NAME, id });
    }

    let updated = store.find_by_id(&id).await.map_err(store_fault::<E>("find_by_id"))?;
    info!(entity = E::NAME, id = %id, "Record updated");

    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete<E, S>(store: &S, id: String) -> Result<HttpResponse, ApiError>
where
    E: Entity,
    S: DocumentStore<E> + ?Sized,
{
    let removed = store.delete_by_id(&id).await.map_err(store_fault::<E>("delete"))?;
    if removed.is_none() {
        return Err(ApiError::NotFound { entity: E::NAME, id });
    }

    info!(entity = E::NAME, id = %id, "Record deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("{} has been deleted", E::NAME))))
}
