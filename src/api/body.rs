//! Request body extractor for create and update routes
//!
//! Accepts JSON and url-encoded form bodies. A request without a body reads
//! as an empty object, so it reaches validation instead of failing early.

use actix_web::{dev::Payload, error::InternalError, web, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::api::fallback;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is not a JSON object")]
    NotAnObject,
}

/// Top-level fields of the request body
#[derive(Debug)]
pub struct RequestBody(pub Map<String, Value>);

impl RequestBody {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl FromRequest for RequestBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let bytes = web::Bytes::from_request(&req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            parse(req.content_type(), &bytes).map(RequestBody).map_err(|err| {
                warn!(path = %req.path(), error = %err, "Rejected request body");
                InternalError::from_response(err, fallback::internal_server_error()).into()
            })
        })
    }
}

fn parse(content_type: &str, bytes: &[u8]) -> Result<Map<String, Value>, BodyError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    if content_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        return Ok(parse_form(bytes));
    }

    match serde_json::from_slice(bytes)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(BodyError::NotAnObject),
    }
}

/// Form fields become strings. A repeated key, or one written as `key[]`,
/// collects its values into an array.
fn parse_form(bytes: &[u8]) -> Map<String, Value> {
    let mut fields = Map::new();

    for (key, value) in url::form_urlencoded::parse(bytes) {
        let listed = key.ends_with("[]");
        let key = if listed {
            key[..key.len() - 2].to_string()
        } else {
            key.into_owned()
        };
        let value = Value::String(value.into_owned());

        match fields.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if listed => {
                fields.insert(key, Value::Array(vec![value]));
            }
            None => {
                fields.insert(key, value);
            }
        }
    }

    fields
}
