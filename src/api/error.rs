//! Error responses
//!
//! Handler paths answer with `{ message }` bodies while the router-level
//! fallbacks answer with `{ error }`. Clients depend on both shapes.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::StoreError;
use crate::validation::FieldError;

/// `{ message }` body used by handler responses
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "movie has been deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}

/// `{ error }` body used by the router fallbacks
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Not Found")]
    pub error: &'static str,
}

/// Body returned when a request fails validation
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body failed validation")]
    Validation(Vec<FieldError>),

    /// A record equal to the submitted one already exists
    #[error("That {0} already exist")]
    Duplicate(&'static str),

    #[error("cannot find any {entity} with ID {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The body passed validation but does not fit the record's field types
    #[error(transparent)]
    Cast(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate(_) | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Cast(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(errors) => response.json(ValidationErrorResponse {
                success: false,
                errors: errors.clone(),
            }),
            other => response.json(MessageResponse::new(other.to_string())),
        }
    }
}
