//! Router-level fallbacks for unmatched routes and unreadable bodies

use actix_web::HttpResponse;

use crate::api::error::ErrorResponse;

/// Answer for any method and path without a handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse { error: "Not Found" })
}

/// Answer for a request body that cannot be read
pub fn internal_server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal Server Error",
    })
}
