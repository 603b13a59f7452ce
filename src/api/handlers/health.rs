//! Health check endpoint

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Server is running")]
    pub status: &'static str,
}

/// GET /health-check - Health check endpoint
#[utoipa::path(
    get,
    path = "/health-check",
    tag = "Server",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "Server is running",
    })
}
