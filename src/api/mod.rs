//! API module - HTTP routes and handlers

pub mod body;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod openapi;

use actix_web::{web, Resource};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;

/// A route table entry, served with or without a trailing slash. Methods
/// without a route on the resource get the same 404 answer as unknown paths.
fn resource(path: &str) -> Resource {
    web::resource(vec![path.to_string(), format!("{path}/")])
        .default_service(web::to(fallback::not_found))
}

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            resource("/health-check")
                .route(web::get().to(handlers::health::health_check))
        )
        .service(
            web::scope("/movies")
                // More specific routes first
                .service(
                    resource("/genre/{genre_name}")
                        .route(web::get().to(handlers::movies::list_movies_by_genre))
                )
                .service(
                    resource("")
                        .route(web::get().to(handlers::movies::list_movies))
                        .route(web::post().to(handlers::movies::create_movie))
                )
                .service(
                    resource("/{id}")
                        .route(web::put().to(handlers::movies::update_movie))
                        .route(web::delete().to(handlers::movies::delete_movie))
                )
        )
        .service(
            web::scope("/genres")
                .service(
                    resource("")
                        .route(web::get().to(handlers::genres::list_genres))
                        .route(web::post().to(handlers::genres::create_genre))
                )
                .service(
                    resource("/{id}")
                        .route(web::put().to(handlers::genres::update_genre))
                        .route(web::delete().to(handlers::genres::delete_genre))
                )
        )
        // Swagger UI and OpenAPI document
        .service(
            SwaggerUi::new("/api-docs/{_:.*}")
                .url("/openapi.json", ApiDoc::openapi())
        );
}
