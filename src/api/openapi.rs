//! OpenAPI 3.0 specification definition

use utoipa::OpenApi;

use crate::api::error::{ErrorResponse, MessageResponse, ValidationErrorResponse};
use crate::api::handlers::health::HealthResponse;
use crate::domain::{Genre, GenreDraft, GenrePatch, Movie, MovieDraft, MoviePatch};
use crate::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Catalog API",
        version = "1.0.0",
        description = "CRUD service for movies and genres backed by a document store",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Current server")
    ),
    tags(
        (name = "Server", description = "Server status"),
        (name = "Movies", description = "Movie records"),
        (name = "Genres", description = "Genre records")
    ),
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::movies::list_movies,
        crate::api::handlers::movies::create_movie,
        crate::api::handlers::movies::update_movie,
        crate::api::handlers::movies::delete_movie,
        crate::api::handlers::movies::list_movies_by_genre,
        crate::api::handlers::genres::list_genres,
        crate::api::handlers::genres::create_genre,
        crate::api::handlers::genres::update_genre,
        crate::api::handlers::genres::delete_genre,
    ),
    components(
        schemas(
            HealthResponse,
            Movie,
            MovieDraft,
            MoviePatch,
            Genre,
            GenreDraft,
            GenrePatch,
            FieldError,
            ValidationErrorResponse,
            MessageResponse,
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;
