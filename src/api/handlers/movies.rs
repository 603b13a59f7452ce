//! Movie endpoints

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::api::body::RequestBody;
use crate::api::error::{ApiError, MessageResponse, ValidationErrorResponse};
use crate::api::handlers::crud;
use crate::domain::{Movie, MovieDraft, MoviePatch};
use crate::AppState;

/// GET /movies - List every movie
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "All movies in store order", body = [Movie]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_movies(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    crud::list::<Movie, _>(state.movies.as_ref()).await
}

/// POST /movies - Create a movie unless an identical one exists
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = MovieDraft,
    responses(
        (status = 200, description = "Movie created", body = Movie),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Movie already exists", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_movie(
    state: web::Data<AppState>,
    body: RequestBody,
) -> Result<HttpResponse, ApiError> {
    crud::create::<Movie, _>(state.movies.as_ref(), body.into_inner()).await
}

/// PUT /movies/{id} - Update a movie and return its new state
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "ID of the movie to update")
    ),
    request_body = MoviePatch,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn update_movie(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: RequestBody,
) -> Result<HttpResponse, ApiError> {
    crud::update::<Movie, _>(state.movies.as_ref(), path.into_inner(), body.into_inner()).await
}

/// DELETE /movies/{id}
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "ID of the movie to delete")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_movie(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    crud::delete::<Movie, _>(state.movies.as_ref(), path.into_inner()).await
}

/// GET /movies/genre/{genre_name} - Movies tagged with a genre label
#[utoipa::path(
    get,
    path = "/movies/genre/{genre_name}",
    tag = "Movies",
    params(
        ("genre_name" = String, Path, description = "Exact genre label to filter by")
    ),
    responses(
        (status = 200, description = "Matching movies, possibly none", body = [Movie]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_movies_by_genre(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let genre_name = path.into_inner();

    match state.movies.find_by_genre(&genre_name).await {
        Ok(movies) => Ok(HttpResponse::Ok().json(movies)),
        Err(e) => {
            error!(genre = %genre_name, error = %e, "Failed to fetch movies by genre");
            Err(e.into())
        }
    }
}
