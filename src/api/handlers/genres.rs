//! Genre endpoints

use actix_web::{web, HttpResponse};

use crate::api::body::RequestBody;
use crate::api::error::{ApiError, MessageResponse, ValidationErrorResponse};
use crate::api::handlers::crud;
use crate::domain::{Genre, GenreDraft, GenrePatch};
use crate::AppState;

/// GET /genres - List every genre
#[utoipa::path(
    get,
    path = "/genres",
    tag = "Genres",
    responses(
        (status = 200, description = "All genres in store order", body = [Genre]),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_genres(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    crud::list::<Genre, _>(state.genres.as_ref()).await
}

/// POST /genres - Create a genre unless one with the same name exists
#[utoipa::path(
    post,
    path = "/genres",
    tag = "Genres",
    request_body = GenreDraft,
    responses(
        (status = 200, description = "Genre created", body = Genre),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Genre already exists", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_genre(
    state: web::Data<AppState>,
    body: RequestBody,
) -> Result<HttpResponse, ApiError> {
    crud::create::<Genre, _>(state.genres.as_ref(), body.into_inner()).await
}

/// PUT /genres/{id}
#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "Genres",
    params(
        ("id" = String, Path, description = "ID of the genre to update")
    ),
    request_body = GenrePatch,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 404, description = "Genre not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn update_genre(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: RequestBody,
) -> Result<HttpResponse, ApiError> {
    crud::update::<Genre, _>(state.genres.as_ref(), path.into_inner(), body.into_inner()).await
}

/// DELETE /genres/{id}
///
/// Movies keep their free-text genre labels; nothing cascades.
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "Genres",
    params(
        ("id" = String, Path, description = "ID of the genre to delete")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = MessageResponse),
        (status = 404, description = "Genre not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_genre(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    crud::delete::<Genre, _>(state.genres.as_ref(), path.into_inner()).await
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use crate::api::test_support::{failing_state, init_test_app, memory_state};

    #[actix_web::test]
    async fn test_list_genres() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "Drama" })).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/genres").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], json!("Drama"));
    }

    #[actix_web::test]
    async fn test_list_genres_store_failure() {
        let app = init_test_app!(failing_state());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/genres").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "connection refused" }));
    }

    #[actix_web::test]
    async fn test_create_empty_body_reports_one_error() {
        let state = memory_state();
        let app = init_test_app!(state.clone());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
        assert!(state.genres.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_without_body_reports_one_error() {
        let app = init_test_app!(memory_state());

        let resp = test::call_service(&app, test::TestRequest::post().uri("/genres").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["errors"][0]["msg"], json!("Name is required"));
    }

    #[actix_web::test]
    async fn test_create_from_form_body() {
        let state = memory_state();
        let app = init_test_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/genres")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=Drama")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], json!("Drama"));
        assert_eq!(state.genres.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_numeric_name_is_stored_as_text() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": 42 })).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], json!("42"));
    }

    #[actix_web::test]
    async fn test_create_duplicate_name() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["name"], json!("post1"));

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("That genre already exist"));
    }

    #[actix_web::test]
    async fn test_create_store_failure() {
        let app = init_test_app!(failing_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_update_genre() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["_id"].as_str().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/genres/{id}"))
            .set_json(json!({ "name": "post2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "_id": id, "name": "post2" }));
    }

    #[actix_web::test]
    async fn test_update_missing_genre() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::put().uri("/genres/123").set_json(json!({ "name": "post1" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("cannot find any genre with ID 123"));
    }

    #[actix_web::test]
    async fn test_update_missing_genre_without_body() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::put().uri("/genres/652f1c0e8d4b3a2f1c0e8d4b").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "cannot find any genre with ID 652f1c0e8d4b3a2f1c0e8d4b" }));
    }

    #[actix_web::test]
    async fn test_update_from_form_body() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["_id"].as_str().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/genres/{id}"))
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=post2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "_id": id, "name": "post2" }));
    }

    #[actix_web::test]
    async fn test_update_store_failure() {
        let app = init_test_app!(failing_state());

        let req = test::TestRequest::put().uri("/genres/123").set_json(json!({ "name": "post1" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_delete_genre() {
        let app = init_test_app!(memory_state());

        let req = test::TestRequest::post().uri("/genres").set_json(json!({ "name": "post1" })).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/genres/{}", created["_id"].as_str().unwrap());

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "genre has been deleted" }));

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_missing_genre() {
        let app = init_test_app!(memory_state());

        let resp = test::call_service(&app, test::TestRequest::delete().uri("/genres/123").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "cannot find any genre with ID 123" }));
    }

    #[actix_web::test]
    async fn test_delete_store_failure() {
        let app = init_test_app!(failing_state());

        let resp = test::call_service(&app, test::TestRequest::delete().uri("/genres/123").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "connection refused" }));
    }
}
