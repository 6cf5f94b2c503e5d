use super::error_response::{created_or_error, json_or_error, no_content_or_error};
use super::state::{GuardedCatalogueStore, ServerState};
use crate::catalogue::forms::GenreForm;
use crate::catalogue::genres;
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

async fn list_genres(State(store): State<GuardedCatalogueStore>) -> Response {
    json_or_error(genres::list_genres(store.as_ref()))
}

async fn get_genre(State(store): State<GuardedCatalogueStore>, Path(id): Path<i64>) -> Response {
    json_or_error(genres::genre_details(store.as_ref(), id))
}

async fn post_genre(
    State(store): State<GuardedCatalogueStore>,
    Json(form): Json<GenreForm>,
) -> Response {
    created_or_error(genres::create_genre(store.as_ref(), form))
}

async fn put_genre(
    State(store): State<GuardedCatalogueStore>,
    Path(id): Path<i64>,
    Json(form): Json<GenreForm>,
) -> Response {
    json_or_error(genres::update_genre(store.as_ref(), id, form))
}

async fn delete_genre(State(store): State<GuardedCatalogueStore>, Path(id): Path<i64>) -> Response {
    no_content_or_error(genres::delete_genre(store.as_ref(), id))
}

pub fn make_genre_routes(state: ServerState) -> Router {
    Router::new()
        .route("/v1/genres", get(list_genres).post(post_genre))
        .route(
            "/v1/genres/{id}",
            get(get_genre).put(put_genre).delete(delete_genre),
        )
        .with_state(state)
}
