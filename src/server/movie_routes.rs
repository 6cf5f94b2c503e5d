//! Movie endpoints.

use super::error_response::{created_or_error, json_or_error, no_content_or_error};
use super::state::{GuardedCatalogueStore, ServerState};
use crate::catalogue::forms::{MovieCreateForm, MovieEditForm};
use crate::catalogue::movies;
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

async fn list_movies(State(store): State<GuardedCatalogueStore>) -> Response {
    json_or_error(movies::list_movies(store.as_ref()))
}

async fn get_movie(State(store): State<GuardedCatalogueStore>, Path(id): Path<i64>) -> Response {
    json_or_error(movies::movie_details(store.as_ref(), id))
}

async fn get_new_movie_form(State(store): State<GuardedCatalogueStore>) -> Response {
    json_or_error(movies::new_movie_form(store.as_ref()))
}

async fn post_movie(
    State(store): State<GuardedCatalogueStore>,
    Json(form): Json<MovieCreateForm>,
) -> Response {
    created_or_error(movies::create_movie(store.as_ref(), form))
}

async fn get_edit_movie_form(
    State(store): State<GuardedCatalogueStore>,
    Path(id): Path<i64>,
) -> Response {
    json_or_error(movies::edit_movie_form(store.as_ref(), id))
}

async fn put_movie(
    State(store): State<GuardedCatalogueStore>,
    Path(id): Path<i64>,
    Json(form): Json<MovieEditForm>,
) -> Response {
    json_or_error(movies::update_movie(store.as_ref(), id, form))
}

async fn delete_movie(State(store): State<GuardedCatalogueStore>, Path(id): Path<i64>) -> Response {
    no_content_or_error(movies::delete_movie(store.as_ref(), id))
}

pub fn make_movie_routes(state: ServerState) -> Router {
    Router::new()
        .route("/v1/movies", get(list_movies).post(post_movie))
        .route("/v1/movies/new", get(get_new_movie_form))
        .route(
            "/v1/movies/{id}",
            get(get_movie).put(put_movie).delete(delete_movie),
        )
        .route("/v1/movies/{id}/edit", get(get_edit_movie_form))
        .with_state(state)
}
