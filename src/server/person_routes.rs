use super::error_response::{created_or_error, json_or_error, no_content_or_error};
use super::state::{GuardedCatalogueStore, ServerState};
use crate::catalogue::forms::PersonForm;
use crate::catalogue::people;
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

async fn list_people(State(store): State<GuardedCatalogueStore>) -> Response {
    json_or_error(people::list_people(store.as_ref()))
}

async fn get_person(State(store): State<GuardedCatalogueStore>, Path(id): Path<i64>) -> Response {
    json_or_error(people::person_details(store.as_ref(), id))
}

async fn post_person(
    State(store): State<GuardedCatalogueStore>,
    Json(form): Json<PersonForm>,
) -> Response {
    created_or_error(people::create_person(store.as_ref(), form))
}

async fn put_person(
    State(store): State<GuardedCatalogueStore>,
    Path(id): Path<i64>,
    Json(form): Json<PersonForm>,
) -> Response {
    json_or_error(people::update_person(store.as_ref(), id, form))
}

async fn delete_person(
    State(store): State<GuardedCatalogueStore>,
    Path(id): Path<i64>,
) -> Response {
    no_content_or_error(people::delete_person(store.as_ref(), id))
}

pub fn make_person_routes(state: ServerState) -> Router {
    Router::new()
        .route("/v1/people", get(list_people).post(post_person))
        .route(
            "/v1/people/{id}",
            get(get_person).put(put_person).delete(delete_person),
        )
        .with_state(state)
}
