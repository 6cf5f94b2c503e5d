use crate::catalogue::{CatalogueError, CatalogueResult};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn catalogue_error_response(err: CatalogueError) -> Response {
    let (status, message) = match &err {
        CatalogueError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        CatalogueError::MalformedIdentifier(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        CatalogueError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        CatalogueError::ConcurrencyConflict { .. } => (StatusCode::CONFLICT, err.to_string()),
        CatalogueError::Storage(e) => {
            error!("Storage failure: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// 200 with the value as JSON, or the mapped error.
pub fn json_or_error<T: Serialize>(result: CatalogueResult<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(err) => catalogue_error_response(err),
    }
}

pub fn created_or_error<T: Serialize>(result: CatalogueResult<T>) -> Response {
    match result {
        Ok(value) => (StatusCode::CREATED, Json(value)).into_response(),
        Err(err) => catalogue_error_response(err),
    }
}

pub fn no_content_or_error(result: CatalogueResult<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => catalogue_error_response(err),
    }
}
