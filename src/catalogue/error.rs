use super::reconcile::ReconcileError;
use crate::catalogue_store::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Malformed identifier '{0}'")]
    MalformedIdentifier(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The movie still exists but changed since it was loaded.
    #[error("Movie {movie_id} was modified by another request")]
    ConcurrencyConflict { movie_id: i64 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl CatalogueError {
    pub fn movie_not_found(id: i64) -> Self {
        CatalogueError::NotFound { entity: "movie", id }
    }

    pub fn genre_not_found(id: i64) -> Self {
        CatalogueError::NotFound { entity: "genre", id }
    }

    pub fn person_not_found(id: i64) -> Self {
        CatalogueError::NotFound {
            entity: "person",
            id,
        }
    }
}

impl From<ReconcileError> for CatalogueError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::MalformedIdentifier(raw) => CatalogueError::MalformedIdentifier(raw),
        }
    }
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
