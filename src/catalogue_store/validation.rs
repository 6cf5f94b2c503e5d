//! Validation for catalogue entities.
//!
//! Runs before entities reach the store, so the store only ever sees
//! well-formed names and links.

use super::models::{Genre, Movie, Person};
use std::fmt;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField {
        field: &'static str,
    },
    InvalidLink {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
            ValidationError::InvalidLink { field, value } => {
                write!(
                    f,
                    "Field '{}' must be an http(s) URL, got '{}'",
                    field, value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

fn require_non_blank(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn check_link(field: &'static str, value: &Option<String>) -> ValidationResult<()> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(()),
        Some(link) if link.starts_with("http://") || link.starts_with("https://") => Ok(()),
        Some(link) => Err(ValidationError::InvalidLink {
            field,
            value: link.to_string(),
        }),
    }
}

/// Validate a movie's scalar fields. Links are checked by the store.
pub fn validate_movie(movie: &Movie) -> ValidationResult<()> {
    require_non_blank("movie_name", &movie.name)?;
    check_link("imdb_link", &movie.imdb_link)?;
    check_link("picture_url", &movie.picture_url)?;
    Ok(())
}

pub fn validate_genre(genre: &Genre) -> ValidationResult<()> {
    require_non_blank("genre_name", &genre.name)
}

pub fn validate_person(person: &Person) -> ValidationResult<()> {
    require_non_blank("name", &person.name)?;
    require_non_blank("surname", &person.surname)?;
    Ok(())
}
