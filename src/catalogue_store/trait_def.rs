//! CatalogueStore trait definition.

use super::models::{Genre, Movie, MovieDetails, Person};
use anyhow::Result;

/// Trait for catalogue storage backends.
///
/// Write operations are atomic: each call either applies entirely or leaves
/// the store unchanged.
pub trait CatalogueStore: Send + Sync {
    // =========================================================================
    // Movies
    // =========================================================================

    /// All movies, without their link collections.
    fn list_movies(&self) -> Result<Vec<Movie>>;

    /// A movie with its genre and person links.
    fn get_movie(&self, id: i64) -> Result<Option<Movie>>;

    /// A movie with its linked genres and people resolved.
    fn get_movie_details(&self, id: i64) -> Result<Option<MovieDetails>>;

    /// Insert a movie and its links. `movie.id` and the links' `movie_id`
    /// are ignored; the new id is returned.
    fn insert_movie(&self, movie: &Movie) -> Result<i64>;

    /// Persist scalar fields and link collections of an existing movie.
    ///
    /// Fails with [`super::ConcurrencyConflict`] when no row with `movie.id`
    /// and `movie.version` exists. Returns the stored movie with its bumped
    /// version.
    fn update_movie(&self, movie: &Movie) -> Result<Movie>;

    /// Returns false if there was nothing to delete.
    fn delete_movie(&self, id: i64) -> Result<bool>;

    fn movie_exists(&self, id: i64) -> Result<bool>;

    // =========================================================================
    // Genres
    // =========================================================================

    fn list_genres(&self) -> Result<Vec<Genre>>;

    fn get_genre(&self, id: i64) -> Result<Option<Genre>>;

    /// `genre.id` is ignored; the new id is returned.
    fn insert_genre(&self, genre: &Genre) -> Result<i64>;

    /// Returns false if no genre with `genre.id` exists.
    fn update_genre(&self, genre: &Genre) -> Result<bool>;

    fn delete_genre(&self, id: i64) -> Result<bool>;

    fn genre_exists(&self, id: i64) -> Result<bool>;

    // =========================================================================
    // People
    // =========================================================================

    fn list_people(&self) -> Result<Vec<Person>>;

    fn get_person(&self, id: i64) -> Result<Option<Person>>;

    /// `person.id` is ignored; the new id is returned.
    fn insert_person(&self, person: &Person) -> Result<i64>;

    /// Returns false if no person with `person.id` exists.
    fn update_person(&self, person: &Person) -> Result<bool>;

    fn delete_person(&self, id: i64) -> Result<bool>;

    fn person_exists(&self, id: i64) -> Result<bool>;
}
