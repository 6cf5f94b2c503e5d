//! Movie operations.

use super::forms::{MovieCreateForm, MovieEditForm, MovieEditView, MovieFormOptions, SelectOption};
use super::reconcile::{initial_links, reconcile_links};
use super::{CatalogueError, CatalogueResult};
use crate::catalogue_store::validation::validate_movie;
use crate::catalogue_store::{
    CatalogueStore, ConcurrencyConflict, Movie, MovieDetails, MovieGenreLink, MoviePersonLink,
};
use std::collections::HashSet;
use tracing::{debug, error, info};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn ensure_genres_exist(store: &dyn CatalogueStore, ids: &[i64]) -> CatalogueResult<()> {
    for &id in ids {
        if !store.genre_exists(id)? {
            return Err(CatalogueError::genre_not_found(id));
        }
    }
    Ok(())
}

fn ensure_people_exist(store: &dyn CatalogueStore, ids: &[i64]) -> CatalogueResult<()> {
    for &id in ids {
        if !store.person_exists(id)? {
            return Err(CatalogueError::person_not_found(id));
        }
    }
    Ok(())
}

fn form_options(
    store: &dyn CatalogueStore,
    selected_genres: &HashSet<i64>,
    selected_people: &HashSet<i64>,
) -> CatalogueResult<MovieFormOptions> {
    Ok(MovieFormOptions {
        genres: SelectOption::genres(&store.list_genres()?, selected_genres),
        people: SelectOption::people(&store.list_people()?, selected_people),
    })
}

pub fn list_movies(store: &dyn CatalogueStore) -> CatalogueResult<Vec<Movie>> {
    Ok(store.list_movies()?)
}

pub fn movie_details(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<MovieDetails> {
    store
        .get_movie_details(id)?
        .ok_or_else(|| CatalogueError::movie_not_found(id))
}

pub fn new_movie_form(store: &dyn CatalogueStore) -> CatalogueResult<MovieFormOptions> {
    form_options(store, &HashSet::new(), &HashSet::new())
}

pub fn create_movie(store: &dyn CatalogueStore, form: MovieCreateForm) -> CatalogueResult<Movie> {
    let genre_links: Vec<MovieGenreLink> = initial_links(0, form.selected_genres.as_deref())?;
    let person_links: Vec<MoviePersonLink> = initial_links(0, form.selected_people.as_deref())?;

    let movie = Movie {
        id: 0,
        name: form.movie_name.trim().to_string(),
        imdb_link: non_blank(form.imdb_link),
        picture_url: non_blank(form.picture_url),
        release_date: form.timestamp,
        version: 0,
        genre_links,
        person_links,
    };
    validate_movie(&movie)?;
    ensure_genres_exist(store, &movie.genre_ids())?;
    ensure_people_exist(store, &movie.person_ids())?;

    let id = store.insert_movie(&movie)?;
    info!(
        "Created movie {} '{}' with {} genres and {} people",
        id,
        movie.name,
        movie.genre_links.len(),
        movie.person_links.len()
    );
    store
        .get_movie(id)?
        .ok_or_else(|| CatalogueError::movie_not_found(id))
}

pub fn edit_movie_form(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<MovieEditView> {
    let movie = store
        .get_movie(id)?
        .ok_or_else(|| CatalogueError::movie_not_found(id))?;

    let selected_genres: HashSet<i64> = movie.genre_ids().into_iter().collect();
    let selected_people: HashSet<i64> = movie.person_ids().into_iter().collect();
    Ok(MovieEditView {
        form: MovieEditForm::from_movie(&movie),
        options: form_options(store, &selected_genres, &selected_people)?,
    })
}

/// Applies an edit submission to a stored movie.
///
/// Scalar fields are overwritten, genre and people links are reconciled
/// against the submitted selections, and the result is written back under
/// optimistic concurrency. A conflict on a movie that has since been
/// deleted reports `NotFound`; any other conflict is returned as is.
pub fn update_movie(
    store: &dyn CatalogueStore,
    id: i64,
    form: MovieEditForm,
) -> CatalogueResult<Movie> {
    if form.movie_id != id {
        return Err(CatalogueError::movie_not_found(id));
    }

    let mut movie = store
        .get_movie(id)?
        .ok_or_else(|| CatalogueError::movie_not_found(id))?;

    if let Some(version) = form.version {
        movie.version = version;
    }
    movie.name = form.movie_name.trim().to_string();
    movie.imdb_link = non_blank(form.imdb_link);
    movie.picture_url = non_blank(form.picture_url);
    movie.release_date = form.timestamp;

    let genre_delta = reconcile_links(
        &mut movie.genre_links,
        id,
        form.selected_genres.as_deref(),
    )?;
    let people_delta = reconcile_links(
        &mut movie.person_links,
        id,
        form.selected_people.as_deref(),
    )?;
    debug!(
        "Movie {} genres +{:?} -{:?}, people +{:?} -{:?}",
        id, genre_delta.added, genre_delta.removed, people_delta.added, people_delta.removed
    );

    validate_movie(&movie)?;
    ensure_genres_exist(store, &genre_delta.added)?;
    ensure_people_exist(store, &people_delta.added)?;

    match store.update_movie(&movie) {
        Ok(stored) => {
            info!("Updated movie {} to version {}", id, stored.version);
            Ok(stored)
        }
        Err(err) if err.downcast_ref::<ConcurrencyConflict>().is_some() => {
            if !store.movie_exists(id)? {
                return Err(CatalogueError::movie_not_found(id));
            }
            error!(
                "Concurrent modification of movie {} (expected version {})",
                id, movie.version
            );
            Err(CatalogueError::ConcurrencyConflict { movie_id: id })
        }
        Err(err) => Err(err.into()),
    }
}

pub fn delete_movie(store: &dyn CatalogueStore, id: i64) -> CatalogueResult<()> {
    if !store.delete_movie(id)? {
        return Err(CatalogueError::movie_not_found(id));
    }
    info!("Deleted movie {}", id);
    Ok(())
}
