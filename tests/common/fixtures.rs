//! Test fixture creation for the catalogue database

use super::constants::*;
use anyhow::Result;
use chrono::{DateTime, Utc};
use movies_catalogue_server::catalogue_store::{
    CatalogueStore, Genre, Movie, MovieGenreLink, MoviePersonLink, Person, PersonRole,
    SqliteCatalogueStore,
};
use tempfile::TempDir;

/// Creates a temporary catalogue with 3 genres, 2 people and 1 movie.
/// Returns the temp dir (keep it alive) and the opened store.
pub fn create_test_catalogue() -> Result<(TempDir, SqliteCatalogueStore)> {
    let dir = TempDir::new()?;
    let store = SqliteCatalogueStore::new(dir.path().join("catalogue.db"))?;

    for name in [GENRE_DRAMA_NAME, GENRE_SCIFI_NAME, GENRE_WAR_NAME] {
        store.insert_genre(&Genre {
            id: 0,
            name: name.to_string(),
        })?;
    }

    store.insert_person(&Person {
        id: 0,
        name: PERSON_DIRECTOR_NAME.to_string(),
        surname: PERSON_DIRECTOR_SURNAME.to_string(),
        role: PersonRole::Director,
    })?;
    store.insert_person(&Person {
        id: 0,
        name: PERSON_ACTOR_NAME.to_string(),
        surname: PERSON_ACTOR_SURNAME.to_string(),
        role: PersonRole::Actor,
    })?;

    store.insert_movie(&Movie {
        id: 0,
        name: MOVIE_SOLARIS_NAME.to_string(),
        imdb_link: Some("https://www.imdb.com/title/tt0069293/".to_string()),
        picture_url: None,
        release_date: DateTime::parse_from_rfc3339(MOVIE_SOLARIS_RELEASE)?.with_timezone(&Utc),
        version: 0,
        genre_links: [GENRE_DRAMA_ID, GENRE_SCIFI_ID]
            .into_iter()
            .map(|genre_id| MovieGenreLink {
                movie_id: 0,
                genre_id,
                linked_at: None,
            })
            .collect(),
        person_links: vec![MoviePersonLink {
            movie_id: 0,
            person_id: PERSON_DIRECTOR_ID,
            linked_at: None,
        }],
    })?;

    Ok((dir, store))
}
