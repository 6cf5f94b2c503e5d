//! SQLite-backed catalogue store.

use super::models::*;
use super::schema::CATALOGUE_VERSIONED_SCHEMAS;
use super::trait_def::CatalogueStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Returned (inside `anyhow::Error`) by [`CatalogueStore::update_movie`] when
/// the movie row no longer matches the expected version, either because it
/// was modified or because it was deleted.
#[derive(Debug, thiserror::Error)]
#[error("Movie {movie_id} was modified or deleted by another request")]
pub struct ConcurrencyConflict {
    pub movie_id: i64,
}

#[derive(Clone)]
pub struct SqliteCatalogueStore {
    conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let latest_version = CATALOGUE_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &CATALOGUE_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating catalogue db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if db_version < BASE_DB_VERSION as i64 {
        bail!(
            "Not a catalogue database: found user_version {}, expected at least {}",
            db_version,
            BASE_DB_VERSION
        );
    }

    let mut current_version = (db_version - BASE_DB_VERSION as i64) as usize;
    if current_version > latest_version {
        bail!(
            "Catalogue database version {} is newer than the latest known version {}",
            current_version,
            latest_version
        );
    }

    CATALOGUE_VERSIONED_SCHEMAS[current_version]
        .validate(conn)
        .with_context(|| format!("Catalogue schema v{} failed validation", current_version))?;

    if current_version == latest_version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in CATALOGUE_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating catalogue db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
        }
        current_version = schema.version;
    }
    tx.pragma_update(None, "user_version", (BASE_DB_VERSION + current_version) as i64)?;
    tx.commit()?;
    Ok(())
}

fn parse_release_date(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

impl SqliteCatalogueStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        let mut conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open catalogue database {:?}", db_path))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrate_if_needed(&mut conn)?;

        let movie_count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
        let genre_count: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
        let person_count: i64 = conn.query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0))?;
        info!(
            "Opened catalogue: {} movies, {} genres, {} people",
            movie_count, genre_count, person_count
        );

        Ok(SqliteCatalogueStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // =========================================================================
    // Row helpers
    // =========================================================================

    fn parse_movie_row(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: row.get(0)?,
            name: row.get(1)?,
            imdb_link: row.get(2)?,
            picture_url: row.get(3)?,
            release_date: parse_release_date(4, row.get(4)?)?,
            version: row.get(5)?,
            genre_links: vec![],
            person_links: vec![],
        })
    }

    fn parse_genre_row(row: &rusqlite::Row) -> rusqlite::Result<Genre> {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn parse_person_row(row: &rusqlite::Row) -> rusqlite::Result<Person> {
        let role: String = row.get(3)?;
        Ok(Person {
            id: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            role: PersonRole::from_db_str(&role),
        })
    }

    fn get_genre_links(conn: &Connection, movie_id: i64) -> Result<Vec<MovieGenreLink>> {
        let mut stmt = conn.prepare_cached(
            "SELECT genre_id, linked_at FROM movies_in_genres WHERE movie_id = ?1 ORDER BY rowid",
        )?;
        let links = stmt
            .query_map(params![movie_id], |r| {
                Ok(MovieGenreLink {
                    movie_id,
                    genre_id: r.get(0)?,
                    linked_at: DateTime::from_timestamp(r.get(1)?, 0),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(links)
    }

    fn get_person_links(conn: &Connection, movie_id: i64) -> Result<Vec<MoviePersonLink>> {
        let mut stmt = conn.prepare_cached(
            "SELECT person_id, linked_at FROM people_in_movies WHERE movie_id = ?1 ORDER BY rowid",
        )?;
        let links = stmt
            .query_map(params![movie_id], |r| {
                Ok(MoviePersonLink {
                    movie_id,
                    person_id: r.get(0)?,
                    linked_at: DateTime::from_timestamp(r.get(1)?, 0),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(links)
    }

    fn get_movie_inner(conn: &Connection, id: i64) -> Result<Option<Movie>> {
        let movie = conn
            .query_row(
                "SELECT id, name, imdb_link, picture_url, release_date, version FROM movies WHERE id = ?1",
                params![id],
                Self::parse_movie_row,
            )
            .optional()?;

        match movie {
            Some(mut movie) => {
                movie.genre_links = Self::get_genre_links(conn, id)?;
                movie.person_links = Self::get_person_links(conn, id)?;
                Ok(Some(movie))
            }
            None => Ok(None),
        }
    }

    fn exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
        let found = conn
            .query_row(
                &format!("SELECT 1 FROM {} WHERE id = ?1", table),
                params![id],
                |r| r.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Runs `f` inside `BEGIN IMMEDIATE ... COMMIT`, rolling back on error.
    fn write<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn.lock().unwrap();
        conn.execute("BEGIN IMMEDIATE", [])?;

        match f(&conn) {
            Ok(value) => {
                conn.execute("COMMIT", [])?;
                Ok(value)
            }
            Err(e) => {
                let _ = conn.execute("ROLLBACK", []);
                Err(e)
            }
        }
    }
}

impl CatalogueStore for SqliteCatalogueStore {
    fn list_movies(&self) -> Result<Vec<Movie>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, imdb_link, picture_url, release_date, version FROM movies ORDER BY id",
        )?;
        let movies = stmt
            .query_map([], Self::parse_movie_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
    }

    fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
        let conn = self.conn.lock().unwrap();
        Self::get_movie_inner(&conn, id)
    }

    fn get_movie_details(&self, id: i64) -> Result<Option<MovieDetails>> {
        let conn = self.conn.lock().unwrap();
        let movie = match Self::get_movie_inner(&conn, id)? {
            Some(movie) => movie,
            None => return Ok(None),
        };

        let mut stmt = conn.prepare_cached(
            "SELECT g.id, g.name FROM genres g
             INNER JOIN movies_in_genres mg ON mg.genre_id = g.id
             WHERE mg.movie_id = ?1
             ORDER BY g.name",
        )?;
        let genres = stmt
            .query_map(params![id], Self::parse_genre_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare_cached(
            "SELECT p.id, p.name, p.surname, p.role FROM people p
             INNER JOIN people_in_movies pm ON pm.person_id = p.id
             WHERE pm.movie_id = ?1
             ORDER BY p.surname, p.name",
        )?;
        let people = stmt
            .query_map(params![id], Self::parse_person_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Some(MovieDetails {
            movie,
            genres,
            people,
        }))
    }

    fn insert_movie(&self, movie: &Movie) -> Result<i64> {
        self.write(|conn| {
            conn.execute(
                "INSERT INTO movies (name, imdb_link, picture_url, release_date) VALUES (?1, ?2, ?3, ?4)",
                params![
                    &movie.name,
                    &movie.imdb_link,
                    &movie.picture_url,
                    movie.release_date.to_rfc3339(),
                ],
            )?;
            let movie_id = conn.last_insert_rowid();

            for link in &movie.genre_links {
                conn.execute(
                    "INSERT INTO movies_in_genres (movie_id, genre_id) VALUES (?1, ?2)",
                    params![movie_id, link.genre_id],
                )
                .with_context(|| format!("Failed to link genre {}", link.genre_id))?;
            }
            for link in &movie.person_links {
                conn.execute(
                    "INSERT INTO people_in_movies (movie_id, person_id) VALUES (?1, ?2)",
                    params![movie_id, link.person_id],
                )
                .with_context(|| format!("Failed to link person {}", link.person_id))?;
            }
            Ok(movie_id)
        })
    }

    fn update_movie(&self, movie: &Movie) -> Result<Movie> {
        self.write(|conn| {
            let updated = conn.execute(
                "UPDATE movies SET name = ?1, imdb_link = ?2, picture_url = ?3, release_date = ?4,
                 version = version + 1 WHERE id = ?5 AND version = ?6",
                params![
                    &movie.name,
                    &movie.imdb_link,
                    &movie.picture_url,
                    movie.release_date.to_rfc3339(),
                    movie.id,
                    movie.version,
                ],
            )?;
            if updated == 0 {
                return Err(ConcurrencyConflict { movie_id: movie.id }.into());
            }

            let wanted: HashSet<i64> = movie.genre_ids().into_iter().collect();
            let stored: HashSet<i64> = Self::get_genre_links(conn, movie.id)?
                .into_iter()
                .map(|l| l.genre_id)
                .collect();
            for genre_id in stored.difference(&wanted) {
                conn.execute(
                    "DELETE FROM movies_in_genres WHERE movie_id = ?1 AND genre_id = ?2",
                    params![movie.id, genre_id],
                )?;
            }
            for link in &movie.genre_links {
                if !stored.contains(&link.genre_id) {
                    conn.execute(
                        "INSERT INTO movies_in_genres (movie_id, genre_id) VALUES (?1, ?2)",
                        params![movie.id, link.genre_id],
                    )
                    .with_context(|| format!("Failed to link genre {}", link.genre_id))?;
                }
            }

            let wanted: HashSet<i64> = movie.person_ids().into_iter().collect();
            let stored: HashSet<i64> = Self::get_person_links(conn, movie.id)?
                .into_iter()
                .map(|l| l.person_id)
                .collect();
            for person_id in stored.difference(&wanted) {
                conn.execute(
                    "DELETE FROM people_in_movies WHERE movie_id = ?1 AND person_id = ?2",
                    params![movie.id, person_id],
                )?;
            }
            for link in &movie.person_links {
                if !stored.contains(&link.person_id) {
                    conn.execute(
                        "INSERT INTO people_in_movies (movie_id, person_id) VALUES (?1, ?2)",
                        params![movie.id, link.person_id],
                    )
                    .with_context(|| format!("Failed to link person {}", link.person_id))?;
                }
            }

            debug!("Updated movie {} from version {}", movie.id, movie.version);
            Self::get_movie_inner(conn, movie.id)?
                .ok_or_else(|| anyhow!("Movie {} vanished during update", movie.id))
        })
    }

    fn delete_movie(&self, id: i64) -> Result<bool> {
        self.write(|conn| {
            let deleted = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
            Ok(deleted > 0)
        })
    }

    fn movie_exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        Self::exists(&conn, "movies", id)
    }

    fn list_genres(&self) -> Result<Vec<Genre>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name FROM genres ORDER BY name, id")?;
        let genres = stmt
            .query_map([], Self::parse_genre_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(genres)
    }

    fn get_genre(&self, id: i64) -> Result<Option<Genre>> {
        let conn = self.conn.lock().unwrap();
        Ok(conn
            .query_row(
                "SELECT id, name FROM genres WHERE id = ?1",
                params![id],
                Self::parse_genre_row,
            )
            .optional()?)
    }

    fn insert_genre(&self, genre: &Genre) -> Result<i64> {
        self.write(|conn| {
            conn.execute("INSERT INTO genres (name) VALUES (?1)", params![&genre.name])?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn update_genre(&self, genre: &Genre) -> Result<bool> {
        self.write(|conn| {
            let updated = conn.execute(
                "UPDATE genres SET name = ?1 WHERE id = ?2",
                params![&genre.name, genre.id],
            )?;
            Ok(updated > 0)
        })
    }

    fn delete_genre(&self, id: i64) -> Result<bool> {
        self.write(|conn| {
            let deleted = conn.execute("DELETE FROM genres WHERE id = ?1", params![id])?;
            Ok(deleted > 0)
        })
    }

    fn genre_exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        Self::exists(&conn, "genres", id)
    }

    fn list_people(&self) -> Result<Vec<Person>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, name, surname, role FROM people ORDER BY surname, name, id")?;
        let people = stmt
            .query_map([], Self::parse_person_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(people)
    }

    fn get_person(&self, id: i64) -> Result<Option<Person>> {
        let conn = self.conn.lock().unwrap();
        Ok(conn
            .query_row(
                "SELECT id, name, surname, role FROM people WHERE id = ?1",
                params![id],
                Self::parse_person_row,
            )
            .optional()?)
    }

    fn insert_person(&self, person: &Person) -> Result<i64> {
        self.write(|conn| {
            conn.execute(
                "INSERT INTO people (name, surname, role) VALUES (?1, ?2, ?3)",
                params![&person.name, &person.surname, person.role.to_db_str()],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn update_person(&self, person: &Person) -> Result<bool> {
        self.write(|conn| {
            let updated = conn.execute(
                "UPDATE people SET name = ?1, surname = ?2, role = ?3 WHERE id = ?4",
                params![
                    &person.name,
                    &person.surname,
                    person.role.to_db_str(),
                    person.id
                ],
            )?;
            Ok(updated > 0)
        })
    }

    fn delete_person(&self, id: i64) -> Result<bool> {
        self.write(|conn| {
            let deleted = conn.execute("DELETE FROM people WHERE id = ?1", params![id])?;
            Ok(deleted > 0)
        })
    }

    fn person_exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        Self::exists(&conn, "people", id)
    }
}
