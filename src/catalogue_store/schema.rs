//! SQLite schema for the movies catalogue.
//!
//! Join tables cascade on delete of either side, so removing a movie, genre
//! or person never leaves dangling links behind.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP,
};

const MOVIE_FK: ForeignKey = ForeignKey {
    foreign_table: "movies",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Cascade,
};

const GENRE_FK: ForeignKey = ForeignKey {
    foreign_table: "genres",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Cascade,
};

const PERSON_FK: ForeignKey = ForeignKey {
    foreign_table: "people",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Cascade,
};

// =============================================================================
// Core Tables
// =============================================================================

const MOVIES_TABLE: Table = Table {
    name: "movies",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("imdb_link", &SqlType::Text),
        sqlite_column!("picture_url", &SqlType::Text),
        sqlite_column!("release_date", &SqlType::Text, non_null = true), // RFC 3339
        sqlite_column!(
            "version",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "created_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[("idx_movies_name", "name")],
    unique_constraints: &[],
};

const GENRES_TABLE: Table = Table {
    name: "genres",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

const PEOPLE_TABLE: Table = Table {
    name: "people",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("surname", &SqlType::Text, non_null = true),
        sqlite_column!("role", &SqlType::Text, non_null = true), // PersonRole::to_db_str
    ],
    indices: &[("idx_people_surname", "surname")],
    unique_constraints: &[],
};

// =============================================================================
// Junction Tables
// =============================================================================

const MOVIES_IN_GENRES_TABLE: Table = Table {
    name: "movies_in_genres",
    columns: &[
        sqlite_column!(
            "movie_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&MOVIE_FK)
        ),
        sqlite_column!(
            "genre_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&GENRE_FK)
        ),
        sqlite_column!(
            "linked_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[("idx_movies_in_genres_genre", "genre_id")],
    unique_constraints: &[&["movie_id", "genre_id"]],
};

const PEOPLE_IN_MOVIES_TABLE: Table = Table {
    name: "people_in_movies",
    columns: &[
        sqlite_column!(
            "movie_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&MOVIE_FK)
        ),
        sqlite_column!(
            "person_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&PERSON_FK)
        ),
        sqlite_column!(
            "linked_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[("idx_people_in_movies_person", "person_id")],
    unique_constraints: &[&["movie_id", "person_id"]],
};

pub const CATALOGUE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[
        MOVIES_TABLE,
        GENRES_TABLE,
        PEOPLE_TABLE,
        MOVIES_IN_GENRES_TABLE,
        PEOPLE_IN_MOVIES_TABLE,
    ],
    migration: None,
}];
