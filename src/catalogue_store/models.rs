//! Catalogue entities as stored in SQLite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// What a person does on a movie.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonRole {
    Actor,
    Director,
    Writer,
    Producer,
    Composer,
    Other,
}

impl PersonRole {
    /// Convert from database string representation
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "ACTOR" => PersonRole::Actor,
            "DIRECTOR" => PersonRole::Director,
            "WRITER" => PersonRole::Writer,
            "PRODUCER" => PersonRole::Producer,
            "COMPOSER" => PersonRole::Composer,
            _ => PersonRole::Other,
        }
    }

    /// Convert to database string representation
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PersonRole::Actor => "ACTOR",
            PersonRole::Director => "DIRECTOR",
            PersonRole::Writer => "WRITER",
            PersonRole::Producer => "PRODUCER",
            PersonRole::Composer => "COMPOSER",
            PersonRole::Other => "OTHER",
        }
    }
}

// =============================================================================
// Core Entities
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub role: PersonRole,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Movie with its genre and people links.
///
/// `version` is the optimistic-concurrency token: the store only accepts an
/// update whose `version` matches the stored row, and bumps it on success.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub imdb_link: Option<String>,
    pub picture_url: Option<String>,
    pub release_date: DateTime<Utc>,
    pub version: i64,
    pub genre_links: Vec<MovieGenreLink>,
    pub person_links: Vec<MoviePersonLink>,
}

impl Movie {
    pub fn genre_ids(&self) -> Vec<i64> {
        self.genre_links.iter().map(|l| l.genre_id).collect()
    }

    pub fn person_ids(&self) -> Vec<i64> {
        self.person_links.iter().map(|l| l.person_id).collect()
    }
}

// =============================================================================
// Join Entities
// =============================================================================

/// Movie <-> Genre join row.
///
/// `linked_at` is `None` until the row has been written; the store fills it
/// when the link is first inserted and never rewrites it afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieGenreLink {
    pub movie_id: i64,
    pub genre_id: i64,
    pub linked_at: Option<DateTime<Utc>>,
}

/// Movie <-> Person join row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoviePersonLink {
    pub movie_id: i64,
    pub person_id: i64,
    pub linked_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Resolved/Composite Types (API Responses)
// =============================================================================

/// Movie together with the genres and people its links point to.
#[derive(Clone, Debug, Serialize)]
pub struct MovieDetails {
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub people: Vec<Person>,
}
