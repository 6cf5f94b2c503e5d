//! Shared constants for end-to-end tests
//!
//! When the seeded catalogue changes, update only this file.

// ============================================================================
// Seeded Catalogue
// ============================================================================

pub const GENRE_DRAMA_ID: i64 = 1;
pub const GENRE_DRAMA_NAME: &str = "Drama";

pub const GENRE_SCIFI_ID: i64 = 2;
pub const GENRE_SCIFI_NAME: &str = "Science Fiction";

pub const GENRE_WAR_ID: i64 = 3;
pub const GENRE_WAR_NAME: &str = "War";

pub const PERSON_DIRECTOR_ID: i64 = 1;
pub const PERSON_DIRECTOR_NAME: &str = "Andrei";
pub const PERSON_DIRECTOR_SURNAME: &str = "Tarkovsky";

pub const PERSON_ACTOR_ID: i64 = 2;
pub const PERSON_ACTOR_NAME: &str = "Natalya";
pub const PERSON_ACTOR_SURNAME: &str = "Bondarchuk";

/// Seeded movie linked to Drama + Science Fiction and the director.
pub const MOVIE_SOLARIS_ID: i64 = 1;
pub const MOVIE_SOLARIS_NAME: &str = "Solaris";
pub const MOVIE_SOLARIS_RELEASE: &str = "1972-03-20T00:00:00Z";

/// Identifier that is never seeded.
pub const MISSING_ID: i64 = 9_999;

// ============================================================================
// Timeouts
// ============================================================================

pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
