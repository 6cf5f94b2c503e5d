//! Request and response shapes for the catalogue forms.

use crate::catalogue_store::{Genre, Movie, Person, PersonRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry of a multi-select control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn genres(genres: &[Genre], selected: &HashSet<i64>) -> Vec<SelectOption> {
        genres
            .iter()
            .map(|g| SelectOption {
                text: g.name.clone(),
                value: g.id.to_string(),
                selected: selected.contains(&g.id),
            })
            .collect()
    }

    pub fn people(people: &[Person], selected: &HashSet<i64>) -> Vec<SelectOption> {
        people
            .iter()
            .map(|p| SelectOption {
                text: p.full_name(),
                value: p.id.to_string(),
                selected: selected.contains(&p.id),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieFormOptions {
    pub genres: Vec<SelectOption>,
    pub people: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreateForm {
    pub movie_name: String,
    #[serde(default)]
    pub imdb_link: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub selected_genres: Option<Vec<String>>,
    #[serde(default)]
    pub selected_people: Option<Vec<String>>,
}

/// Edit submission. `version`, when present, is the concurrency token the
/// client loaded the movie at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieEditForm {
    pub movie_id: i64,
    #[serde(default)]
    pub version: Option<i64>,
    pub movie_name: String,
    #[serde(default)]
    pub imdb_link: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub selected_genres: Option<Vec<String>>,
    #[serde(default)]
    pub selected_people: Option<Vec<String>>,
}

impl MovieEditForm {
    /// Prefills the form from a stored movie, selecting its current links.
    pub fn from_movie(movie: &Movie) -> Self {
        MovieEditForm {
            movie_id: movie.id,
            version: Some(movie.version),
            movie_name: movie.name.clone(),
            imdb_link: movie.imdb_link.clone(),
            picture_url: movie.picture_url.clone(),
            timestamp: movie.release_date,
            selected_genres: Some(
                movie
                    .genre_ids()
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            ),
            selected_people: Some(
                movie
                    .person_ids()
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            ),
        }
    }
}

/// Prefilled edit form plus the options to render it with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieEditView {
    pub form: MovieEditForm,
    pub options: MovieFormOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreForm {
    pub genre_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonForm {
    pub name: String,
    pub surname: String,
    pub role: PersonRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_options_mark_selected_people() {
        let people = vec![
            Person {
                id: 1,
                name: "Ridley".to_string(),
                surname: "Scott".to_string(),
                role: PersonRole::Director,
            },
            Person {
                id: 2,
                name: "Sigourney".to_string(),
                surname: "Weaver".to_string(),
                role: PersonRole::Actor,
            },
        ];
        let selected: HashSet<i64> = [2].into_iter().collect();

        let options = SelectOption::people(&people, &selected);

        assert_eq!(
            options,
            vec![
                SelectOption {
                    text: "Ridley Scott".to_string(),
                    value: "1".to_string(),
                    selected: false,
                },
                SelectOption {
                    text: "Sigourney Weaver".to_string(),
                    value: "2".to_string(),
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn create_form_selections_are_optional() {
        let form: MovieCreateForm = serde_json::from_value(serde_json::json!({
            "movie_name": "Solaris",
            "timestamp": "1972-03-20T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(form.movie_name, "Solaris");
        assert!(form.imdb_link.is_none());
        assert!(form.selected_genres.is_none());
        assert!(form.selected_people.is_none());
    }

    #[test]
    fn person_form_parses_role() {
        let form: PersonForm = serde_json::from_value(serde_json::json!({
            "name": "Andrei",
            "surname": "Tarkovsky",
            "role": "DIRECTOR"
        }))
        .unwrap();
        assert_eq!(form.role, PersonRole::Director);
    }
}
