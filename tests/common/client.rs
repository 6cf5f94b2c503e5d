//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per catalogue endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    // ========================================================================
    // Server
    // ========================================================================

    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    // ========================================================================
    // Movies
    // ========================================================================

    pub async fn list_movies(&self) -> Response {
        self.get("/v1/movies").await
    }

    pub async fn get_movie(&self, id: i64) -> Response {
        self.get(&format!("/v1/movies/{}", id)).await
    }

    /// Raw path variant for malformed ids.
    pub async fn get_movie_raw(&self, id: &str) -> Response {
        self.get(&format!("/v1/movies/{}", id)).await
    }

    pub async fn get_new_movie_form(&self) -> Response {
        self.get("/v1/movies/new").await
    }

    pub async fn create_movie(&self, form: &Value) -> Response {
        self.post("/v1/movies", form).await
    }

    pub async fn get_edit_movie_form(&self, id: i64) -> Response {
        self.get(&format!("/v1/movies/{}/edit", id)).await
    }

    pub async fn update_movie(&self, id: i64, form: &Value) -> Response {
        self.put(&format!("/v1/movies/{}", id), form).await
    }

    pub async fn delete_movie(&self, id: i64) -> Response {
        self.delete(&format!("/v1/movies/{}", id)).await
    }

    // ========================================================================
    // Genres
    // ========================================================================

    pub async fn list_genres(&self) -> Response {
        self.get("/v1/genres").await
    }

    pub async fn get_genre(&self, id: i64) -> Response {
        self.get(&format!("/v1/genres/{}", id)).await
    }

    pub async fn create_genre(&self, form: &Value) -> Response {
        self.post("/v1/genres", form).await
    }

    pub async fn update_genre(&self, id: i64, form: &Value) -> Response {
        self.put(&format!("/v1/genres/{}", id), form).await
    }

    pub async fn delete_genre(&self, id: i64) -> Response {
        self.delete(&format!("/v1/genres/{}", id)).await
    }

    // ========================================================================
    // People
    // ========================================================================

    pub async fn list_people(&self) -> Response {
        self.get("/v1/people").await
    }

    pub async fn get_person(&self, id: i64) -> Response {
        self.get(&format!("/v1/people/{}", id)).await
    }

    pub async fn create_person(&self, form: &Value) -> Response {
        self.post("/v1/people", form).await
    }

    pub async fn update_person(&self, id: i64, form: &Value) -> Response {
        self.put(&format!("/v1/people/{}", id), form).await
    }

    pub async fn delete_person(&self, id: i64) -> Response {
        self.delete(&format!("/v1/people/{}", id)).await
    }
}
