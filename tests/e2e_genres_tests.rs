//! End-to-end tests for the genre endpoints

mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_genres_sorted_by_name() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.list_genres().await;
    assert_eq!(response.status(), StatusCode::OK);

    let genres: Value = response.json().await.unwrap();
    let names: Vec<&str> = genres
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec![GENRE_DRAMA_NAME, GENRE_SCIFI_NAME, GENRE_WAR_NAME]);
}

#[tokio::test]
async fn test_genre_lifecycle() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.create_genre(&json!({ "genre_name": "Mystery" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .update_genre(id, &json!({ "genre_name": "Thriller" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let genre: Value = client.get_genre(id).await.json().await.unwrap();
    assert_eq!(genre["name"], "Thriller");

    let response = client.delete_genre(id).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get_genre(id).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_genre_with_blank_name() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.create_genre(&json!({ "genre_name": "   " })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_missing_genre() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .update_genre(MISSING_ID, &json!({ "genre_name": "Western" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_genre_unlinks_movies() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.delete_genre(GENRE_DRAMA_ID).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let details: Value = client
        .get_movie(MOVIE_SOLARIS_ID)
        .await
        .json()
        .await
        .unwrap();
    let genres = details["genres"].as_array().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0]["id"], GENRE_SCIFI_ID);
}
