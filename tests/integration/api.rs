//! HTTP routes against the real router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::test_app;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = test_app().await;

    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = send(&app, "GET", "/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_book_crud() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "Dune", "author": "Herbert", "isbn": "9780441013593"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["published_year"], Value::Null);

    let response = send(&app, "GET", "/books", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let response = send(&app, "PUT", "/books/1", Some(json!({"published_year": 1965}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["published_year"], 1965);
    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["isbn"], "9780441013593");

    let response = send(&app, "GET", "/books/1", None).await;
    assert_eq!(json_body(response).await, updated);

    let response = send(&app, "DELETE", "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "Book not found");
}

#[tokio::test]
async fn test_missing_book_is_404_for_every_verb() {
    let (app, _db) = test_app().await;

    let response = send(&app, "PUT", "/books/42", Some(json!({"title": "X"}))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/books/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_isbn_is_bad_request() {
    let (app, _db) = test_app().await;

    let book = json!({"title": "A", "author": "B", "isbn": "123"});
    let response = send(&app, "POST", "/books", Some(book.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "POST", "/books", Some(book)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "ISBN already exists");
}

#[tokio::test]
async fn test_isbn_too_long_is_rejected() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/books",
        Some(json!({"title": "A", "author": "B", "isbn": "12345678901234"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "BadValue");

    let response = send(&app, "POST", "/books", Some(json!({"title": "A", "author": "B"}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "PUT", "/books/1", Some(json!({"isbn": "12345678901234"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "BadValue");
}

#[tokio::test]
async fn test_user_create_and_lookup() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": "alice",
            "email": "alice@example.org",
            "password": "s3cret-pass",
            "id_type": "passport",
            "id_number": "P1234567"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert!(created.get("hashed_password").is_none());
    assert_eq!(created["is_active"], true);

    let response = send(&app, "GET", "/users/alice", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let found = json_body(response).await;
    assert_eq!(found["id_type"], "passport");
    assert_eq!(found["email"], "alice@example.org");

    let response = send(&app, "GET", "/users/nobody", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NoSuchUser");
}

#[tokio::test]
async fn test_collection_path_with_trailing_slash() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/books/",
        Some(json!({"title": "Emma", "author": "Austen"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "GET", "/books/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}
