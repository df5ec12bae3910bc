mod common;

use axum::http::{Method, StatusCode, header};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_register_then_login() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "username": "alice",
            "password": "pw1",
            "email": "a@x.com",
            "full_name": "Alice",
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["message"], "Registration successful");

    let response = login(&app, "alice", "pw1").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["full_name"], "Alice");
    assert!(body["user"].get("password_hash").is_none());

    let set_cookie = response.header(header::SET_COOKIE).unwrap();
    assert!(set_cookie.starts_with("todolist_session="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "username": "alice", "password": "pw1" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "All fields are required");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "username": "alice",
            "password": "pw1",
            "email": "not-an-email",
            "full_name": "Alice",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = test_app();
    assert_eq!(register(&app, "alice", "pw1").await.status, StatusCode::CREATED);

    let response = register(&app, "alice", "other").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Username or email already exists");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let app = test_app();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let app = test_app();
    register(&app, "alice", "pw1").await;

    let wrong = login(&app, "alice", "nope").await;
    let unknown = login(&app, "mallory", "pw1").await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json(), unknown.json());
    assert!(wrong.header(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_with_empty_fields_is_401() {
    let app = test_app();
    let response = login(&app, "", "").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user() {
    let app = test_app();
    let cookie = signed_in(&app, "alice").await;

    let response = send(&app, Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["username"], "alice");
    assert_eq!(response.json()["email"], "alice@example.com");
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/user", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Unauthorized");
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = test_app();
    let cookie = signed_in(&app, "alice").await;
    let (name, value) = cookie.split_once('=').unwrap();
    let tampered = format!("{name}=x{value}");

    let response = send(&app, Method::GET, "/api/user", Some(&tampered), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_from_another_server_is_rejected() {
    let app = test_app();
    let cookie = signed_in(&app, "alice").await;

    // Fresh app, fresh random secret
    let other = test_app();
    let response = send(&other, Method::GET, "/api/notes", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = test_app();
    let cookie = signed_in(&app, "alice").await;

    let response = send(&app, Method::POST, "/api/logout", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let set_cookie = response.header(header::SET_COOKIE).unwrap();
    assert!(set_cookie.starts_with("todolist_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}
