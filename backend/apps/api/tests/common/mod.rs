//! Shared helpers for HTTP integration tests.
//!
//! The app runs on in-memory repositories with the cheapest Argon2 cost,
//! so no database is needed.

#![allow(dead_code)]

use std::path::PathBuf;

use auth::{AuthConfig, InMemoryUserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use notes::InMemoryNoteRepository;
use platform::password::HashCost;
use serde_json::{Value, json};
use todolist::{AppConfig, build_app};
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        auth: AuthConfig {
            hash_cost: HashCost::minimal(),
            ..AuthConfig::development()
        },
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../static"),
        cors_origins: vec!["http://localhost:8080".to_string()],
    }
}

pub fn test_app() -> Router {
    build_app(
        InMemoryUserRepository::new(),
        InMemoryNoteRepository::new(),
        test_config(),
    )
    .expect("test app should build")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// `name=value` part of the Set-Cookie header
    pub fn cookie(&self) -> Option<String> {
        self.header(header::SET_COOKIE)
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn register(app: &Router, username: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "username": username,
            "password": password,
            "email": format!("{username}@example.com"),
            "full_name": username.to_uppercase(),
        })),
    )
    .await
}

pub async fn login(app: &Router, username: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

/// Register and log in, returning the session cookie
pub async fn signed_in(app: &Router, username: &str) -> String {
    let password = format!("{username}-password");
    assert_eq!(register(app, username, &password).await.status, StatusCode::CREATED);
    let response = login(app, username, &password).await;
    assert_eq!(response.status, StatusCode::OK);
    response.cookie().expect("login should set a cookie")
}

pub async fn create_note(app: &Router, cookie: &str, title: &str, content: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/notes",
        Some(cookie),
        Some(json!({ "title": title, "content": content })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
    response.json()
}
