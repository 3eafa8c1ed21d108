use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{config::Config, service::auth::hash_password, startup, state::AppState};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


/// Builds the application over a database holding every table.
async fn setup(config: Config) -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_expedition_tables()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    (test, startup::build_app(AppState::new(db, config)))
}

/// Sends a request and returns the status with the decoded JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Logs in through the token endpoint.
async fn login(app: &Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login/access-token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={}&password={}", email, password)))
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    body["access_token"].as_str().unwrap().to_string()
}
