//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use common::DatabaseConfig;
use domain::FixedClock;
use user_service_lib::{api::create_router, build_state, infra::Database};

/// Open a fresh in-memory SQLite database with the schema in place.
pub async fn test_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        max_idle: Duration::from_secs(3600),
    };

    Database::connect(&config).await.unwrap()
}

/// Full application router whose clock is pinned to `today`.
pub async fn test_app(today: NaiveDate) -> Router {
    let state = build_state(test_database().await, Arc::new(FixedClock(today)));
    create_router(state, Duration::from_secs(5))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and return the response.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Send one request and decode the JSON body (Null when empty).
pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, request).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
