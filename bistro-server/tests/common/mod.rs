//! Shared helpers for HTTP-level tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use bistro_server::{Config, DbService, ServerState, build_app};
use http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

/// Full application over a private in-memory database
pub async fn app() -> Router {
    let config = Config::with_overrides(":memory:", 0);
    let db = DbService::in_memory().await.unwrap();
    build_app().with_state(ServerState::new(config, db))
}

/// Send one request; an empty response body comes back as `Value::Null`
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
