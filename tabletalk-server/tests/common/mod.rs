//! Shared test helpers

use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use http_body_util::BodyExt;
use tempfile::TempDir;

use tabletalk_server::{Config, ServerState, api};

/// Fresh server state backed by a temp-dir database, seeded with demo data.
/// Keep the TempDir alive for the duration of the test.
pub async fn test_state() -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("tabletalk-test.db");
    let mut config = Config::with_overrides(db_path.to_string_lossy().to_string(), 0);
    config.seed_demo_data = true;
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");
    (state, dir)
}

/// Full application router with middleware and state applied
pub fn app(state: &ServerState) -> Router {
    api::build_app().with_state(state.clone())
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse json body")
}
