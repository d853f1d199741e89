#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_db::repositories::{InMemoryMovieRepo, MovieRepository, PgMovieRepo};
use sqlx::PgPool;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::services::MovieService;
use movies_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 5,
    }
}

/// Build the full application router over the given repository, with the
/// same middleware stack production uses.
pub fn build_test_app(repo: Arc<dyn MovieRepository>) -> Router {
    let state = AppState {
        movies: MovieService::new(repo),
    };
    build_app_router(state, &test_config())
}

/// App backed by a fresh in-memory store.
pub fn build_memory_app() -> Router {
    build_test_app(Arc::new(InMemoryMovieRepo::new()))
}

/// In-memory app with a caller-supplied config.
pub fn build_memory_app_with(config: &ServerConfig) -> Router {
    let state = AppState {
        movies: MovieService::new(Arc::new(InMemoryMovieRepo::new())),
    };
    build_app_router(state, config)
}

/// App backed by PostgreSQL.
pub fn build_pg_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgMovieRepo::new(pool)))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect the response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The `Location` header of a response, if any.
pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string())
}

pub fn pulp_fiction() -> serde_json::Value {
    serde_json::json!({
        "title": "Pulp Fiction",
        "releaseDate": "1999-10-14",
        "stars": ["John Travolta", "Uma Thurman", "Samuel L. Jackson"]
    })
}

pub fn inception() -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "releaseDate": "2010-06-13",
        "stars": ["Leonardo DiCaprio", "Ken Watanabe", "Elliot Page"]
    })
}
