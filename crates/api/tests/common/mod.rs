#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tower::ServiceExt;

use filmdb_api::config::{ErrorStatusMode, ServerConfig};
use filmdb_api::router::build_app_router;
use filmdb_api::state::AppState;
use filmdb_core::film::Film;

/// Build a test `ServerConfig` with safe defaults.
///
/// No public base URL is set, so addresses come back root-relative unless a
/// test sends a `Host` header.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_base_url: None,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_capacity: 1000,
        error_status_mode: ErrorStatusMode::Legacy,
    }
}

/// Build the full application router over a fresh, empty store.
///
/// The returned router is cheap to clone; clones share the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw body with an optional content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    send(app, builder.body(body.into()).unwrap()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// The `location` header of a create response.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("create response must carry a location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Number of items in `GET /films`.
pub async fn collection_len(app: Router) -> usize {
    let json = body_json(get(app, "/films").await).await;
    json["items"].as_array().unwrap().len()
}

// ---------------------------------------------------------------------------
// Film data
// ---------------------------------------------------------------------------

pub fn film_json(film: &Film) -> serde_json::Value {
    serde_json::to_value(film).unwrap()
}

/// Assert that a response body carries exactly the fields of `film`.
pub fn assert_film_fields(json: &serde_json::Value, film: &Film) {
    for (key, value) in film_json(film).as_object().unwrap() {
        assert_eq!(&json[key], value, "field {key}");
    }
}

/// Seeded source of film records, so test runs are reproducible.
pub struct FilmGenerator {
    rng: StdRng,
}

impl FilmGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A film with the given title and random values for the other fields.
    pub fn film(&mut self, title: impl Into<String>) -> Film {
        Film {
            title: title.into(),
            original_title: self.value(),
            production_year: self.value(),
            length: self.value(),
            director: self.value(),
            actors: self.value(),
        }
    }

    /// `n` films titled `"0"` to `"n-1"`.
    pub fn films(&mut self, n: usize) -> Vec<Film> {
        (0..n).map(|i| self.film(i.to_string())).collect()
    }

    fn value(&mut self) -> String {
        self.rng.random_range(0..=100u32).to_string()
    }
}
