//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values. The statuses here
//! are the strict ones; legacy folding is covered in `film_api.rs`.

use axum::response::IntoResponse;
use filmdb_api::error::{AppError, LegacyNotFound};
use filmdb_core::error::CoreError;
use filmdb_core::types::FilmId;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code, legacy marker, and
/// parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, bool, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let marked = response.extensions().get::<LegacyNotFound>().is_some();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, marked, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found(FilmId::new(42)));

    let (status, marked, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert!(!marked);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Film with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Duplicate maps to 409 and is marked for legacy folding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_error_returns_409() {
    let err = AppError::Core(CoreError::Duplicate {
        existing: FilmId::new(3),
    });

    let (status, marked, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert!(marked);
    assert_eq!(json["code"], "DUPLICATE");
    assert_eq!(json["error"], "Film already exists with id 3");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Malformed maps to 400 and is marked for legacy folding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_error_returns_400() {
    let err = AppError::Core(CoreError::Malformed("missing field `title`".into()));

    let (status, marked, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(marked);
    assert_eq!(json["code"], "MALFORMED");
    assert_eq!(json["error"], "missing field `title`");
}

// ---------------------------------------------------------------------------
// Test: CoreError::CapacityExceeded maps to 507 in every mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn capacity_error_returns_507() {
    let err = AppError::Core(CoreError::CapacityExceeded { capacity: 1000 });

    let (status, marked, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INSUFFICIENT_STORAGE);
    assert!(!marked);
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");
    assert_eq!(json["error"], "Film store is full (1000 films)");
}

// ---------------------------------------------------------------------------
// Test: CoreError converts into AppError via `?`
// ---------------------------------------------------------------------------

#[test]
fn core_error_converts_into_app_error() {
    fn fails() -> Result<(), AppError> {
        let decoded: Result<(), CoreError> = Err(CoreError::Malformed("bad".into()));
        decoded?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert_eq!(err.to_string(), "Malformed film: bad");
}
