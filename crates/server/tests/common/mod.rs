//! Common test utilities for in-process API testing.
//!
//! The router is driven with `tower::ServiceExt::oneshot`, so no port is
//! bound and no ffmpeg binary is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use m4a2mp3_core::testing::MockConverter;
use m4a2mp3_core::{Converter, Predictor};
use m4a2mp3_server::{api::create_router, state::AppState};

/// Test fixture with a mock converter behind the router.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock converter - inspect requests, inject errors
    pub converter: Arc<MockConverter>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with the standard default bitrate.
    pub fn new() -> Self {
        Self::with_default_bitrate("192k")
    }

    /// Create a test fixture whose predictor uses `bitrate` by default.
    pub fn with_default_bitrate(bitrate: &str) -> Self {
        let converter = Arc::new(MockConverter::new());
        let predictor = Predictor::with_default_bitrate(
            Arc::clone(&converter) as Arc<dyn Converter>,
            bitrate,
        );
        let router = create_router(Arc::new(AppState::new(predictor)));

        Self { router, converter }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, &body.to_string()).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
