//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

use lumeq::models::AppConfig;
use lumeq::server::{build_router, create_app_state};

use super::fixtures::MultipartBody;

/// Test application with router and private storage directories
pub struct TestApp {
    router: axum::Router,
    pub config: AppConfig,
    // Dropping the TempDir removes the stored files.
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application storing files in a fresh temp dir
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a test application after adjusting the default config
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig {
            upload_dir: dir.path().join("uploads"),
            processed_dir: dir.path().join("processed"),
            ..AppConfig::default()
        };
        adjust(&mut config);

        let state = create_app_state(config.clone()).expect("Failed to create app state");
        let router = build_router(state);

        Self {
            router,
            config,
            _dir: dir,
        }
    }

    /// Path of an original upload on disk
    pub fn upload_path(&self, name: &str) -> PathBuf {
        self.config.upload_dir.join(name)
    }

    /// Path of an enhanced result on disk
    pub fn processed_path(&self, name: &str) -> PathBuf {
        self.config.processed_dir.join(name)
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a multipart POST request
    pub async fn post_multipart(&self, path: &str, body: MultipartBody) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", body.content_type())
            .body(Body::from(body.finish()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
