//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header::X_CONTENT_TYPE_OPTIONS, HeaderValue},
    response::{Html, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{EnhanceService, ImageStore, PageRenderer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<ImageStore>,
    pub enhancer: Arc<EnhanceService>,
    pub pages: Arc<PageRenderer>,
}

/// Create application state from a loaded configuration.
///
/// Creates the upload and processed directories if they are missing.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store = ImageStore::new(config.storage());
    store
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to prepare storage directories: {e}"))?;
    let pages = PageRenderer::new()?;

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        enhancer: Arc::new(EnhanceService::new()),
        pages: Arc::new(pages),
    })
}

/// Build the router with all endpoints and middleware.
///
/// Uploaded files are user content, so every response carries
/// `X-Content-Type-Options: nosniff`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handle_index).post(handle_upload))
        .route("/uploads/:filename", get(handle_uploaded_file))
        .route("/processed/:filename", get(handle_processed_file))
        .route("/download/:filename", get(handle_download))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    api::handle_index(State(state.config), State(state.pages)).await
}

async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    api::handle_upload(
        State(state.config),
        State(state.store),
        State(state.enhancer),
        State(state.pages),
        multipart,
    )
    .await
}

async fn handle_uploaded_file(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    api::handle_uploaded_file(State(state.store), path).await
}

async fn handle_processed_file(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    api::handle_processed_file(State(state.store), path).await
}

async fn handle_download(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    api::handle_download(State(state.store), path).await
}
