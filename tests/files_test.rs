//! Serving stored originals, processed images and downloads.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestApp};
use pretty_assertions::assert_eq;

async fn upload(app: &TestApp, filename: &str, bytes: &[u8]) {
    let form = fixtures::upload_form(filename, bytes, "no", None);
    common::assert_html(&app.post_multipart("/", form).await);
}

#[tokio::test]
async fn test_download_is_attachment_of_processed_bytes() {
    let app = TestApp::new();
    upload(&app, "photo.png", &fixtures::low_contrast_rgb_png(8, 8)).await;

    let processed = app.get("/processed/photo.png").await;
    let download = app.get("/download/photo.png").await;

    common::assert_png(&download);
    assert_eq!(
        download.header("content-disposition"),
        Some(r#"attachment; filename="photo.png""#)
    );
    assert_eq!(download.bytes(), processed.bytes());
    assert_eq!(processed.header("content-disposition"), None);
}

#[tokio::test]
async fn test_missing_files_are_not_found() {
    let app = TestApp::new();

    for path in [
        "/uploads/nope.png",
        "/processed/nope.png",
        "/download/nope.png",
    ] {
        let response = app.get(path).await;
        common::assert_status(&response, StatusCode::NOT_FOUND);
        common::assert_json_status(&response, 404);
    }
}

#[tokio::test]
async fn test_traversal_names_are_not_served() {
    let app = TestApp::new();
    upload(&app, "photo.png", &fixtures::low_contrast_rgb_png(4, 4)).await;

    for path in [
        "/uploads/..%2Fprocessed%2Fphoto.png",
        "/processed/.photo.png",
        "/download/%2E%2E",
    ] {
        let response = app.get(path).await;
        common::assert_status(&response, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_original_and_processed_are_separate() {
    let app = TestApp::new();
    let original = fixtures::low_contrast_rgb_png(8, 8);
    upload(&app, "pair.png", &original).await;

    let uploaded = app.get("/uploads/pair.png").await;
    let processed = app.get("/processed/pair.png").await;

    assert_eq!(uploaded.bytes(), original.as_slice());
    assert_ne!(processed.bytes(), original.as_slice());
}

#[tokio::test]
async fn test_reupload_replaces_stored_files() {
    let app = TestApp::new();
    upload(&app, "same.png", &fixtures::low_contrast_rgb_png(4, 4)).await;

    let second = fixtures::two_level_gray_png(6, 2, 50, 60);
    upload(&app, "same.png", &second).await;

    let uploaded = app.get("/uploads/same.png").await;
    assert_eq!(uploaded.bytes(), second.as_slice());
}
