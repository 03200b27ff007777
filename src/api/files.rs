use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use hist_eq::ImageFormat;
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{ImageStore, Location};

/// Content type for a stored file, guessed from its extension
pub fn content_type_for(filename: &str) -> &'static str {
    ImageFormat::from_path(filename)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

async fn serve_file(
    store: &ImageStore,
    location: Location,
    filename: &str,
    as_attachment: bool,
) -> Result<Response, ApiError> {
    let bytes = store.read(location, filename).await?;

    tracing::debug!(
        filename = %filename,
        location = ?location,
        bytes = bytes.len(),
        attachment = as_attachment,
        "Serving stored image"
    );

    let mut response = (
        [(header::CONTENT_TYPE, content_type_for(filename))],
        bytes,
    )
        .into_response();

    if as_attachment {
        // Stored names are sanitized ASCII, so they are always valid header text.
        let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| ApiError::Internal(format!("Invalid header value: {e}")))?;
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, disposition);
    }

    Ok(response)
}

/// Serve an original upload
pub async fn handle_uploaded_file(
    State(store): State<Arc<ImageStore>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    serve_file(&store, Location::Original, &filename, false).await
}

/// Serve an enhanced image for inline display
pub async fn handle_processed_file(
    State(store): State<Arc<ImageStore>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    serve_file(&store, Location::Processed, &filename, false).await
}

/// Serve an enhanced image as a forced download
pub async fn handle_download(
    State(store): State<Arc<ImageStore>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    serve_file(&store, Location::Processed, &filename, true).await
}
