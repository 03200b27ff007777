use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use hist_eq::{ColorMode, Intensity};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{sanitize_filename, EnhanceService, ImageStore, PageRenderer};

/// Fields collected from the upload form
#[derive(Debug, Default)]
pub struct UploadForm {
    /// Client-supplied filename and file contents
    pub image: Option<(String, Vec<u8>)>,
    /// "yes" / "no" answer to "convert to grayscale?"
    pub grayscale: Option<String>,
    /// Intensity percentage as typed into the form
    pub intensity: Option<String>,
}

fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::BadRequest(format!("{context}: {}", e.body_text()))
    }
}

impl UploadForm {
    /// Read all known fields from a multipart body, ignoring unknown ones
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error("Invalid multipart body", e))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("image") => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error("Failed to read upload", e))?;
                    form.image = Some((filename, bytes.to_vec()));
                }
                Some("grayscale") => {
                    form.grayscale = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| multipart_error("Failed to read grayscale field", e))?,
                    );
                }
                Some("intensity") => {
                    form.intensity = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| multipart_error("Failed to read intensity field", e))?,
                    );
                }
                other => {
                    tracing::debug!(field = ?other, "Ignoring unknown form field");
                }
            }
        }

        Ok(form)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.grayscale
            .as_deref()
            .map(ColorMode::from_grayscale_field)
            .unwrap_or_default()
    }

    /// Parse the intensity percentage; blank or missing uses `default`
    pub fn intensity(&self, default: Intensity) -> Result<Intensity, ApiError> {
        match self.intensity.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(raw) => {
                let percent: u32 = raw.parse().map_err(|_| {
                    ApiError::BadRequest(format!("intensity must be a whole number, got {raw:?}"))
                })?;
                Intensity::from_percent(percent).map_err(|e| ApiError::BadRequest(e.to_string()))
            }
        }
    }
}

/// Show the upload form
pub async fn handle_index(
    State(config): State<Arc<AppConfig>>,
    State(pages): State<Arc<PageRenderer>>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(pages.index(config.default_intensity)?))
}

/// Accept an upload, enhance it and show the result page
///
/// A request without a file (or with an empty filename) is redirected back to
/// the form. An image that cannot be decoded is stored unchanged as the
/// "enhanced" result.
pub async fn handle_upload(
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<ImageStore>>,
    State(enhancer): State<Arc<EnhanceService>>,
    State(pages): State<Arc<PageRenderer>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = UploadForm::from_multipart(multipart).await?;

    let Some((raw_name, bytes)) = form.image.as_ref().filter(|(name, _)| !name.is_empty()) else {
        tracing::debug!("Upload without a file, redirecting to form");
        return Ok(Redirect::to("/").into_response());
    };

    let filename = sanitize_filename(raw_name)
        .ok_or_else(|| ApiError::BadRequest(format!("Unusable filename: {raw_name:?}")))?;
    let mode = form.color_mode();
    let intensity = form.intensity(config.intensity())?;

    tracing::info!(
        filename = %filename,
        bytes = bytes.len(),
        mode = %mode,
        intensity = %intensity,
        "Image upload received"
    );

    store.save_original(&filename, bytes).await?;
    let result = enhancer.enhance(bytes.clone(), mode, intensity).await?;
    store.save_processed(&filename, result.bytes()).await?;

    if result.is_fallback() {
        tracing::warn!(filename = %filename, "Stored original unchanged as enhanced result");
    }

    Ok(Html(pages.result(&filename, result.is_fallback())?).into_response())
}
