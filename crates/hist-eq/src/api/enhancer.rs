//! Enhancer builder -- the entry point for buffer-in/buffer-out enhancement.

use image::ImageFormat;

use super::options::{ColorMode, Intensity};
use crate::output::Enhanced;
use crate::pipeline::{equalize_grayscale, equalize_luma};
use crate::raster::{decode, encode, Decoding, RasterImage};

/// Histogram-equalization enhancer.
///
/// Configuration methods consume and return `self`; [`run()`](Self::run)
/// takes `&self`, so one enhancer can process any number of buffers. Every
/// call is independent: nothing is cached between calls.
///
/// # Example
///
/// ```
/// use hist_eq::{ColorMode, Enhancer, Intensity};
///
/// let enhancer = Enhancer::new(ColorMode::Color)
///     .intensity(Intensity::from_percent(60).unwrap());
///
/// // Undecodable input comes back unchanged.
/// let result = enhancer.run(b"plain text");
/// assert!(result.is_fallback());
/// assert_eq!(result.bytes(), b"plain text");
/// ```
#[derive(Debug, Clone)]
pub struct Enhancer {
    mode: ColorMode,
    intensity: Intensity,
    output_format: Option<ImageFormat>,
}

impl Enhancer {
    /// Create an enhancer for `mode` at full intensity, writing the output in
    /// the same format as the input.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            intensity: Intensity::FULL,
            output_format: None,
        }
    }

    /// Set the luma blend intensity.
    ///
    /// Only [`ColorMode::Color`] honours it; grayscale always equalizes fully.
    #[inline]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// Encode the output in `format` instead of the input's format.
    #[inline]
    pub fn output_format(mut self, format: ImageFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Apply the configured transform to an already decoded image.
    pub fn transform(&self, image: &RasterImage) -> RasterImage {
        match self.mode {
            ColorMode::Grayscale => equalize_grayscale(image),
            ColorMode::Color => equalize_luma(image, self.intensity),
        }
    }

    /// Decode, enhance and re-encode `input`.
    ///
    /// Never fails: when the input cannot be decoded (or the result cannot be
    /// encoded) the returned buffer is a copy of `input` and the outcome
    /// records why.
    pub fn run(&self, input: &[u8]) -> Enhanced {
        let decoded = match decode(input) {
            Decoding::Decoded(decoded) => decoded,
            Decoding::Fallback(reason) => {
                tracing::warn!(
                    %reason,
                    input_bytes = input.len(),
                    "Returning original image unchanged"
                );
                return Enhanced::fallback(input, reason);
            }
        };

        let output = self.transform(&decoded.image);
        let format = self.output_format.unwrap_or(decoded.format);

        match encode(&output, format) {
            Ok(bytes) => {
                tracing::debug!(
                    mode = %self.mode,
                    intensity = %self.intensity,
                    width = output.width(),
                    height = output.height(),
                    format = ?format,
                    output_bytes = bytes.len(),
                    "Image enhanced"
                );
                Enhanced::enhanced(bytes, output.width(), output.height(), format)
            }
            Err(reason) => {
                tracing::warn!(
                    %reason,
                    format = ?format,
                    "Returning original image unchanged"
                );
                Enhanced::fallback(input, reason)
            }
        }
    }
}

/// Enhance an encoded image buffer.
///
/// Shorthand for `Enhancer::new(mode).intensity(intensity).run(input)`
/// returning only the bytes.
pub fn enhance(input: &[u8], mode: ColorMode, intensity: Intensity) -> Vec<u8> {
    Enhancer::new(mode).intensity(intensity).run(input).into_bytes()
}
