//! Decoding encoded buffers into [`RasterImage`] and encoding them back.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use super::raster_image::RasterImage;
use crate::api::FallbackReason;
use crate::color::Plane;

/// A successfully decoded buffer and the format it was sniffed as.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: RasterImage,
    pub format: ImageFormat,
}

/// Result of trying to decode an input buffer.
#[derive(Debug, Clone)]
pub enum Decoding {
    Decoded(DecodedImage),
    Fallback(FallbackReason),
}

/// Decode `bytes`, sniffing the format from the content.
///
/// 8-bit single-channel sources stay single-plane; everything else is
/// converted to 8-bit RGB with any alpha channel dropped.
pub fn decode(bytes: &[u8]) -> Decoding {
    if bytes.is_empty() {
        return Decoding::Fallback(FallbackReason::Empty);
    }

    let format = match image::guess_format(bytes) {
        Ok(format) => format,
        Err(e) => return Decoding::Fallback(FallbackReason::Decode(e.to_string())),
    };

    match image::load_from_memory_with_format(bytes, format) {
        Ok(dynamic) => Decoding::Decoded(DecodedImage {
            image: from_dynamic(dynamic),
            format,
        }),
        Err(e) => Decoding::Fallback(FallbackReason::Decode(e.to_string())),
    }
}

fn from_dynamic(dynamic: DynamicImage) -> RasterImage {
    match dynamic {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            RasterImage::Gray(Plane::new(width, height, gray.into_raw()))
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            let pixels = rgb.pixels().map(|p| p.0).collect();
            RasterImage::rgb(width, height, pixels)
        }
    }
}

/// Encode `image` into `format`.
pub fn encode(image: &RasterImage, format: ImageFormat) -> Result<Vec<u8>, FallbackReason> {
    let (width, height) = (image.width(), image.height());
    let dynamic = match image {
        RasterImage::Gray(plane) => GrayImage::from_raw(width, height, plane.samples().to_vec())
            .map(DynamicImage::ImageLuma8),
        RasterImage::Rgb { .. } => {
            RgbImage::from_raw(width, height, image.to_bytes()).map(DynamicImage::ImageRgb8)
        }
    }
    .ok_or_else(|| {
        FallbackReason::Encode(format!("buffer does not match {width}x{height}"))
    })?;

    let mut out = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut out, format)
        .map_err(|e| FallbackReason::Encode(e.to_string()))?;
    Ok(out.into_inner())
}
