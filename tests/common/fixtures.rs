//! Test fixtures: encoded images and multipart bodies.

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

/// Bytes that no image decoder accepts
pub const NOT_AN_IMAGE: &[u8] = b"this is a text file, not a picture\n";

fn encode_png(image: image::DynamicImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    out.into_inner()
}

/// Low-contrast RGB gradient: values squeezed into 100..=140
pub fn low_contrast_rgb_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        let base = 100 + ((x + y) * 40 / (width + height - 2).max(1)) as u8;
        Rgb([base, base.saturating_add(5), base.saturating_sub(5)])
    });
    encode_png(image.into())
}

/// Gray image with two levels split down the middle
pub fn two_level_gray_png(width: u32, height: u32, dark: u8, light: u8) -> Vec<u8> {
    let image = GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Luma([dark])
        } else {
            Luma([light])
        }
    });
    encode_png(image.into())
}

/// Decode a PNG response body back into RGB pixels
pub fn decode_rgb(bytes: &[u8]) -> RgbImage {
    image::load_from_memory(bytes)
        .expect("Failed to decode image")
        .to_rgb8()
}

/// Hand-built multipart/form-data body
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "lumeq-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    /// Add a plain text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Upload form with an image and the given options
pub fn upload_form(
    filename: &str,
    bytes: &[u8],
    grayscale: &str,
    intensity: Option<&str>,
) -> MultipartBody {
    let form = MultipartBody::new()
        .file("image", filename, bytes)
        .text("grayscale", grayscale);
    match intensity {
        Some(value) => form.text("intensity", value),
        None => form,
    }
}
