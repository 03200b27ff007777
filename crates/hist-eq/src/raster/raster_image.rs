//! Decoded raster images.

use crate::color::Plane;

/// A decoded image: either one gray plane or interleaved 8-bit RGB.
///
/// Channel count and bit depth are fixed at decode time; every transform
/// produces a new value rather than changing the layout in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterImage {
    Gray(Plane),
    Rgb {
        width: u32,
        height: u32,
        pixels: Vec<[u8; 3]>,
    },
}

impl RasterImage {
    /// Build an RGB image from row-major pixels.
    pub fn rgb(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        RasterImage::Rgb {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            RasterImage::Gray(plane) => plane.width(),
            RasterImage::Rgb { width, .. } => *width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            RasterImage::Gray(plane) => plane.height(),
            RasterImage::Rgb { height, .. } => *height,
        }
    }

    pub fn channels(&self) -> u8 {
        match self {
            RasterImage::Gray(_) => 1,
            RasterImage::Rgb { .. } => 3,
        }
    }

    /// Replicate a gray plane into three identical channels.
    pub fn from_gray_replicated(plane: &Plane) -> Self {
        RasterImage::rgb(
            plane.width(),
            plane.height(),
            plane.samples().iter().map(|&v| [v, v, v]).collect(),
        )
    }

    /// Interleaved sample bytes (`width * height * channels`).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RasterImage::Gray(plane) => plane.samples().to_vec(),
            RasterImage::Rgb { pixels, .. } => pixels.iter().flatten().copied().collect(),
        }
    }
}
