//! The two pixel transforms behind [`Enhancer`](crate::Enhancer).
//!
//! ```text
//! Grayscale:  RGB ──luma──> plane ──equalize──> plane ──replicate──> RGB
//!
//! Color:      RGB ──split──> Y, Cr, Cb
//!                            Y ──equalize──> Yeq
//!                            blend(Y, Yeq, k) ──> Y'
//!             Y', Cr, Cb ──merge──> RGB
//! ```

use crate::api::Intensity;
use crate::color::{to_gray_plane, Plane, YCrCbPlanes};
use crate::histogram::{blend, equalize};
use crate::raster::RasterImage;

/// Fully equalize the gray version of `image` and return it as three
/// identical channels.
pub fn equalize_grayscale(image: &RasterImage) -> RasterImage {
    let gray = match image {
        RasterImage::Gray(plane) => plane.clone(),
        RasterImage::Rgb {
            width,
            height,
            pixels,
        } => to_gray_plane(pixels, *width, *height),
    };
    RasterImage::from_gray_replicated(&equalize(&gray))
}

/// Equalize the luma of `image` and blend it with the original luma at
/// `intensity`, leaving chroma untouched.
///
/// A single-plane source is its own luma and stays single-plane.
pub fn equalize_luma(image: &RasterImage, intensity: Intensity) -> RasterImage {
    match image {
        RasterImage::Gray(plane) => RasterImage::Gray(blended_luma(plane, intensity)),
        RasterImage::Rgb {
            width,
            height,
            pixels,
        } => {
            let planes = YCrCbPlanes::decompose(pixels, *width, *height);
            let luma = blended_luma(&planes.y, intensity);
            RasterImage::rgb(*width, *height, planes.recompose_with_luma(&luma, pixels))
        }
    }
}

fn blended_luma(luma: &Plane, intensity: Intensity) -> Plane {
    if intensity == Intensity::NONE {
        return luma.clone();
    }
    blend(luma, &equalize(luma), intensity)
}
