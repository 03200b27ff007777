//! hist-eq: Histogram equalization contrast enhancement
//!
//! Takes an encoded image buffer, spreads its intensities over the full
//! 0..=255 range using the cumulative histogram, and returns an encoded
//! buffer again. Undecodable input is never an error: the input bytes come
//! back unchanged.
//!
//! # Quick Start
//!
//! ```
//! use hist_eq::{enhance, ColorMode, Intensity};
//!
//! let output = enhance(b"not an image", ColorMode::Color, Intensity::FULL);
//! assert_eq!(output, b"not an image");
//! ```
//!
//! Use the [`Enhancer`] builder when you need to know whether the image was
//! processed or returned as-is:
//!
//! ```
//! use hist_eq::{ColorMode, Enhancer, Intensity, Outcome};
//!
//! let result = Enhancer::new(ColorMode::Color)
//!     .intensity(Intensity::from_percent(40).unwrap())
//!     .run(&[]);
//!
//! assert!(matches!(result.outcome(), Outcome::Fallback(_)));
//! ```
//!
//! # Modes
//!
//! - [`ColorMode::Grayscale`]: convert to gray with the BT.601 luma weights,
//!   equalize the gray plane fully and emit it as three identical channels.
//!   The intensity setting does not apply.
//! - [`ColorMode::Color`]: split into Y, Cr and Cb, equalize Y only, blend
//!   it with the original Y at the given [`Intensity`], and merge the
//!   untouched chroma back.
//!
//! # Equalization
//!
//! For a plane with cumulative histogram `H`, pixel count `N` and smallest
//! nonzero cumulative value `H_min`:
//!
//! ```text
//! map[i] = round((H[i] - H_min) / (N - H_min) * 255)
//! ```
//!
//! The map never decreases, so relative order of intensities is kept. A
//! constant plane gets the identity map. See [`EqualizationMap`].

pub mod api;
pub mod color;
pub mod histogram;
pub mod output;
pub mod pipeline;
pub mod raster;


pub use api::{enhance, ColorMode, Enhancer, FallbackReason, Intensity, IntensityError};
pub use color::{Plane, YCrCbPlanes};
pub use histogram::{EqualizationMap, Histogram};
pub use output::{Enhanced, Outcome};
pub use raster::{decode, encode, DecodedImage, Decoding, RasterImage};

pub use image::ImageFormat;
