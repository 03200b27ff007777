//! Raster images and the codec boundary.

mod codec;
mod raster_image;

pub use codec::{decode, encode, DecodedImage, Decoding};
pub use raster_image::RasterImage;
