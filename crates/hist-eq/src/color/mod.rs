//! Sample planes and the luma/chroma split.
//!
//! - [`Plane`]: one 8-bit sample per pixel, the unit histogram operations run on
//! - [`YCrCbPlanes`]: a color image split into luma and two chroma planes
//!
//! # Example
//!
//! ```
//! use hist_eq::{Plane, YCrCbPlanes};
//!
//! let pixels = [[200, 40, 40], [40, 200, 40]];
//! let planes = YCrCbPlanes::decompose(&pixels, 2, 1);
//!
//! // Keeping the luma plane as-is gives back the source pixels.
//! let rebuilt = planes.recompose_with_luma(&planes.y, &pixels);
//! assert_eq!(rebuilt, pixels);
//! ```

mod plane;
mod ycrcb;

pub use plane::Plane;
pub use ycrcb::{luma, rgb_to_ycrcb, to_gray_plane, ycrcb_to_rgb, YCrCbPlanes};
