//! Histogram equalization and luma blending.
//!
//! [`EqualizationMap`] is the cumulative-distribution remapping table;
//! [`blend`] mixes an equalized plane back toward its original at a given
//! [`Intensity`](crate::Intensity).

mod blend;
mod equalize;

pub use blend::{blend, blend_sample};
pub use equalize::{equalize, EqualizationMap, Histogram, LEVELS};
