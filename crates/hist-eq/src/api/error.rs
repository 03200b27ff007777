//! Error types of the public API.
//!
//! The enhancement call itself has no error return: decode and encode
//! failures become a [`FallbackReason`] carried by the result. Only option
//! construction can fail.

use thiserror::Error;

/// Rejected [`Intensity`](crate::Intensity) value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntensityError {
    #[error("intensity {0} is outside 0.0..=1.0")]
    OutOfRange(f32),

    #[error("intensity percentage {0} is outside 1..=100")]
    PercentOutOfRange(u32),
}

/// Why an enhancement call returned the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("empty input buffer")]
    Empty,

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),
}
