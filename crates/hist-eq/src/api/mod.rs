//! Public API for the hist-eq crate.
//!
//! This module provides the high-level API: the [`Enhancer`] builder, the
//! [`enhance`] shorthand, per-call options and their error types.

mod enhancer;
mod error;
mod options;

pub use enhancer::{enhance, Enhancer};
pub use error::{FallbackReason, IntensityError};
pub use options::{ColorMode, Intensity};
