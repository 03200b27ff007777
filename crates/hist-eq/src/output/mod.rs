//! Enhancement results.
//!
//! [`Enhanced`] carries the output buffer and an [`Outcome`] tag telling
//! callers whether the image was actually processed or returned unchanged.

mod enhanced;

pub use enhanced::{Enhanced, Outcome};
