//! Blending an equalized plane back toward its original.

use crate::api::Intensity;
use crate::color::Plane;

/// Mix two 8-bit samples: `round(original * (1 - k) + equalized * k)`.
#[inline]
pub fn blend_sample(original: u8, equalized: u8, intensity: Intensity) -> u8 {
    let k = intensity.value();
    let mixed = original as f32 * (1.0 - k) + equalized as f32 * k;
    mixed.round().clamp(0.0, 255.0) as u8
}

/// Blend `equalized` toward `original` sample by sample.
///
/// At intensity 0.0 the result is `original`, at 1.0 it is `equalized`.
/// Both planes must have the same dimensions.
pub fn blend(original: &Plane, equalized: &Plane, intensity: Intensity) -> Plane {
    debug_assert_eq!(original.width(), equalized.width());
    debug_assert_eq!(original.height(), equalized.height());

    if intensity == Intensity::NONE {
        return original.clone();
    }
    if intensity == Intensity::FULL {
        return equalized.clone();
    }

    let samples = original
        .samples()
        .iter()
        .zip(equalized.samples())
        .map(|(&o, &e)| blend_sample(o, e, intensity))
        .collect();
    Plane::new(original.width(), original.height(), samples)
}
