//! Per-call enhancement options: color mode and blend intensity.

use std::fmt;
use std::str::FromStr;

use super::error::IntensityError;

/// Which planes get equalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Convert to one gray plane, equalize it fully, emit three identical channels.
    Grayscale,
    /// Equalize only the luma plane and keep chroma untouched.
    #[default]
    Color,
}

impl ColorMode {
    /// Map the upload form's "convert to grayscale?" answer onto a mode.
    ///
    /// `"yes"` selects [`ColorMode::Grayscale`]; any other value (including
    /// `"no"`) selects [`ColorMode::Color`].
    pub fn from_grayscale_field(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("yes") {
            ColorMode::Grayscale
        } else {
            ColorMode::Color
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Grayscale => write!(f, "grayscale"),
            ColorMode::Color => write!(f, "color"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "gray" | "grey" => Ok(ColorMode::Grayscale),
            "color" | "colour" => Ok(ColorMode::Color),
            other => Err(format!("unknown color mode: {other}")),
        }
    }
}

/// Blend weight between the original and the fully equalized luma plane.
///
/// Always finite and within `0.0..=1.0`: 0.0 leaves luma unchanged, 1.0
/// applies full equalization.
///
/// # Example
///
/// ```
/// use hist_eq::Intensity;
///
/// let half = Intensity::from_percent(50).unwrap();
/// assert_eq!(half.value(), 0.5);
///
/// assert!(Intensity::new(1.5).is_err());
/// assert!(Intensity::from_percent(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f32);

impl Intensity {
    pub const NONE: Intensity = Intensity(0.0);
    pub const FULL: Intensity = Intensity(1.0);

    pub fn new(value: f32) -> Result<Self, IntensityError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(IntensityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Build from the form's percentage control, which accepts 1..=100.
    pub fn from_percent(percent: u32) -> Result<Self, IntensityError> {
        if !(1..=100).contains(&percent) {
            return Err(IntensityError::PercentOutOfRange(percent));
        }
        Ok(Self(percent as f32 / 100.0))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
