//! Single-channel 8-bit sample planes.

/// A rectangular plane of 8-bit samples, one per pixel, in row-major order.
///
/// Planes are the unit every histogram operation works on: a grayscale image
/// is one plane, a color image decomposes into three (see
/// [`YCrCbPlanes`](crate::YCrCbPlanes)).
///
/// # Example
///
/// ```
/// use hist_eq::Plane;
///
/// let plane = Plane::new(2, 2, vec![10, 10, 10, 200]);
/// assert_eq!(plane.width(), 2);
/// assert_eq!(plane.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Plane {
    /// Create a plane from row-major samples.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `samples.len() == width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize,
            "samples length ({}) must match width * height ({}x{})",
            samples.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Create a plane where every sample has the same value.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples (pixels) in the plane.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Build a new plane of the same dimensions by mapping every sample.
    pub fn map(&self, f: impl Fn(u8) -> u8) -> Plane {
        Plane {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }
}
