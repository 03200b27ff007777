//! Intensity histograms and the cumulative-distribution equalization map.

use crate::color::Plane;

/// Number of intensity levels in an 8-bit plane.
pub const LEVELS: usize = 256;

/// Frequency histogram of the 256 intensity levels of one plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Histogram {
    /// Count every sample of `plane`.
    pub fn from_plane(plane: &Plane) -> Self {
        Self::from_samples(plane.samples())
    }

    pub fn from_samples(samples: &[u8]) -> Self {
        let mut counts = [0u64; LEVELS];
        for &s in samples {
            counts[s as usize] += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Running sum `H[i] = h[0] + ... + h[i]`.
    pub fn cumulative(&self) -> [u64; LEVELS] {
        let mut cdf = [0u64; LEVELS];
        let mut running = 0u64;
        for (slot, &count) in cdf.iter_mut().zip(self.counts.iter()) {
            running += count;
            *slot = running;
        }
        cdf
    }
}

/// A 256-entry lookup table remapping input intensities to output intensities.
///
/// Built from the normalized cumulative histogram of a plane:
///
/// ```text
/// map[i] = round((H[i] - H_min) / (N - H_min) * 255)    clamped to 0..=255
/// ```
///
/// where `H` is the cumulative histogram, `N` the pixel count and `H_min` the
/// smallest nonzero cumulative value. Because `H` never decreases, neither
/// does the map. A plane with a single distinct value (or no samples) has
/// `N == H_min` and gets the identity map.
///
/// # Example
///
/// ```
/// use hist_eq::{EqualizationMap, Plane};
///
/// // Half the pixels at 0, half at 128: stretched to the extremes.
/// let mut samples = vec![0u8; 50];
/// samples.extend(std::iter::repeat(128u8).take(50));
/// let map = EqualizationMap::from_plane(&Plane::new(10, 10, samples));
///
/// assert_eq!(map.get(0), 0);
/// assert_eq!(map.get(128), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizationMap {
    table: [u8; LEVELS],
}

impl EqualizationMap {
    /// The map that leaves every level unchanged.
    pub fn identity() -> Self {
        let mut table = [0u8; LEVELS];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { table }
    }

    pub fn from_plane(plane: &Plane) -> Self {
        Self::from_histogram(&Histogram::from_plane(plane))
    }

    pub fn from_histogram(histogram: &Histogram) -> Self {
        let cdf = histogram.cumulative();
        let total = cdf[LEVELS - 1];
        let cdf_min = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0);

        if total == cdf_min {
            return Self::identity();
        }

        let scale = 255.0 / (total - cdf_min) as f64;
        let mut table = [0u8; LEVELS];
        for (entry, &cumul) in table.iter_mut().zip(cdf.iter()) {
            // Levels below the first occupied one have cumul < cdf_min.
            let value = (cumul as f64 - cdf_min as f64) * scale;
            *entry = value.round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    #[inline]
    pub fn get(&self, level: u8) -> u8 {
        self.table[level as usize]
    }

    #[inline]
    pub fn table(&self) -> &[u8; LEVELS] {
        &self.table
    }

    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| i == v as usize)
    }

    /// Remap every sample of `plane` through the table.
    pub fn apply(&self, plane: &Plane) -> Plane {
        plane.map(|s| self.table[s as usize])
    }
}

/// Equalize a plane in one step.
pub fn equalize(plane: &Plane) -> Plane {
    EqualizationMap::from_plane(plane).apply(plane)
}
