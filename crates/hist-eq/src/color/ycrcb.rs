//! Luma/chroma split of 8-bit RGB pixels.
//!
//! Uses the full-range BT.601 YCrCb transform with chroma offset by 128,
//! the same split common imaging libraries use for "equalize the brightness,
//! keep the color" operations:
//!
//! ```text
//! Y  = 0.299 R + 0.587 G + 0.114 B
//! Cr = (R - Y) * 0.713 + 128
//! Cb = (B - Y) * 0.564 + 128
//!
//! R = Y + 1.403 (Cr - 128)
//! G = Y - 0.714 (Cr - 128) - 0.344 (Cb - 128)
//! B = Y + 1.773 (Cb - 128)
//! ```
//!
//! Every result is rounded to nearest and clamped into `0..=255`.

use super::plane::Plane;

const KR: f32 = 0.299;
const KG: f32 = 0.587;
const KB: f32 = 0.114;

const CR_SCALE: f32 = 0.713;
const CB_SCALE: f32 = 0.564;
const CHROMA_OFFSET: f32 = 128.0;

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Unrounded luma of an RGB pixel.
#[inline]
fn luma_f32([r, g, b]: [u8; 3]) -> f32 {
    KR * r as f32 + KG * g as f32 + KB * b as f32
}

/// Luma of an RGB pixel with the fixed BT.601 weights.
///
/// This is also the grayscale conversion: a gray pixel `(v, v, v)` has luma `v`.
///
/// ```
/// assert_eq!(hist_eq::color::luma([255, 255, 255]), 255);
/// assert_eq!(hist_eq::color::luma([90, 90, 90]), 90);
/// ```
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    to_u8(luma_f32(rgb))
}

/// Convert one RGB pixel into `[Y, Cr, Cb]`.
#[inline]
pub fn rgb_to_ycrcb(rgb: [u8; 3]) -> [u8; 3] {
    let y = luma_f32(rgb);
    let cr = (rgb[0] as f32 - y) * CR_SCALE + CHROMA_OFFSET;
    let cb = (rgb[2] as f32 - y) * CB_SCALE + CHROMA_OFFSET;
    [to_u8(y), to_u8(cr), to_u8(cb)]
}

/// Convert one `[Y, Cr, Cb]` triple back into RGB.
#[inline]
pub fn ycrcb_to_rgb([y, cr, cb]: [u8; 3]) -> [u8; 3] {
    let y = y as f32;
    let cr = cr as f32 - CHROMA_OFFSET;
    let cb = cb as f32 - CHROMA_OFFSET;
    [
        to_u8(y + 1.403 * cr),
        to_u8(y - 0.714 * cr - 0.344 * cb),
        to_u8(y + 1.773 * cb),
    ]
}

/// A color image split into one luma plane and two chroma planes.
///
/// The planes only live for the duration of one enhancement call.
#[derive(Debug, Clone)]
pub struct YCrCbPlanes {
    pub y: Plane,
    pub cr: Plane,
    pub cb: Plane,
}

impl YCrCbPlanes {
    /// Split row-major RGB pixels into Y, Cr and Cb planes.
    pub fn decompose(pixels: &[[u8; 3]], width: u32, height: u32) -> Self {
        let mut y = Vec::with_capacity(pixels.len());
        let mut cr = Vec::with_capacity(pixels.len());
        let mut cb = Vec::with_capacity(pixels.len());

        for &px in pixels {
            let [py, pcr, pcb] = rgb_to_ycrcb(px);
            y.push(py);
            cr.push(pcr);
            cb.push(pcb);
        }

        Self {
            y: Plane::new(width, height, y),
            cr: Plane::new(width, height, cr),
            cb: Plane::new(width, height, cb),
        }
    }

    /// Rebuild RGB pixels using `luma` in place of the stored Y plane.
    ///
    /// `source` must be the pixels these planes were decomposed from. Where
    /// the new luma equals the stored luma the source pixel is copied as-is,
    /// so untouched pixels survive the 8-bit chroma round trip unchanged.
    pub fn recompose_with_luma(&self, luma: &Plane, source: &[[u8; 3]]) -> Vec<[u8; 3]> {
        debug_assert_eq!(luma.len(), self.y.len());
        debug_assert_eq!(source.len(), self.y.len());

        self.y
            .samples()
            .iter()
            .zip(luma.samples())
            .zip(self.cr.samples().iter().zip(self.cb.samples()))
            .zip(source)
            .map(|(((&old_y, &new_y), (&cr, &cb)), &px)| {
                if old_y == new_y {
                    px
                } else {
                    ycrcb_to_rgb([new_y, cr, cb])
                }
            })
            .collect()
    }
}

/// Convert row-major RGB pixels into a single grayscale plane.
pub fn to_gray_plane(pixels: &[[u8; 3]], width: u32, height: u32) -> Plane {
    Plane::new(width, height, pixels.iter().map(|&px| luma(px)).collect())
}
