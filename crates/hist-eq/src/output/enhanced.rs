//! The value returned by an enhancement call.

use image::ImageFormat;

use crate::api::FallbackReason;

/// What happened to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was decoded, equalized and re-encoded.
    Enhanced {
        width: u32,
        height: u32,
        format: ImageFormat,
    },
    /// The input bytes were returned unchanged.
    Fallback(FallbackReason),
}

/// Output buffer of one enhancement call plus its [`Outcome`].
///
/// The buffer is always usable: on fallback it is a byte-for-byte copy of
/// the input.
#[derive(Debug, Clone)]
pub struct Enhanced {
    bytes: Vec<u8>,
    outcome: Outcome,
}

impl Enhanced {
    pub(crate) fn enhanced(bytes: Vec<u8>, width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            bytes,
            outcome: Outcome::Enhanced {
                width,
                height,
                format,
            },
        }
    }

    pub(crate) fn fallback(input: &[u8], reason: FallbackReason) -> Self {
        Self {
            bytes: input.to_vec(),
            outcome: Outcome::Fallback(reason),
        }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback(_))
    }

    /// MIME type of the output, when it was re-encoded.
    pub fn mime_type(&self) -> Option<&'static str> {
        match &self.outcome {
            Outcome::Enhanced { format, .. } => Some(format.to_mime_type()),
            Outcome::Fallback(_) => None,
        }
    }
}
