use hist_eq::{ColorMode, Enhanced, Enhancer, Intensity};

use crate::error::ApiError;

/// Runs the enhancement engine off the async runtime
pub struct EnhanceService;

impl EnhanceService {
    pub fn new() -> Self {
        Self
    }

    /// Enhance an uploaded image
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive pixel work. The engine itself never fails; only a
    /// panicked or cancelled task surfaces as an error.
    pub async fn enhance(
        &self,
        input: Vec<u8>,
        mode: ColorMode,
        intensity: Intensity,
    ) -> Result<Enhanced, ApiError> {
        tokio::task::spawn_blocking(move || Enhancer::new(mode).intensity(intensity).run(&input))
            .await
            .map_err(|e| ApiError::Internal(format!("Enhance task failed: {e}")))
    }
}

impl Default for EnhanceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_enhance_falls_back_for_garbage() {
        let service = EnhanceService::new();
        let result = service
            .enhance(b"garbage".to_vec(), ColorMode::Color, Intensity::FULL)
            .await
            .unwrap();

        assert!(result.is_fallback());
        assert_eq!(result.bytes(), b"garbage");
    }
}
