use std::path::{Path, PathBuf};

use super::filename::sanitize_filename;

/// Where originals and enhanced results are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub processed_dir: PathBuf,
}

/// Which of the two stores a file lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Original,
    Processed,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0:?}")]
    InvalidName(String),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File storage for uploaded originals and enhanced results.
///
/// Both files of one upload share the same sanitized name; only the
/// directory differs.
pub struct ImageStore {
    config: StorageConfig,
}

impl ImageStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Create both storage directories if they are missing.
    pub fn init(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.config.upload_dir)?;
        std::fs::create_dir_all(&self.config.processed_dir)?;
        tracing::info!(
            uploads = %self.config.upload_dir.display(),
            processed = %self.config.processed_dir.display(),
            "Storage directories ready"
        );
        Ok(())
    }

    fn dir(&self, location: Location) -> &Path {
        match location {
            Location::Original => &self.config.upload_dir,
            Location::Processed => &self.config.processed_dir,
        }
    }

    /// Resolve a stored name to its path.
    ///
    /// Only names that are already sanitized are accepted, so a request path
    /// can never point outside the storage directory.
    pub fn path_for(&self, location: Location, name: &str) -> Result<PathBuf, StorageError> {
        match sanitize_filename(name) {
            Some(clean) if clean == name => Ok(self.dir(location).join(clean)),
            _ => Err(StorageError::InvalidName(name.to_string())),
        }
    }

    pub async fn save(
        &self,
        location: Location,
        name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, StorageError> {
        let path = self.path_for(location, name)?;
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Stored image");
        Ok(path)
    }

    pub async fn save_original(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        self.save(Location::Original, name, bytes).await
    }

    pub async fn save_processed(
        &self,
        name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, StorageError> {
        self.save(Location::Processed, name, bytes).await
    }

    pub async fn read(&self, location: Location, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(location, name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
