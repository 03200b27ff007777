use hist_eq::Intensity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::services::StorageConfig;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory for original uploads
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Directory for enhanced results
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    /// Intensity percentage (1-100) used when the form omits it
    #[serde(default = "default_intensity")]
    pub default_intensity: u32,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("processed")
}

fn default_intensity() -> u32 {
    100
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// `None`, an unreadable file, or invalid YAML all yield the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        upload_dir = %config.upload_dir.display(),
                        processed_dir = %config.processed_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply `BIND_ADDR`, `UPLOAD_DIR` and `PROCESSED_DIR` from the environment.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(dir) = lookup("UPLOAD_DIR") {
            self.upload_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("PROCESSED_DIR") {
            self.processed_dir = PathBuf::from(dir);
        }
        self
    }

    /// Storage locations derived from this configuration.
    pub fn storage(&self) -> StorageConfig {
        StorageConfig {
            upload_dir: self.upload_dir.clone(),
            processed_dir: self.processed_dir.clone(),
        }
    }

    /// The default intensity, or full intensity if the configured value is out of range.
    pub fn intensity(&self) -> Intensity {
        Intensity::from_percent(self.default_intensity).unwrap_or_else(|e| {
            tracing::warn!(%e, "Invalid default_intensity, using 100");
            Intensity::FULL
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upload_dir: default_upload_dir(),
            processed_dir: default_processed_dir(),
            default_intensity: default_intensity(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.processed_dir, PathBuf::from("processed"));
        assert_eq!(config.default_intensity, 100);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
upload_dir: /srv/in
default_intensity: 40
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.upload_dir, PathBuf::from("/srv/in"));
        assert_eq!(config.processed_dir, PathBuf::from("processed"));
        assert_eq!(config.intensity(), Intensity::from_percent(40).unwrap());
    }

    #[test]
    fn test_parse_empty_mapping_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(AppConfig::from_yaml_str("default_intensity: [1, 2]").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/lumeq/config.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "bind_addr: 127.0.0.1:8080\n").unwrap();

        let config = AppConfig::load(Some(&path));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [("UPLOAD_DIR", "/tmp/up"), ("BIND_ADDR", "[::]:9000")]
            .into_iter()
            .collect();
        let config =
            AppConfig::default().apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.upload_dir, PathBuf::from("/tmp/up"));
        assert_eq!(config.bind_addr, "[::]:9000");
        assert_eq!(config.processed_dir, PathBuf::from("processed"));
    }

    #[test]
    fn test_out_of_range_intensity_falls_back_to_full() {
        let config = AppConfig {
            default_intensity: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.intensity(), Intensity::FULL);
    }

    #[test]
    fn test_storage_config() {
        let storage = AppConfig::default().storage();
        assert_eq!(storage.upload_dir, PathBuf::from("uploads"));
        assert_eq!(storage.processed_dir, PathBuf::from("processed"));
    }
}
