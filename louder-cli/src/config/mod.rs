//! Configuration module for the louder binary.
//!
//! Handles loading configuration from an optional TOML file and applying
//! CLI overrides on top of it.

pub mod file;

use crate::config::file::FileConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Settings the binary runs with.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub default_image: String,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    base_url_override: Option<Url>,
}

impl ConfigLoader {
    /// Create a new config loader. Without a path, defaults are used.
    pub fn new(config_path: Option<&Path>, base_url_override: Option<Url>) -> Self {
        Self {
            config_path: config_path.map(Path::to_path_buf),
            base_url_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, if one was given
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut file_config = match &self.config_path {
            Some(path) => {
                let config_content = std::fs::read_to_string(path)?;
                toml::from_str(&config_content)?
            }
            None => FileConfig::default(),
        };

        if let Some(base_url) = &self.base_url_override {
            file_config.backend.base_url = base_url.clone();
        }

        self.validate(&file_config)?;

        Ok(LoadedConfig {
            base_url: file_config.backend.base_url,
            timeout: Duration::from_secs(file_config.backend.timeout_secs),
            default_image: file_config.display.default_image,
        })
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let base_url = &config.backend.base_url;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "backend base_url must be http or https, got {base_url}"
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "backend base_url {base_url} cannot be used as a base"
            )));
        }
        if config.backend.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "backend timeout_secs must be greater than zero".to_string(),
            ));
        }
        if config.display.default_image.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "display default_image must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "louder-config-{}-{name}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let loaded = ConfigLoader::new(None, None).load().unwrap();
        assert_eq!(loaded.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(loaded.timeout, Duration::from_secs(30));
        assert_eq!(loaded.default_image, louder_core::render::DEFAULT_IMAGE);
    }

    #[test]
    fn test_cli_override_wins_over_file() {
        let path = write_config(
            "override",
            "[backend]\nbase_url = \"http://file.example/\"\ntimeout_secs = 3\n",
        );
        let override_url = Url::parse("http://cli.example:8080/").unwrap();

        let loaded = ConfigLoader::new(Some(&path), Some(override_url))
            .load()
            .unwrap();
        assert_eq!(loaded.base_url.as_str(), "http://cli.example:8080/");
        assert_eq!(loaded.timeout, Duration::from_secs(3));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("louder-config-does-not-exist.toml");
        let err = ConfigLoader::new(Some(&path), None).load().unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = write_config("malformed", "[backend\nbase_url = ");
        let err = ConfigLoader::new(Some(&path), None).load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let path = write_config("zero-timeout", "[backend]\ntimeout_secs = 0\n");
        let err = ConfigLoader::new(Some(&path), None).load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        std::fs::remove_file(path).ok();

        let ftp = Url::parse("ftp://files.example/").unwrap();
        let err = ConfigLoader::new(None, Some(ftp)).load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let path = write_config("blank-image", "[display]\ndefault_image = \"  \"\n");
        let err = ConfigLoader::new(Some(&path), None).load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        std::fs::remove_file(path).ok();
    }
}
