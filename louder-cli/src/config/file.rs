//! TOML file configuration structures.
//!
//! These structs directly map to the `louder.toml` file format. Every
//! section and key is optional.

use louder_core::render::DEFAULT_IMAGE;
use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Backend connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:5000/").expect("valid default url")
}

fn default_timeout_secs() -> u64 {
    30
}

/// Card rendering section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Image shown on cards whose event has none.
    #[serde(default = "default_image")]
    pub default_image: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_image: default_image(),
        }
    }
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[backend]
base_url = "https://louder.example.com/"
timeout_secs = 5

[display]
default_image = "/img/placeholder.png"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.base_url.as_str(),
            "https://louder.example.com/"
        );
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.display.default_image, "/img/placeholder.png");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.display.default_image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let toml_str = r#"
[backend]
timeout_secs = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.backend.timeout_secs, 10);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let toml_str = r#"
[backend]
base_url = "not a url"
"#;

        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
