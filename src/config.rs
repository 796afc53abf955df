//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Image service endpoint used when nothing is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://functions.poehali.dev/d8b33728-48cc-4b65-a127-a6fd517372c0";

/// Origin that share links point at when nothing is configured.
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:5173";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Image service settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
}

/// Image service settings.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    /// Image generation endpoint URL.
    pub endpoint: Option<String>,
}

/// Share link settings.
#[derive(Debug, Default, Deserialize)]
pub struct ShareConfig {
    /// Origin the share links are built on.
    pub origin: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Image service endpoint, preferring `PROVERBS_ENDPOINT`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        std::env::var("PROVERBS_ENDPOINT")
            .ok()
            .or_else(|| self.service.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Share link origin, preferring `PROVERBS_SHARE_ORIGIN`.
    #[must_use]
    pub fn share_origin(&self) -> String {
        std::env::var("PROVERBS_SHARE_ORIGIN")
            .ok()
            .or_else(|| self.share.origin.clone())
            .unwrap_or_else(|| DEFAULT_SHARE_ORIGIN.to_string())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `PROVERBS_CONFIG` environment variable
/// 3. `~/.config/proverbs/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("PROVERBS_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/proverbs/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/proverbs/config.toml")
    } else {
        PathBuf::from("proverbs.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.service.endpoint.is_none());
        assert!(config.share.origin.is_none());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.service.endpoint.is_none());
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("proverbs_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[service]
endpoint = "http://127.0.0.1:9000/generate-image"

[share]
origin = "https://proverbs.example"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.service.endpoint.as_deref(),
            Some("http://127.0.0.1:9000/generate-image")
        );
        assert_eq!(config.share.origin.as_deref(), Some("https://proverbs.example"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_toml_keeps_other_sections_default() {
        let config: Config = toml::from_str("[share]\norigin = \"https://a.example\"\n").unwrap();
        assert!(config.service.endpoint.is_none());
        assert_eq!(config.share.origin.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("proverbs_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_value_used_without_env_override() {
        let config = Config {
            share: ShareConfig { origin: Some("https://from-file.example".into()) },
            ..Config::default()
        };

        std::env::remove_var("PROVERBS_SHARE_ORIGIN");
        assert_eq!(config.share_origin(), "https://from-file.example");
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
