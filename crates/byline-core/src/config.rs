//! Configuration management for byline.
//!
//! Loads configuration from ${BYLINE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the articles API (the segment before `/login` and `/articles`).
    pub api_base_url: String,
    /// Log filter directive (overridden by the BYLINE_LOG env var).
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Config::DEFAULT_API_BASE_URL.to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:9000/api";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template if no config file exists yet.
    ///
    /// Returns true if the file was created, false if it was already present.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::write_config(path, default_config_template())
    }

    /// Saves only the api_base_url field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_api_base_url(url: &str) -> Result<()> {
        Self::save_api_base_url_to(&paths::config_path(), url)
    }

    /// Saves only the api_base_url field to a specific config file path.
    pub fn save_api_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api_base_url"] = value(url);

        Self::write_config(path, &doc.to_string())?;
        Ok(())
    }

    fn write_config(path: &Path, contents: &str) -> Result<bool> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(true)
    }
}

/// Default config file contents written by `config init`.
fn default_config_template() -> &'static str {
    r#"# byline configuration

# Base URL of the articles API.
api_base_url = "http://localhost:9000/api"

# Log filter directive (overridden by the BYLINE_LOG env var).
# log_filter = "byline=debug"
"#
}

pub mod paths {
    //! Path resolution for byline configuration and data directories.
    //!
    //! BYLINE_HOME resolution order:
    //! 1. BYLINE_HOME environment variable (if set)
    //! 2. ~/.config/byline (default)

    use std::path::PathBuf;

    /// Returns the byline home directory.
    ///
    /// Checks BYLINE_HOME env var first, falls back to ~/.config/byline
    pub fn byline_home() -> PathBuf {
        if let Ok(home) = std::env::var("BYLINE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("byline"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        byline_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        byline_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        byline_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_filter = \"debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_save_api_base_url_preserves_comments() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config::init_at(&path).unwrap();

        Config::save_api_base_url_to(&path, "https://api.example.com/api").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# byline configuration"));

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/api");
    }
}
