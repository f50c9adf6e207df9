use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Which chat backend the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// In-process agent with in-memory sessions (default)
    #[default]
    Local,
    /// Remote chat service over HTTP
    Http,
}

impl BackendMode {
    pub const VALUES: &[BackendMode] = &[BackendMode::Local, BackendMode::Http];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendMode::Local => "local",
            BackendMode::Http => "http",
        }
    }
}

impl std::fmt::Display for BackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackendMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(BackendMode::Local),
            "http" => Ok(BackendMode::Http),
            _ => Err(Error::Config(format!("invalid backend mode: {}", s))),
        }
    }
}

/// SQLite outlet database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_database_path() }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/outlets.db")
}

/// Product catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsConfig {
    /// Path to the drinkware catalog JSON file
    #[serde(default = "default_products_path")]
    pub path: PathBuf,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self { path: default_products_path() }
    }
}

fn default_products_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

/// Chat backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend selection (local in-process or remote HTTP)
    #[serde(default)]
    pub mode: BackendMode,

    /// Base URL of the remote chat service (http mode only)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { mode: BackendMode::default(), base_url: default_base_url() }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// File logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfig {
    /// Enable logging to a rolling file
    #[serde(default)]
    pub enabled: bool,

    /// Log level for the file layer
    #[serde(default = "default_file_level")]
    pub level: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, level: default_file_level() }
    }
}

fn default_file_level() -> String {
    "debug".to_string()
}

/// Logging configuration as declared in `brewchat.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr: pretty, json, compact
    #[serde(default = "default_log_format")]
    pub format: String,

    /// File logging configuration
    #[serde(default)]
    pub file: FileLoggingConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingConfig::default() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Top-level configuration loaded from `brewchat.toml`
///
/// Every section has a runnable default, so a missing or empty file yields a
/// working local setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub products: ProductsConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Write the configuration to a file (used to seed a default config)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.path, PathBuf::from("data/outlets.db"));
        assert_eq!(config.products.path, PathBuf::from("data/products.json"));
        assert_eq!(config.backend.mode, BackendMode::Local);
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.file.enabled);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.backend.mode, BackendMode::Local);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
            [backend]
            mode = "http"
            base_url = "http://chat.example.com"

            [logging]
            level = "debug"
        "#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.backend.mode, BackendMode::Http);
        assert_eq!(config.backend.base_url, "http://chat.example.com");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_parse_unknown_field_rejected() {
        let toml = r#"
            [surprise]
            key = "value"
        "#;
        assert!(Config::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_backend_mode_round_trip() {
        for mode in BackendMode::VALUES {
            let parsed: BackendMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, *mode);
        }
        assert!("carrier-pigeon".parse::<BackendMode>().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brewchat.toml");

        let mut config = Config::default();
        config.logging.level = "info".to_string();
        config.save(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.logging.level, "info");
        assert_eq!(reloaded.backend.mode, BackendMode::Local);
    }
}
