use chatpane::{BackendConfig, DEFAULT_MOUNT_SELECTOR};
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the thread snapshot
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".chatpane")
}

fn default_target() -> String {
    DEFAULT_MOUNT_SELECTOR.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. CHATPANE_* environment variables, `__` between nested keys
    ///    (e.g. `CHATPANE_BACKEND__URL`)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CHATPANE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_structure() {
        let toml = r##"
            [backend]
            url = "http://localhost:8787/api/chat"

            [storage]
            dir = "/var/lib/chatpane"

            [widget]
            target = "#support-chat"

            [logging]
            level = "debug"
            format = "json"
        "##;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.endpoint(), Some("http://localhost:8787/api/chat"));
        assert_eq!(config.storage.dir, PathBuf::from("/var/lib/chatpane"));
        assert_eq!(config.widget.target, "#support-chat");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert!(!config.backend.is_configured());
        assert_eq!(config.storage.dir, PathBuf::from(".chatpane"));
        assert_eq!(config.widget.target, DEFAULT_MOUNT_SELECTOR);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"trace\"\n").unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_shipped_default_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = Config::from_file(path).unwrap();

        assert!(!config.backend.is_configured());
        assert_eq!(config.widget.target, DEFAULT_MOUNT_SELECTOR);
    }
}
