use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the JShort backend; short URLs are `{base_url}/url/{code}`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot backend: "file" or "memory" (memory keeps nothing between runs)
    #[serde(default = "default_snapshot_backend")]
    pub backend: String,
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_snapshot_backend() -> String {
    "file".to_string()
}

fn default_snapshot_file() -> String {
    // Same namespaced key the browser front end used in local storage
    "jshort-urls.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_snapshot_backend(),
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = ["jshort.toml", "config.toml", "/etc/jshort/config.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<Config>(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        if let Ok(base_url) = env::var("JSHORT_API_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(backend) = env::var("JSHORT_SNAPSHOT_BACKEND") {
            self.storage.backend = backend;
        }
        if let Ok(snapshot_file) = env::var("JSHORT_SNAPSHOT_FILE") {
            self.storage.snapshot_file = snapshot_file;
        }
        if let Ok(log_level) = env::var("RUST_LOG") {
            self.logging.level = log_level;
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = Config::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

// Global configuration instance
use std::sync::OnceLock;
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(Config::load);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.snapshot_file, "jshort-urls.json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"https://jshort.example/api\"\n")
            .expect("partial config should parse");
        assert_eq!(config.api.base_url, "https://jshort.example/api");
        assert_eq!(config.storage.snapshot_file, "jshort-urls.json");
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = Config::generate_sample_config();
        let parsed: Config = toml::from_str(&sample).expect("sample config should parse");
        assert_eq!(parsed.api.base_url, Config::default().api.base_url);
    }
}
