//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::client::AladhanConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: AladhanConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        if config.api.timeout_ms == 0 {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                error: "api.timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from an explicit path, else the default locations, else environment only.
    ///
    /// An explicit path that fails to load is an error; a broken file in a
    /// default location is skipped with a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_with_env(path);
        }
        Ok(Self::load_default())
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        Self::load_first(&default_paths())
    }

    /// First of `paths` that exists and loads; environment only if none do
    fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("MAWAQIT_API_URL") {
            self.api.base_url = url;
        }
        if let Some(method) = var("MAWAQIT_METHOD") {
            match method.parse() {
                Ok(m) => self.api.method = m,
                Err(_) => tracing::warn!("Ignoring invalid MAWAQIT_METHOD: {}", method),
            }
        }
        if let Some(timeout) = var("MAWAQIT_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(t) if t > 0 => self.api.timeout_ms = t,
                _ => tracing::warn!("Ignoring invalid MAWAQIT_TIMEOUT_MS: {}", timeout),
            }
        }

        // Logging overrides
        if let Some(level) = var("MAWAQIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MAWAQIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("mawaqit").join("config.toml")),
        Some(PathBuf::from("./mawaqit.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mawaqit Configuration
#
# Environment variables override these settings:
# - MAWAQIT_API_URL
# - MAWAQIT_METHOD
# - MAWAQIT_TIMEOUT_MS
# - MAWAQIT_LOG_LEVEL
# - MAWAQIT_LOG_FORMAT

[api]
# Aladhan API base URL (including version)
base_url = "https://api.aladhan.com/v1"

# Calculation method (5 = Egyptian General Authority of Survey)
method = 5

# Request timeout in milliseconds
timeout_ms = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Captures formatted log output
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.aladhan.com/v1");
        assert_eq!(config.api.method, 5);
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.base_url, defaults.api.base_url);
        assert_eq!(config.api.method, defaults.api.method);
        assert_eq!(config.api.timeout_ms, defaults.api.timeout_ms);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[api]\nmethod = 4\n").unwrap();
        assert_eq!(config.api.method, 4);
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_ms = 2500\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[api\nmethod = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
        assert!(Config::resolve(Some(&bad)).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MAWAQIT_API_URL", "http://localhost:9000/v1"),
            ("MAWAQIT_METHOD", "not-a-number"),
            ("MAWAQIT_TIMEOUT_MS", "1500"),
            ("MAWAQIT_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://localhost:9000/v1");
        assert_eq!(config.api.method, 5);
        assert_eq!(config.api.timeout_ms, 1500);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "MAWAQIT_TIMEOUT_MS").then(|| "0".to_string()));
        assert_eq!(config.api.timeout_ms, 10_000);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "[api]\ntimeout_ms = 0\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_rejected_overrides_are_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut config = Config::default();
            config.apply_overrides(|key| match key {
                "MAWAQIT_METHOD" => Some("five".to_string()),
                "MAWAQIT_TIMEOUT_MS" => Some("0".to_string()),
                _ => None,
            });
        });

        let output = logs.contents();
        assert!(output.contains("Ignoring invalid MAWAQIT_METHOD: five"), "{}", output);
        assert!(output.contains("Ignoring invalid MAWAQIT_TIMEOUT_MS: 0"), "{}", output);
    }

    #[test]
    fn test_broken_default_file_is_logged_and_skipped() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\n").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[api]\nmethod = 3\n").unwrap();

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load_first(&[dir.path().join("absent.toml"), broken, good])
        });

        assert_eq!(config.api.method, 3);
        let output = logs.contents();
        assert!(output.contains("Failed to load config from"), "{}", output);
        assert!(output.contains("broken.toml"), "{}", output);
    }
}
