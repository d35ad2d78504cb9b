//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::{Path, PathBuf};
use steamstats_common::StatsError;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "STEAMSTATS_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["steamstats.yaml", "steamstats.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    IoError {
        /// File that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl From<ConfigError> for StatsError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Configuration loading error", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Read configuration from {}", path.display());

        let mut config = Self::parse(&content)?;
        Self::apply_env_overrides(&mut config);
        config.validate_all()?;

        Ok(config)
    }

    /// Parse YAML text without touching the environment or validating.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration, preferring `explicit`, then `STEAMSTATS_CONFIG_PATH`,
    /// then `steamstats.yaml`/`steamstats.yml`, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_resolved(explicit).map(|(config, _)| config)
    }

    /// Like [`ConfigLoader::load`], also returning the file that was read.
    ///
    /// `None` means built-in defaults were used. Callers that initialise
    /// logging from the result report the source once logging is up.
    pub fn load_resolved(
        explicit: Option<&Path>,
    ) -> Result<(Config, Option<PathBuf>), ConfigError> {
        match Self::discover(explicit) {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let config = Self::load_config(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                debug!("No configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config);
                config.validate_all()?;
                Ok((config, None))
            }
        }
    }

    /// Resolves which configuration file `load` would read.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) {
        Self::apply_overrides_from(config, |key| env::var(key).ok());
    }

    /// Apply overrides read through `lookup`.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("STEAMSTATS_DATA_PATH") {
            config.dataset.path = path;
        }

        if let Some(language) = lookup("STEAMSTATS_LANGUAGE") {
            config.dashboard.language = language;
        }

        if let Some(dir) = lookup("STEAMSTATS_OUTPUT_DIR") {
            config.output.dir = dir;
        }

        if let Some(level) = lookup("STEAMSTATS_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let config = ConfigLoader::parse("dashboard:\n  language: fr\n").unwrap();

        assert_eq!(config.dashboard.language, "fr");
        assert_eq!(config.dashboard.default_year, "2021");
        assert_eq!(config.dataset.columns.game_name, "Game_Name");
        assert_eq!(config.comparison.games.len(), 3);
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let result = ConfigLoader::parse("dataset: [unterminated");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("STEAMSTATS_DATA_PATH", "/tmp/players.csv"),
            ("STEAMSTATS_LANGUAGE", "cn"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        ConfigLoader::apply_overrides_from(&mut config, |key| {
            vars.get(key).map(|value| (*value).to_string())
        });

        assert_eq!(config.dataset.path, "/tmp/players.csv");
        assert_eq!(config.dashboard.language, "cn");
        assert_eq!(config.output.dir, "charts");
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let path = Path::new("custom.yaml");
        assert_eq!(ConfigLoader::discover(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_load_resolved_reports_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"dashboard:\n  language: fr\n").unwrap();

        let (config, source) = ConfigLoader::load_resolved(Some(file.path())).unwrap();

        assert_eq!(config.dashboard.language, "fr");
        assert_eq!(source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConfigLoader::load_config("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
