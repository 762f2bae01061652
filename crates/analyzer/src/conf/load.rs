//! Load — config loading from file and environment variables.

use std::path::Path;

use super::model::{AnalyzerConfig, ConfigError};
use crate::detect::parse_time_window;
use crate::render::OutputFormat;

pub const CONFIG_FILE_ENV: &str = "ANALYZER_CONFIG_FILE";
pub const DEFAULT_CONFIG_PATH: &str = "analyzer.toml";

pub const TIME_WINDOW_ENV: &str = "ANALYZER_TIME_WINDOW_MS";
pub const MIN_SEQUENCE_LENGTH_ENV: &str = "ANALYZER_MIN_SEQUENCE_LENGTH";
pub const MAXIMAL_ONLY_ENV: &str = "ANALYZER_MAXIMAL_ONLY";
pub const OUTPUT_ENV: &str = "ANALYZER_OUTPUT";
pub const MAX_LINE_SIZE_ENV: &str = "ANALYZER_MAX_LINE_SIZE";

impl AnalyzerConfig {
    /// Load configuration from file and environment variables
    /// Priority: Environment Variables > Config File > Defaults
    ///
    /// An explicit path must exist; the env/default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let config_path = std::env::var(CONFIG_FILE_ENV)
                    .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

                if Path::new(&config_path).exists() {
                    tracing::info!("Loading configuration from: {}", config_path);
                    Self::from_file(&config_path)?
                } else {
                    tracing::debug!("Config file not found at {}, using defaults", config_path);
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// [`AnalyzerConfig::load`]). Unparsable values are errors, never ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TIME_WINDOW_ENV) {
            self.time_window_ms =
                parse_time_window(&raw).map_err(|_| invalid_value(TIME_WINDOW_ENV, &raw))?;
        }
        if let Some(raw) = lookup(MIN_SEQUENCE_LENGTH_ENV) {
            self.min_sequence_length = raw
                .trim()
                .parse()
                .map_err(|_| invalid_value(MIN_SEQUENCE_LENGTH_ENV, &raw))?;
        }
        if let Some(raw) = lookup(MAXIMAL_ONLY_ENV) {
            self.maximal_only = parse_bool(&raw).ok_or_else(|| invalid_value(MAXIMAL_ONLY_ENV, &raw))?;
        }
        if let Some(raw) = lookup(OUTPUT_ENV) {
            self.output = OutputFormat::parse(&raw).ok_or_else(|| invalid_value(OUTPUT_ENV, &raw))?;
        }
        if let Some(raw) = lookup(MAX_LINE_SIZE_ENV) {
            self.max_line_size = raw
                .trim()
                .parse()
                .map_err(|_| invalid_value(MAX_LINE_SIZE_ENV, &raw))?;
        }
        Ok(())
    }

    /// Validate that configuration values are sane.
    ///
    /// The filter regex is compiled later, once, when the pipeline is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detect_options().validate()?;

        if self.max_line_size == 0 {
            return Err(invalid_value("max_line_size", "0"));
        }
        if let Some(filter) = &self.filter {
            if filter.pattern.is_empty() {
                return Err(invalid_value("filter.pattern", &filter.pattern));
            }
        }
        Ok(())
    }
}

fn invalid_value(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
