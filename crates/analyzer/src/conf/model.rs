//! Model — AnalyzerConfig and related structs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::{DetectOptions, DEFAULT_MIN_SEQUENCE_LENGTH};
use crate::error::AnalyzeError;
use crate::filter::{EventFilter, FilterError, FilterMode};
use crate::parser::{EventLineParser, MAX_LINE_SIZE};
use crate::render::OutputFormat;

pub const DEFAULT_TIME_WINDOW_MS: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub time_window_ms: i64,
    pub min_sequence_length: usize,
    pub maximal_only: bool,
    pub output: OutputFormat,
    pub pretty: bool,
    /// Longer lines are dropped with a warning.
    pub max_line_size: usize,
    pub filter: Option<FilterConfig>,
}

/// Optional regex filter applied to event strings before detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub pattern: String,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    #[serde(default)]
    pub mode: FilterMode,
}

fn default_case_sensitive() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] AnalyzeError),

    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            time_window_ms: DEFAULT_TIME_WINDOW_MS,
            min_sequence_length: DEFAULT_MIN_SEQUENCE_LENGTH,
            maximal_only: false,
            output: OutputFormat::default(),
            pretty: false,
            max_line_size: MAX_LINE_SIZE,
            filter: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::new(self.time_window_ms)
            .with_min_sequence_length(self.min_sequence_length)
            .maximal_only(self.maximal_only)
    }

    pub fn line_parser(&self) -> EventLineParser {
        EventLineParser::with_max_line_size(self.max_line_size)
    }
}

impl FilterConfig {
    pub fn build(&self) -> Result<EventFilter, FilterError> {
        EventFilter::new(&self.pattern, self.case_sensitive, self.mode)
    }
}
