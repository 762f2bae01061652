//! CLI — command-line arguments and how they override loaded configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::conf::{AnalyzerConfig, FilterConfig};
use crate::filter::FilterMode;
use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "analyzer")]
#[command(about = "Detect temporal clusters of events in a timestamped log")]
#[command(version)]
pub struct Cli {
    /// Log file to analyze (`-` reads stdin)
    pub path: PathBuf,

    /// Window duration in milliseconds, measured from each anchor event
    #[arg(short = 'w', long = "window-ms", allow_negative_numbers = true)]
    pub window_ms: Option<i64>,

    /// Minimum number of events in a reported window
    #[arg(short = 'm', long = "min-length")]
    pub min_length: Option<usize>,

    /// Only report windows not contained in an earlier window
    #[arg(long)]
    pub maximal: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// TOML config file (defaults to $ANALYZER_CONFIG_FILE or ./analyzer.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only analyze events matching this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Drop events matching --filter instead of keeping them
    #[arg(long, requires = "filter")]
    pub exclude: bool,

    /// Match --filter case-insensitively
    #[arg(short = 'i', long, requires = "filter")]
    pub ignore_case: bool,
}

impl Cli {
    /// Flags win over file and environment values.
    pub fn apply_to(&self, config: &mut AnalyzerConfig) {
        if let Some(window_ms) = self.window_ms {
            config.time_window_ms = window_ms;
        }
        if let Some(min_length) = self.min_length {
            config.min_sequence_length = min_length;
        }
        if self.maximal {
            config.maximal_only = true;
        }
        if let Some(format) = self.format {
            config.output = format;
        }
        if self.pretty {
            config.pretty = true;
        }
        if let Some(pattern) = &self.filter {
            config.filter = Some(FilterConfig {
                pattern: pattern.clone(),
                case_sensitive: !self.ignore_case,
                mode: if self.exclude {
                    FilterMode::Exclude
                } else {
                    FilterMode::Include
                },
            });
        }
    }
}
