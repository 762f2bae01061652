//! Run — read the log source, then parse → filter → detect → emit.

use std::io::{self, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::conf::{AnalyzerConfig, ConfigError, FilterConfig};
use crate::detect::DetectOptions;
use crate::filter::EventFilter;
use crate::parser::{parse_lines_with, EventLineParser};
use crate::render::{JsonSink, OutputFormat, PatternSink, TextSink};

/// Read the whole log into memory. `-` means stdin.
///
/// Invalid UTF-8 is replaced rather than rejected; such lines simply fail to
/// parse later.
pub fn read_source(path: &Path) -> io::Result<String> {
    let mut raw = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().lock().read_to_end(&mut raw)?;
    } else {
        raw = std::fs::read(path)?;
    }

    match String::from_utf8(raw) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(path = %path.display(), "log source is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Parser, compiled filter and detection options, built once per process.
pub struct Pipeline {
    parser: EventLineParser,
    filter: Option<EventFilter>,
    options: DetectOptions,
}

impl Pipeline {
    /// Validate `config` and compile its filter regex.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let filter = config.filter.as_ref().map(FilterConfig::build).transpose()?;

        Ok(Self {
            parser: config.line_parser(),
            filter,
            options: config.detect_options(),
        })
    }

    pub fn filter(&self) -> Option<&EventFilter> {
        self.filter.as_ref()
    }

    /// Parse, filter and detect over `content`, then hand the result to `sink`.
    ///
    /// Returns the number of windows emitted.
    pub fn analyze_into(
        &self,
        content: &str,
        sink: &mut dyn PatternSink,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let mut records = parse_lines_with(&self.parser, content);

        if let Some(filter) = &self.filter {
            records = filter.apply(records);
        }

        let windows = self.options.detect(&records)?;
        info!(
            records = records.len(),
            windows = windows.len(),
            "Pattern detection finished"
        );

        sink.emit(&windows)?;
        Ok(windows.len())
    }
}

/// Analyze the log at `path` and write the result to stdout.
pub fn run(
    path: &Path,
    config: &AnalyzerConfig,
    pipeline: &Pipeline,
) -> Result<usize, Box<dyn std::error::Error>> {
    let content = read_source(path).map_err(|e| {
        tracing::error!("Failed to read log source {}: {}", path.display(), e);
        e
    })?;

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn PatternSink> = match config.output {
        OutputFormat::Json => Box::new(JsonSink::new(stdout, config.pretty)),
        OutputFormat::Text => Box::new(TextSink::new(stdout)),
    };

    pipeline.analyze_into(&content, sink.as_mut())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterError, FilterMode};
    use crate::parser::parse_log_entries;
    use std::io::Write;

    const LOG: &str = "\
2024-01-15T14:32:15.123Z LOGIN User logged in
2024-01-15T14:32:16.000Z HEARTBEAT
2024-01-15T14:32:17.456Z NAVIGATE User navigated to dashboard
2024-01-15T14:32:45.123Z LOGOUT User logged out
";

    fn exclude_heartbeat() -> AnalyzerConfig {
        AnalyzerConfig {
            filter: Some(FilterConfig {
                pattern: "HEARTBEAT".into(),
                case_sensitive: true,
                mode: FilterMode::Exclude,
            }),
            ..AnalyzerConfig::default()
        }
    }

    #[test]
    fn test_analyze_into_json_sink() {
        let pipeline = Pipeline::from_config(&AnalyzerConfig::default()).unwrap();
        let mut sink = JsonSink::new(Vec::new(), false);

        let count = pipeline.analyze_into(LOG, &mut sink).unwrap();
        assert_eq!(count, 2);
        assert!(pipeline.filter().is_none());

        let out: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(out[0]["events"].as_array().unwrap().len(), 3);
        assert_eq!(out[1]["events"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_analyze_into_applies_filter() {
        let pipeline = Pipeline::from_config(&exclude_heartbeat()).unwrap();
        let mut sink = JsonSink::new(Vec::new(), false);

        let count = pipeline.analyze_into(LOG, &mut sink).unwrap();
        assert_eq!(count, 1);

        let out: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(out[0]["events"][0], "LOGIN User logged in");
        assert_eq!(out[0]["events"][1], "NAVIGATE User navigated to dashboard");
    }

    #[test]
    fn test_filter_is_compiled_once_and_reused() {
        let pipeline = Pipeline::from_config(&exclude_heartbeat()).unwrap();

        for _ in 0..2 {
            let mut sink = TextSink::new(Vec::new());
            assert_eq!(pipeline.analyze_into(LOG, &mut sink).unwrap(), 1);
        }

        // one filter instance saw both runs
        assert_eq!(pipeline.filter().map(EventFilter::stats), Some((8, 6)));
    }

    #[test]
    fn test_invalid_filter_regex_rejected_at_build() {
        let config = AnalyzerConfig::from_toml("[filter]\npattern = \"[oops\"").unwrap();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(ConfigError::Filter(FilterError::InvalidRegex(_)))
        ));
    }

    #[test]
    fn test_zero_min_length_rejected_at_build() {
        let config = AnalyzerConfig {
            min_sequence_length: 0,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_line_limit_from_config() {
        let config = AnalyzerConfig {
            max_line_size: 48,
            ..AnalyzerConfig::default()
        };
        let pipeline = Pipeline::from_config(&config).unwrap();
        let mut sink = JsonSink::new(Vec::new(), false);

        // the NAVIGATE line is over the limit and is dropped
        assert_eq!(pipeline.analyze_into(LOG, &mut sink).unwrap(), 1);

        let out: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(out[0]["events"][0], "LOGIN User logged in");
        assert_eq!(out[0]["events"][1], "HEARTBEAT");
    }

    #[test]
    fn test_read_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOG.as_bytes()).unwrap();

        let content = read_source(file.path()).unwrap();
        assert_eq!(content, LOG);
    }

    #[test]
    fn test_read_source_lossy_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"2024-01-15T14:32:15.123Z BAD \xff\xfe\n").unwrap();

        let content = read_source(file.path()).unwrap();
        assert!(content.contains('\u{FFFD}'));
        assert_eq!(parse_log_entries(&content).len(), 1);
    }

    #[test]
    fn test_read_source_missing_file() {
        assert!(read_source(Path::new("/no/such/file.log")).is_err());
    }
}
