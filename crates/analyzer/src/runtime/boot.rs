//! Boot — logging init and config resolution.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::{AnalyzerConfig, ConfigError};
use crate::runtime::cli::Cli;
use crate::runtime::run::Pipeline;

/// Initialise the tracing / logging subsystem.
///
/// Logs go to stderr so stdout carries only the rendered patterns.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config (file, env), apply CLI flags on top, then validate it and
/// build the pipeline.
pub fn boot(cli: &Cli) -> Result<(Pipeline, AnalyzerConfig), ConfigError> {
    let mut config = AnalyzerConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    let pipeline = Pipeline::from_config(&config)?;

    info!(
        time_window_ms = config.time_window_ms,
        min_sequence_length = config.min_sequence_length,
        maximal_only = config.maximal_only,
        output = config.output.as_str(),
        max_line_size = config.max_line_size,
        filter = config.filter.as_ref().map(|f| f.pattern.as_str()),
        "Resolved analyzer configuration"
    );

    Ok((pipeline, config))
}
