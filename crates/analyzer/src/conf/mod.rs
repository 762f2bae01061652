//! Conf module — configuration model and loading.

pub mod model;
pub mod load;

pub use model::{AnalyzerConfig, ConfigError, FilterConfig, DEFAULT_TIME_WINDOW_MS};
