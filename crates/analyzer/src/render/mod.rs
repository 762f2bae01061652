//! Render module — sinks that receive the final ordered window list.

pub mod json;
pub mod text;

pub use json::JsonSink;
pub use text::TextSink;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::PatternWindow;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Consumer of detected pattern windows.
pub trait PatternSink {
    fn emit(&mut self, windows: &[PatternWindow]) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" | "plain" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}
