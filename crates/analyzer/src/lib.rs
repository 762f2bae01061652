// Module structure for the event-pattern analyzer.

// Core
pub mod parser;
pub mod detect;
pub mod analyze;
pub mod error;

// Glue around the core
pub mod filter;
pub mod render;
pub mod conf;
pub mod runtime;

pub use analyze::analyze_log_patterns;
pub use detect::{detect_maximal_patterns, detect_patterns, PatternWindow, DEFAULT_MIN_SEQUENCE_LENGTH};
pub use error::AnalyzeError;
pub use parser::{parse_log_entries, EventRecord};
