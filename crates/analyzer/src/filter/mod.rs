//! Filter module — optional regex filtering of parsed events before detection.

pub mod engine;

pub use engine::{EventFilter, FilterError, FilterMode};
