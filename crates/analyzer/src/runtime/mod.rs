//! Runtime module — CLI lifecycle: boot, read, analyze, emit.

pub mod boot;
pub mod cli;
pub mod run;

pub use cli::Cli;
