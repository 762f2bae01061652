pub use super::model::{EventRecord, ParseError};

pub trait LineParser: Send + Sync {
    /// parse a single non-blank log line into an event record
    fn parse(&self, line: &str) -> Result<EventRecord, ParseError>;
}
