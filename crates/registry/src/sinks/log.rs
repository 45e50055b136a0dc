//! LogSink - forwards messages as tracing events

use contracts::{ContractError, Sink};
use tracing::info;

/// Sink that re-emits every message through `tracing`
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Sink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, message: &str) -> Result<(), ContractError> {
        info!(sink = %self.name, "{}", message);
        Ok(())
    }
}
