//! Registry error types

use thiserror::Error;

/// Registry-specific errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Sink creation error
    #[error("failed to create sink '{name}': {message}")]
    SinkCreation { name: String, message: String },

    /// Stream bound to a sink that was never declared
    #[error("stream '{stream}' references unknown sink '{sink}'")]
    UnknownSink { stream: String, sink: String },

    /// Contract-level error (config or sink)
    #[error("sink error: {0}")]
    Contract(#[from] contracts::ContractError),
}

impl RegistryError {
    /// Create a sink creation error
    pub fn sink_creation(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkCreation {
            name: name.into(),
            message: message.into(),
        }
    }
}
