//! NullSink - discards everything

use contracts::{ContractError, Sink};

/// Sink that accepts and drops every message
#[derive(Debug, Clone)]
pub struct NullSink {
    name: String,
}

impl NullSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Sink for NullSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, _message: &str) -> Result<(), ContractError> {
        Ok(())
    }
}
