//! ConsoleSink - writes one line per message to stdout or stderr

use std::collections::HashMap;
use std::io::{self, Write};

use contracts::{ContractError, Sink};

/// Which standard stream a ConsoleSink writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    /// Parse the `target` parameter
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "stdout" => Some(Self::Stdout),
            "stderr" => Some(Self::Stderr),
            _ => None,
        }
    }
}

/// Sink that prints each message on its own line and flushes
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    name: String,
    target: ConsoleTarget,
}

impl ConsoleSink {
    /// Create a stdout ConsoleSink
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_target(name, ConsoleTarget::Stdout)
    }

    pub fn with_target(name: impl Into<String>, target: ConsoleTarget) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Create from params map (for factory)
    pub fn from_params(
        name: impl Into<String>,
        params: &HashMap<String, String>,
    ) -> Result<Self, String> {
        let target = match params.get("target") {
            Some(value) => ConsoleTarget::parse(value)
                .ok_or_else(|| format!("unknown console target '{}'", value))?,
            None => ConsoleTarget::default(),
        };
        Ok(Self::with_target(name, target))
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", message)?;
                out.flush()
            }
            ConsoleTarget::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{}", message)?;
                out.flush()
            }
        }
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, message: &str) -> Result<(), ContractError> {
        self.write_line(message)
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }

    fn flush(&self) -> Result<(), ContractError> {
        let result = match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        };
        result.map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_params() {
        let params = HashMap::from([("target".to_string(), "STDERR".to_string())]);
        let sink = ConsoleSink::from_params("console", &params).unwrap();
        assert_eq!(sink.target(), ConsoleTarget::Stderr);

        let sink = ConsoleSink::from_params("console", &HashMap::new()).unwrap();
        assert_eq!(sink.target(), ConsoleTarget::Stdout);
    }

    #[test]
    fn test_unknown_target_rejected() {
        let params = HashMap::from([("target".to_string(), "printer".to_string())]);
        let err = ConsoleSink::from_params("console", &params).unwrap_err();
        assert!(err.contains("printer"), "got: {err}");
    }

    #[test]
    fn test_console_emit() {
        let sink = ConsoleSink::new("cout");
        assert!(sink.emit("Hello World").is_ok());
    }
}
