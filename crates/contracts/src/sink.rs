//! Sink trait - Registry output interface
//!
//! Defines the abstract interface for Sinks.

use std::sync::Arc;

use crate::ContractError;

/// Text output trait
///
/// All sink implementations must implement this trait. `emit` takes `&self`:
/// a sink may be bound under several stream names and called from several
/// threads at once, so it owns whatever synchronization it needs.
pub trait Sink: Send + Sync {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Deliver one message to the underlying destination
    ///
    /// # Errors
    /// Returns the sink's own failure (should include context). Sinks that
    /// cannot fail always return `Ok(())`.
    fn emit(&self, message: &str) -> Result<(), ContractError>;

    /// Flush buffer (if any)
    fn flush(&self) -> Result<(), ContractError> {
        Ok(())
    }
}

/// Shared, reference-counted sink
///
/// The same instance may be bound under any number of stream names.
pub type SharedSink = Arc<dyn Sink>;
