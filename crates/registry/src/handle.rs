//! SinkHandle - one stream's binding to a shared sink

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use contracts::{ContractError, SharedSink, StreamName};

use crate::metrics::StreamMetrics;

/// Binding of a stream name to a sink
///
/// Cloning is cheap (two reference counts); the registry hands out clones
/// so that `emit` runs without the registry lock held.
#[derive(Clone)]
pub struct SinkHandle {
    /// Stream this handle is bound under
    stream: StreamName,
    /// The sink, possibly shared with other streams
    sink: SharedSink,
    /// Per-binding metrics
    metrics: Arc<StreamMetrics>,
}

impl SinkHandle {
    /// Create a new binding with fresh metrics
    pub fn new(stream: StreamName, sink: SharedSink) -> Self {
        Self {
            stream,
            sink,
            metrics: Arc::new(StreamMetrics::new()),
        }
    }

    /// Get stream name
    pub fn stream(&self) -> &StreamName {
        &self.stream
    }

    /// Get the bound sink
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Get current metrics
    pub fn metrics(&self) -> &Arc<StreamMetrics> {
        &self.metrics
    }

    /// Forward a message to the sink
    ///
    /// The sink's error is returned as-is; only metrics and a log line are
    /// added on the way out.
    pub fn emit(&self, message: &str) -> Result<(), ContractError> {
        match self.sink.emit(message) {
            Ok(()) => {
                self.metrics.inc_emit_count();
                observability::record_message_dispatched(&self.stream, true);
                Ok(())
            }
            Err(e) => {
                self.metrics.inc_failure_count();
                observability::record_message_dispatched(&self.stream, false);
                warn!(
                    stream = %self.stream,
                    sink = self.sink.name(),
                    error = %e,
                    "Emit failed"
                );
                Err(e)
            }
        }
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkHandle")
            .field("stream", &self.stream)
            .field("sink", &self.sink.name())
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Sink;

    /// Mock sink for testing
    struct MockSink {
        should_fail: bool,
    }

    impl Sink for MockSink {
        fn name(&self) -> &str {
            "mock"
        }

        fn emit(&self, _message: &str) -> Result<(), ContractError> {
            if self.should_fail {
                return Err(ContractError::sink_write("mock", "mock failure"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_emit_counts_successes() {
        let handle = SinkHandle::new("cout".into(), Arc::new(MockSink { should_fail: false }));

        for _ in 0..3 {
            handle.emit("message").unwrap();
        }

        assert_eq!(handle.metrics().emit_count(), 3);
        assert_eq!(handle.metrics().failure_count(), 0);
    }

    #[test]
    fn test_emit_failure_is_returned_unchanged() {
        let handle = SinkHandle::new("cout".into(), Arc::new(MockSink { should_fail: true }));

        let err = handle.emit("message").unwrap_err();

        assert!(matches!(err, ContractError::SinkWrite { ref sink_name, .. } if sink_name == "mock"));
        assert_eq!(handle.metrics().failure_count(), 1);
        assert_eq!(handle.metrics().emit_count(), 0);
    }

    #[test]
    fn test_clones_share_metrics() {
        let handle = SinkHandle::new("cout".into(), Arc::new(MockSink { should_fail: false }));
        let clone = handle.clone();

        clone.emit("message").unwrap();

        assert_eq!(handle.metrics().emit_count(), 1);
        assert!(Arc::ptr_eq(handle.sink(), clone.sink()));
    }
}
