//! Per-stream dispatch metrics

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a single stream binding
#[derive(Debug, Default)]
pub struct StreamMetrics {
    /// Messages the sink accepted
    emit_count: AtomicU64,
    /// Messages the sink reported as failed
    failure_count: AtomicU64,
}

impl StreamMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total emit count
    pub fn emit_count(&self) -> u64 {
        self.emit_count.load(Ordering::Relaxed)
    }

    /// Increment emit count
    pub fn inc_emit_count(&self) {
        self.emit_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failure count
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Increment failure count
    pub fn inc_failure_count(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            emit_count: self.emit_count(),
            failure_count: self.failure_count(),
        }
    }
}

/// Snapshot of stream metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub emit_count: u64,
    pub failure_count: u64,
}
