//! CaptureSink - records messages in memory

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use contracts::{ContractError, Sink};

/// Sink that keeps every emitted message, in arrival order
///
/// Meant for assertions in tests; safe to share across streams and threads.
#[derive(Debug, Default)]
pub struct CaptureSink {
    name: String,
    messages: Mutex<Vec<String>>,
    flushes: AtomicU64,
}

impl CaptureSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Copy of everything recorded so far
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded messages
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of times `flush` was called
    pub fn flush_count(&self) -> u64 {
        self.flushes.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for CaptureSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, message: &str) -> Result<(), ContractError> {
        self.lock().push(message.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), ContractError> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
