//! Registry - process-wide stream -> sink dispatch table

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use contracts::{ContractError, SharedSink, StreamName};

use crate::handle::SinkHandle;
use crate::metrics::MetricsSnapshot;

static INSTANCE: OnceLock<Registry> = OnceLock::new();

#[cfg(test)]
static INSTANCE_INITS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// Hidden registry state.
///
/// Every mutation is a single map operation, so a poisoned lock still
/// guards a consistent map and is recovered rather than propagated.
#[derive(Default)]
struct RegistryInner {
    streams: HashMap<StreamName, SinkHandle>,
}

/// Maps stream names to sinks and dispatches messages
///
/// The process-wide instance is created lazily by [`Registry::instance`]
/// and lives until the process exits. [`Registry::new`] builds an
/// independent registry with the same behavior, for tests and embedders
/// that do not want global state.
pub struct Registry {
    inner: RwLock<RegistryInner>,
    unrouted: AtomicU64,
}

impl Registry {
    /// Create an empty, independent registry
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
            unrouted: AtomicU64::new(0),
        }
    }

    /// The process-wide registry
    ///
    /// Initialized on first call, exactly once, no matter how many threads
    /// race on that first call. Every call returns the same instance.
    pub fn instance() -> &'static Registry {
        INSTANCE.get_or_init(|| {
            #[cfg(test)]
            INSTANCE_INITS.fetch_add(1, Ordering::SeqCst);
            debug!("Process-wide registry initialized");
            Registry::new()
        })
    }

    /// Bind `sink` to stream `name`
    ///
    /// An existing binding under the same name is replaced; the displaced
    /// sink receives no call and is dropped once nothing else holds it.
    pub fn add_sink(&self, name: impl Into<StreamName>, sink: SharedSink) {
        let name = name.into();
        let sink_name = sink.name().to_string();
        let handle = SinkHandle::new(name.clone(), sink);

        let displaced = self.write().streams.insert(name.clone(), handle);
        let replaced = displaced.is_some();

        // Dropped after the lock is released.
        drop(displaced);

        observability::record_stream_bound(&name, replaced);
        debug!(stream = %name, sink = %sink_name, replaced, "Sink bound to stream");
    }

    /// Send `message` to the sink bound under `name`
    ///
    /// A name with no binding is a silent no-op and returns `Ok(())`. The
    /// sink runs after the registry lock is released; whatever it returns
    /// is handed back unchanged.
    pub fn print(&self, name: &str, message: &str) -> Result<(), ContractError> {
        match self.handle(name) {
            Some(handle) => handle.emit(message),
            None => {
                self.unrouted.fetch_add(1, Ordering::Relaxed);
                observability::record_message_unrouted();
                Ok(())
            }
        }
    }

    /// Current binding for `name`, if any
    pub fn handle(&self, name: &str) -> Option<SinkHandle> {
        self.read().streams.get(name).cloned()
    }

    /// Whether `name` currently has a binding
    pub fn has_stream(&self, name: &str) -> bool {
        self.read().streams.contains_key(name)
    }

    /// Bound stream names, sorted
    pub fn stream_names(&self) -> Vec<StreamName> {
        let mut names: Vec<StreamName> = self.read().streams.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of bound streams
    pub fn len(&self) -> usize {
        self.read().streams.len()
    }

    /// Whether no stream is bound
    pub fn is_empty(&self) -> bool {
        self.read().streams.is_empty()
    }

    /// Metrics for every bound stream, sorted by stream name
    pub fn metrics(&self) -> Vec<(StreamName, MetricsSnapshot)> {
        let mut metrics: Vec<_> = self
            .read()
            .streams
            .iter()
            .map(|(name, handle)| (name.clone(), handle.metrics().snapshot()))
            .collect();
        metrics.sort_by(|a, b| a.0.cmp(&b.0));
        metrics
    }

    /// Number of messages printed to streams with no binding
    pub fn unrouted_count(&self) -> u64 {
        self.unrouted.load(Ordering::Relaxed)
    }

    /// Flush every distinct bound sink once
    ///
    /// Aliased sinks are flushed a single time. Returns the first error
    /// after attempting all sinks.
    pub fn flush(&self) -> Result<(), ContractError> {
        let mut sinks: Vec<SharedSink> = Vec::new();
        for handle in self.read().streams.values() {
            if !sinks.iter().any(|s| Arc::ptr_eq(s, handle.sink())) {
                sinks.push(handle.sink().clone());
            }
        }

        let mut first_error = None;
        for sink in sinks {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
