//! # Registry
//!
//! 日志分发注册表。
//!
//! 负责：
//! - 维护进程级单例 (首次访问时初始化，仅一次)
//! - Stream 名称 -> Sink 的绑定与替换
//! - 按 stream 名称分发消息；未绑定的 stream 静默忽略
//!
//! ```
//! use std::sync::Arc;
//! use registry::{CaptureSink, Registry};
//!
//! let capture = Arc::new(CaptureSink::new("capture"));
//! let registry = Registry::new();
//! registry.add_sink("cout", capture.clone());
//! registry.print("cout", "Hello World").unwrap();
//! registry.print("missing", "dropped").unwrap();
//! assert_eq!(capture.messages(), vec!["Hello World"]);
//! ```

pub mod builder;
pub mod error;
pub mod handle;
pub mod metrics;
pub mod registry;
pub mod sinks;

pub use builder::{create_sink, install, RegistryBuilder};
pub use contracts::{SharedSink, Sink, StreamName};
pub use error::RegistryError;
pub use handle::SinkHandle;
pub use metrics::{MetricsSnapshot, StreamMetrics};
pub use registry::Registry;
pub use sinks::{
    CaptureSink, ConsoleSink, ConsoleTarget, FileSink, FileSinkConfig, LogSink, NullSink,
};
