//! Sink implementations
//!
//! Contains ConsoleSink, LogSink, FileSink, CaptureSink and NullSink.

mod capture;
mod console;
mod file;
mod log;
mod null;

pub use self::capture::CaptureSink;
pub use self::console::{ConsoleSink, ConsoleTarget};
pub use self::file::{FileSink, FileSinkConfig};
pub use self::log::LogSink;
pub use self::null::NullSink;
