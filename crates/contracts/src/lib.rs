//! # Contracts
//!
//! Frozen interface contracts shared by every crate in the workspace.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Model
//! - A *stream* is a named logical channel (`StreamName`)
//! - A *sink* is anything that can emit a text message (`Sink`)
//! - Messages are opaque text; no crate in the workspace formats them

mod blueprint;
mod error;
mod sink;
mod stream_name;

pub use blueprint::*;
pub use error::*;
pub use sink::*;
pub use stream_name::StreamName;
