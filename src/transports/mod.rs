//! Transport implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod json;
pub mod memory;

#[cfg(feature = "console")]
pub use console::{ConsoleOptions, ConsoleTransport};
#[cfg(feature = "file")]
pub use file::FileTransport;
#[cfg(feature = "file")]
pub use json::JsonTransport;
pub use memory::{MemorySink, MemoryTransport};

pub use crate::core::Transport;
