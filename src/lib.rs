//! # devnull
//!
//! A small, pluggable logging facade. A [`Logger`] holds a handful of
//! settings and an ordered list of transports; every level method formats
//! an entry and hands it to each transport in turn.
//!
//! ## Features
//!
//! - **Typed configuration**: partial [`LoggerConfig`] merged over defaults,
//!   also parseable from JSON
//! - **Environment gates**: [`Logger::configure_in`] runs setup only in the
//!   matching environment
//! - **Pluggable transports**: console, file, JSON lines and in-memory,
//!   plus anything implementing [`Transport`]
//! - **Isolated dispatch**: a failing transport never stops the others
//!
//! ```
//! use devnull::prelude::*;
//!
//! let (memory, sink) = MemoryTransport::new();
//! let mut logger = Logger::new();
//! logger
//!     .configure(|logger| logger.timestamp = false)
//!     .use_transport(|_, ()| memory, ());
//!
//! logger.warning("low disk space");
//! assert_eq!(sink.messages(), vec!["low disk space".to_string()]);
//! ```

pub mod core;
pub mod macros;
pub mod transports;

/// Crate version, `MAJOR.MINOR.PATCH`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::transports::{ConsoleOptions, ConsoleTransport};
    #[cfg(feature = "file")]
    pub use crate::transports::{FileTransport, JsonTransport};
    pub use crate::transports::{MemorySink, MemoryTransport};
    pub use crate::core::{
        LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Profile, Registration, Result, Selector, SharedTransport, Transport,
    };
}

#[cfg(feature = "console")]
pub use transports::ConsoleTransport;
#[cfg(feature = "file")]
pub use transports::{FileTransport, JsonTransport};
pub use transports::{MemorySink, MemoryTransport};
pub use crate::core::{
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Methods,
    Levels, Profile, Registration, Result, Selector, SharedTransport, Transport, LEVELS, METHODS,
};
