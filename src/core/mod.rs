//! Core logger types and traits

pub mod config;
pub mod environment;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pattern;
pub mod registry;
pub mod transport;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use registry::{Labels, Levels, Methods, Profile, LEVELS, METHODS};
pub use transport::{Registration, Selector, SharedTransport, Transport};
