//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use devnull::prelude::*;
//! use devnull::{info, metric};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! metric!(logger, "requests={} errors={}", 1200, 3);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use devnull::prelude::*;
/// # let logger = Logger::new();
/// use devnull::emit;
/// emit!(logger, LogLevel::Notice, "Simple message");
/// emit!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write($level, format!($($arg)+))
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use devnull::prelude::*;
/// # let logger = Logger::new();
/// use devnull::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a metric-level message.
#[macro_export]
macro_rules! metric {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Metric, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use devnull::prelude::*;
/// # let logger = Logger::new();
/// use devnull::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a log-level message.
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Log, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}
