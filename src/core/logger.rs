//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    registry::{Levels, Methods, Profile, LEVELS, METHODS},
    transport::{Registration, Selector, SharedTransport, Transport},
};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Logging facade dispatching to an ordered list of transports
///
/// The five public fields are the logger's settings; they can be changed at
/// any time, typically from a [`configure`](Logger::configure) block.
///
/// # Example
///
/// ```
/// use devnull::prelude::*;
///
/// let (memory, sink) = MemoryTransport::new();
///
/// let mut logger = Logger::with_config(LoggerConfig::new().env("production"));
/// logger
///     .configure_in(Some("production"), |logger| logger.level = 3)
///     .use_transport(|_, ()| memory, ());
///
/// logger.error("disk failure");
/// logger.info("suppressed");
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.entries()[0].label, "ERROR");
/// ```
#[derive(Debug)]
pub struct Logger {
    /// Current environment name
    pub env: String,
    /// Highest severity number that still produces output
    pub level: u8,
    /// Entries with a severity at or below this number are flagged `notify`
    pub notification: u8,
    /// Attach a pattern-rendered timestamp to every entry
    pub timestamp: bool,
    /// Timestamp template, see [`pattern`](super::pattern)
    pub pattern: String,
    transports: Vec<Registration>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Crate version, `MAJOR.MINOR.PATCH`
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Logger with every setting at its default
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Logger with the set fields of `config` overriding the defaults
    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        let settings = config.resolve();
        Self {
            env: settings.env,
            level: settings.level,
            notification: settings.notification,
            timestamp: settings.timestamp,
            pattern: settings.pattern,
            transports: Vec::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Logger configured from a JSON object; keys that are not settings are
    /// ignored
    ///
    /// # Example
    ///
    /// ```
    /// use devnull::Logger;
    ///
    /// let logger = Logger::from_json(r#"{"level": 1, "pattern": "pew pew"}"#).unwrap();
    /// assert_eq!(logger.level, 1);
    /// assert_eq!(logger.pattern, "pew pew");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::with_config(LoggerConfig::from_json(json)?))
    }

    /// Label tables for both profiles
    pub fn methods() -> &'static Methods {
        &METHODS
    }

    /// Severity of every level key
    pub fn levels() -> &'static Levels {
        &LEVELS
    }

    /// Label profile for the current environment
    pub fn profile(&self) -> Profile {
        Profile::for_env(&self.env)
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level.severity();
    }

    /// Whether an entry at `level` would reach the transports
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level)
    }

    /// Run `callback` with this logger, whatever the environment
    pub fn configure<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&mut Logger),
    {
        self.configure_in(None, callback)
    }

    /// Run `callback` only when `environment` is `None` or equals `self.env`
    ///
    /// # Example
    ///
    /// ```
    /// use devnull::{Logger, LoggerConfig};
    ///
    /// let mut logger = Logger::with_config(LoggerConfig::new().env("staging"));
    /// logger
    ///     .configure_in(Some("production"), |logger| logger.timestamp = false)
    ///     .configure_in(Some("staging"), |logger| logger.level = 5);
    ///
    /// assert!(logger.timestamp);
    /// assert_eq!(logger.level, 5);
    /// ```
    pub fn configure_in<F>(&mut self, environment: Option<&str>, callback: F) -> &mut Self
    where
        F: FnOnce(&mut Logger),
    {
        match environment {
            Some(env) if env != self.env => {}
            _ => callback(self),
        }
        self
    }

    /// Construct a transport and append it
    ///
    /// `constructor` runs immediately with this logger and `options`; the
    /// returned transport is the new last entry.
    pub fn use_transport<T, O, F>(&mut self, constructor: F, options: O) -> &mut Self
    where
        T: Transport,
        F: FnOnce(&Logger, O) -> T,
    {
        let transport = constructor(self, options);
        self.transports.push(Registration::new(transport));
        self
    }

    /// Like [`use_transport`](Logger::use_transport) for fallible
    /// constructors; nothing is appended on error
    pub fn try_use_transport<T, O, F>(&mut self, constructor: F, options: O) -> Result<&mut Self>
    where
        T: Transport,
        F: FnOnce(&Logger, O) -> Result<T>,
    {
        let transport = constructor(self, options)?;
        self.transports.push(Registration::new(transport));
        Ok(self)
    }

    /// Append an already built transport and return its handle
    pub fn attach<T: Transport>(&mut self, transport: T) -> SharedTransport {
        let registration = Registration::new(transport);
        let handle = registration.handle().clone();
        self.transports.push(registration);
        handle
    }

    /// First registered transport matching `selector`
    pub fn has<'a>(&self, selector: impl Into<Selector<'a>>) -> Option<&Registration> {
        let selector = selector.into();
        self.transports.iter().find(|r| r.matches(&selector))
    }

    /// First registered transport constructed as a `T`
    pub fn has_kind<T: Transport>(&self) -> Option<&Registration> {
        self.has(Selector::kind::<T>())
    }

    /// Remove and close the first transport matching `selector`
    pub fn remove<'a>(&mut self, selector: impl Into<Selector<'a>>) -> &mut Self {
        let selector = selector.into();
        if let Some(idx) = self.transports.iter().position(|r| r.matches(&selector)) {
            let registration = self.transports.remove(idx);
            let closed = catch_unwind(AssertUnwindSafe(|| registration.handle().lock().close()));
            match closed {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Transport #{} close failed: {}", idx, e);
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Transport #{} panicked during close: {}",
                        idx,
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
        self
    }

    pub fn transports(&self) -> &[Registration] {
        &self.transports
    }

    pub fn len(&self) -> usize {
        self.transports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }

    /// Dispatch counters
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Format `message` and hand it to every transport
    ///
    /// Nothing happens when `level`'s severity is above `self.level`.
    pub fn write(&self, level: LogLevel, message: impl Into<String>) -> &Self {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return self;
        }

        let mut entry = LogEntry::new(level, message.into())
            .with_env(&self.env)
            .with_notify(level.severity() <= self.notification);
        if self.timestamp {
            entry = entry.with_stamp(&self.pattern);
        }

        if entry.notify {
            self.metrics.record_notification();
        }
        self.dispatch(&entry);
        self
    }

    /// Deliver `entry` with per-transport panic isolation
    ///
    /// A transport that errors or panics is reported and skipped; the rest
    /// still receive the entry.
    fn dispatch(&self, entry: &LogEntry) {
        let mut has_error = false;

        for (idx, registration) in self.transports.iter().enumerate() {
            let delivered = catch_unwind(AssertUnwindSafe(|| -> Result<()> {
                let mut transport = registration.handle().lock();
                transport.write(entry)?;
                if entry.notify {
                    transport.notify(entry)?;
                }
                Ok(())
            }));

            match delivered {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    let err = LoggerError::transport(registration.name(), e.to_string());
                    eprintln!("[LOGGER ERROR] Transport #{}: {}", idx, err);
                    self.metrics.record_failed();
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Transport #{} panicked: {}. \
                         Other transports continue to function.",
                        idx,
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_failed();
                    has_error = true;
                }
            }
        }

        if !has_error && !self.transports.is_empty() {
            self.metrics.record_written();
        }
    }

    /// Flush every transport, stopping at the first error
    pub fn flush(&self) -> Result<()> {
        for registration in &self.transports {
            registration.handle().lock().flush()?;
        }
        Ok(())
    }
}

/// One method per registry key, each forwarding to [`Logger::write`]
macro_rules! level_methods {
    ($($(#[$meta:meta])* $method:ident => $level:ident;)+) => {
        impl Logger {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method(&self, message: impl Into<String>) -> &Self {
                    self.write(LogLevel::$level, message)
                }
            )+
        }
    };
}

level_methods! {
    alert => Alert;
    critical => Critical;
    error => Error;
    warning => Warning;
    /// Measurements and counters, between warnings and notices
    metric => Metric;
    notice => Notice;
    info => Info;
    log => Log;
    debug => Debug;
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed deliveries (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use devnull::prelude::*;
///
/// let (memory, sink) = MemoryTransport::new();
/// let logger = Logger::builder()
///     .env("test")
///     .level(LogLevel::Notice)
///     .timestamp(false)
///     .transport(memory)
///     .build();
///
/// logger.notice("kept").debug("dropped");
/// assert_eq!(sink.len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    transports: Vec<Registration>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            transports: Vec::new(),
        }
    }

    /// Start from a partial configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            transports: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.config = self.config.env(env);
        self
    }

    /// Set the threshold from a level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config = self.config.level(level.severity());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn notification(mut self, level: LogLevel) -> Self {
        self.config = self.config.notification(level.severity());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.config = self.config.timestamp(timestamp);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config = self.config.pattern(pattern);
        self
    }

    /// Add a transport
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport>(mut self, transport: T) -> Self {
        self.transports.push(Registration::new(transport));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::with_config(self.config);
        logger.transports = self.transports;
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transports::MemoryTransport;

    fn quiet() -> Logger {
        Logger::builder().env("test").timestamp(false).build()
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert!(!logger.env.is_empty());
        assert_eq!(logger.level, 8);
        assert_eq!(logger.notification, 1);
        assert!(logger.timestamp);
        assert!(!logger.pattern.is_empty());
        assert!(logger.is_empty());
    }

    #[test]
    fn test_builder_settings() {
        let logger = Logger::builder()
            .env("production")
            .level(LogLevel::Warning)
            .notification(LogLevel::Alert)
            .pattern("{FullYear}")
            .build();

        assert_eq!(logger.env, "production");
        assert_eq!(logger.level, 3);
        assert_eq!(logger.notification, 0);
        assert_eq!(logger.pattern, "{FullYear}");
        assert_eq!(logger.profile(), Profile::Production);
    }

    #[test]
    fn test_threshold_suppresses_less_severe() {
        let (memory, sink) = MemoryTransport::new();
        let mut logger = quiet();
        logger.attach(memory);
        logger.set_level(LogLevel::Error);

        logger.alert("a").critical("c").error("e").warning("w").debug("d");

        let levels: Vec<LogLevel> = sink.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Alert, LogLevel::Critical, LogLevel::Error]);
        assert_eq!(logger.metrics().suppressed_count(), 2);
        assert_eq!(logger.metrics().written_count(), 3);
    }

    #[test]
    fn test_notify_threshold() {
        let (memory, sink) = MemoryTransport::new();
        let mut logger = quiet();
        logger.attach(memory);

        logger.alert("a").critical("c").error("e");

        assert_eq!(sink.notifications(), 2);
        let flags: Vec<bool> = sink.entries().iter().map(|e| e.notify).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_stamp_follows_timestamp_setting() {
        let (memory, sink) = MemoryTransport::new();
        let mut logger = Logger::with_config(LoggerConfig::new().pattern("[{FullYear}]"));
        logger.attach(memory);

        logger.info("with stamp");
        logger.timestamp = false;
        logger.info("without stamp");

        let entries = sink.entries();
        let stamp = entries[0].stamp.as_deref().unwrap();
        assert!(stamp.starts_with('[') && stamp.ends_with(']') && stamp.len() == 6);
        assert!(entries[1].stamp.is_none());
    }

    #[test]
    fn test_failing_transport_is_isolated() {
        struct Failing;

        impl Transport for Failing {
            fn write(&mut self, _entry: &LogEntry) -> Result<()> {
                Err(LoggerError::other("Simulated failure"))
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        struct Panicking;

        impl Transport for Panicking {
            fn write(&mut self, _entry: &LogEntry) -> Result<()> {
                panic!("boom");
            }

            fn name(&self) -> &str {
                "panicking"
            }
        }

        let (memory, sink) = MemoryTransport::new();
        let mut logger = quiet();
        logger.attach(Failing);
        logger.attach(Panicking);
        logger.attach(memory);

        logger.info("still delivered");

        assert_eq!(sink.len(), 1);
        assert_eq!(logger.metrics().failed_count(), 2);
        assert_eq!(logger.metrics().written_count(), 0);
    }

    #[test]
    fn test_oversized_pad_width_does_not_panic() {
        let (memory, sink) = MemoryTransport::new();
        let mut logger =
            Logger::from_json(r#"{"pattern": "{FullYear:50000000} {Month:18446744073709551615}"}"#)
                .unwrap();
        logger.attach(memory);

        logger.info("x");

        let entries = sink.entries();
        assert_eq!(
            entries[0].stamp.as_deref(),
            Some("{FullYear:50000000} {Month:18446744073709551615}")
        );
        assert_eq!(logger.metrics().written_count(), 1);
    }

    #[test]
    fn test_written_needs_a_transport() {
        let logger = quiet();
        logger.info("nobody listening");
        assert_eq!(logger.metrics().written_count(), 0);
        assert_eq!(logger.metrics().failed_count(), 0);
    }

    #[test]
    fn test_remove_closes_transport() {
        let (memory, sink) = MemoryTransport::new();
        let mut logger = quiet();
        let handle = logger.attach(memory);

        logger.remove(&handle);

        assert!(logger.is_empty());
        assert!(sink.is_closed());
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown panic");
    }
}
