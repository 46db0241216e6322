//! Console transport implementation

use crate::core::{LogEntry, LogLevel, Logger, Profile, Result, Transport};
use colored::Colorize;

/// Options accepted by [`ConsoleTransport::construct`]
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Colorize the label; ignored for the production profile
    pub colors: bool,
    /// Entries at this severity or more severe go to stderr
    pub stderr_level: LogLevel,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            colors: true,
            stderr_level: LogLevel::Error,
        }
    }
}

pub struct ConsoleTransport {
    use_colors: bool,
    stderr_level: LogLevel,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::with_options(ConsoleOptions::default())
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self::with_options(ConsoleOptions {
            colors: use_colors,
            ..ConsoleOptions::default()
        })
    }

    pub fn with_options(options: ConsoleOptions) -> Self {
        Self {
            use_colors: options.colors,
            stderr_level: options.stderr_level,
        }
    }

    /// Constructor for [`Logger::use_transport`]
    ///
    /// Colors are turned off when the logger runs in production.
    ///
    /// # Example
    ///
    /// ```
    /// use devnull::prelude::*;
    ///
    /// let mut logger = Logger::new();
    /// logger.use_transport(ConsoleTransport::construct, ConsoleOptions::default());
    /// assert!(logger.has_kind::<ConsoleTransport>().is_some());
    /// ```
    pub fn construct(logger: &Logger, options: ConsoleOptions) -> Self {
        let colors = options.colors && logger.profile() == Profile::Development;
        Self::with_options(ConsoleOptions { colors, ..options })
    }

    /// Format as text with optional colors
    fn format_text(&self, entry: &LogEntry) -> String {
        let label = if self.use_colors {
            format!("{:8}", entry.label)
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:8}", entry.label)
        };

        match entry.stamp {
            Some(ref stamp) => format!("{} {} {}", stamp, label, entry.message),
            None => format!("{} {}", label, entry.message),
        }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_text(entry);

        if entry.level <= self.stderr_level {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn notify(&mut self, entry: &LogEntry) -> Result<()> {
        let banner = format!("!! {} notification: {}", entry.label, entry.message);
        if self.use_colors {
            eprintln!("{}", banner.bold());
        } else {
            eprintln!("{}", banner);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
