//! Log level definitions
//!
//! Lower severity numbers are more severe: `Alert` is `0`, `Debug` is `8`.
//! A logger configured with `level = n` lets through every level whose
//! severity is `<= n`.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Alert = 0,
    Critical = 1,
    Error = 2,
    Warning = 3,
    Metric = 4,
    Notice = 5,
    Info = 6,
    Log = 7,
    Debug = 8,
}

impl LogLevel {
    /// Every level, most severe first
    pub const ALL: [LogLevel; 9] = [
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Metric,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Log,
        LogLevel::Debug,
    ];

    /// Registry key, also the name of the generated logger method
    pub const fn key(&self) -> &'static str {
        match self {
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Metric => "metric",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Log => "log",
            LogLevel::Debug => "debug",
        }
    }

    #[inline]
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Whether a logger with the given threshold lets this level through
    #[inline]
    pub const fn passes(&self, threshold: u8) -> bool {
        self.severity() <= threshold
    }

    pub fn from_severity(severity: u8) -> Option<Self> {
        Self::ALL.get(severity as usize).copied()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Alert => BrightRed,
            LogLevel::Critical => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Metric => Cyan,
            LogLevel::Notice => Magenta,
            LogLevel::Info => Green,
            LogLevel::Log => White,
            LogLevel::Debug => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alert" => Ok(LogLevel::Alert),
            "critical" | "crit" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "metric" => Ok(LogLevel::Metric),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "log" => Ok(LogLevel::Log),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}
