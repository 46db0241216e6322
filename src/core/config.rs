//! Logger configuration
//!
//! [`LoggerConfig`] is the partial form accepted by the constructor: every
//! field is optional and only the fields that are set override a default.
//! The field set is closed. When parsed from JSON, keys that are not one of
//! the five settings (including method names such as `"use"`) are ignored.

use super::environment;
use super::error::Result;
use super::log_level::LogLevel;
use super::pattern::DEFAULT_PATTERN;
use serde::{Deserialize, Serialize};

/// Default threshold: every level passes
pub const DEFAULT_LEVEL: u8 = LogLevel::Debug.severity();

/// Default notification threshold: `critical` and `alert`
pub const DEFAULT_NOTIFICATION: u8 = LogLevel::Critical.severity();

pub const DEFAULT_TIMESTAMP: bool = true;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration object, dropping keys that are not settings
    ///
    /// # Example
    ///
    /// ```
    /// use devnull::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json(r#"{"level": 1, "use": "pewpew"}"#).unwrap();
    /// assert_eq!(config.level, Some(1));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    #[must_use]
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn notification(mut self, notification: u8) -> Self {
        self.notification = Some(notification);
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Fill every unset field with its default
    pub(crate) fn resolve(self) -> Settings {
        Settings {
            env: self.env.unwrap_or_else(environment::current),
            level: self.level.unwrap_or(DEFAULT_LEVEL),
            notification: self.notification.unwrap_or(DEFAULT_NOTIFICATION),
            timestamp: self.timestamp.unwrap_or(DEFAULT_TIMESTAMP),
            pattern: self.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
        }
    }
}

/// Fully populated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub env: String,
    pub level: u8,
    pub notification: u8,
    pub timestamp: bool,
    pub pattern: String,
}
