//! Formatted record handed to transports

use super::log_level::LogLevel;
use super::pattern;
use super::registry::Profile;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub severity: u8,
    /// Label from the profile matching the logger's environment
    pub label: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Pattern-rendered timestamp, present when the logger has `timestamp` on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp: Option<String>,
    /// Severity is at or above the logger's notification threshold
    pub notify: bool,
    pub env: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            severity: level.severity(),
            label: Profile::default().label(level),
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            stamp: None,
            notify: false,
            env: String::new(),
        }
    }

    /// Relabel for the given environment
    pub fn with_env(mut self, env: &str) -> Self {
        self.label = Profile::for_env(env).label(self.level);
        self.env = env.to_string();
        self
    }

    /// Render `pattern` against this entry's timestamp in local time
    pub fn with_stamp(mut self, template: &str) -> Self {
        let local = self.timestamp.with_timezone(&Local);
        self.stamp = Some(pattern::render(template, &local));
        self
    }

    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// `stamp label: message`, the plain text line used by the text transports
    pub fn line(&self) -> String {
        match self.stamp {
            Some(ref stamp) => format!("{} {}: {}", stamp, self.label, self.message),
            None => format!("{}: {}", self.label, self.message),
        }
    }
}
