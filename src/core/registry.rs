//! Static method and level tables
//!
//! `METHODS` maps every level key to a label for each output profile and
//! `LEVELS` maps the same keys to their numeric severity. Both are plain
//! constants; nothing mutates them at runtime.

use super::log_level::LogLevel;

/// Label profile, picked from the logger's environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    Production,
    #[default]
    Development,
}

impl Profile {
    /// Only the exact environment name `"production"` selects the terse labels
    pub fn for_env(env: &str) -> Self {
        if env == "production" {
            Profile::Production
        } else {
            Profile::Development
        }
    }

    pub fn label(&self, level: LogLevel) -> &'static str {
        METHODS.profile(*self).get(level.key()).unwrap_or(level.key())
    }
}

/// Ordered `key -> label` table
#[derive(Debug, Clone, Copy)]
pub struct Labels(&'static [(&'static str, &'static str)]);

impl Labels {
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let table = self.0;
        table.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let table = self.0;
        table.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Label tables for both profiles
#[derive(Debug, Clone, Copy)]
pub struct Methods {
    pub production: Labels,
    pub development: Labels,
}

impl Methods {
    pub fn profile(&self, profile: Profile) -> &Labels {
        match profile {
            Profile::Production => &self.production,
            Profile::Development => &self.development,
        }
    }
}

/// Ordered `key -> severity` table
#[derive(Debug, Clone, Copy)]
pub struct Levels(&'static [(&'static str, u8)]);

impl Levels {
    pub fn get(&self, key: &str) -> Option<u8> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let table = self.0;
        table.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> {
        let table = self.0;
        table.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub const METHODS: Methods = Methods {
    production: Labels(&[
        ("alert", "ALERT"),
        ("critical", "CRIT"),
        ("error", "ERROR"),
        ("warning", "WARN"),
        ("metric", "METRIC"),
        ("notice", "NOTICE"),
        ("info", "INFO"),
        ("log", "LOG"),
        ("debug", "DEBUG"),
    ]),
    development: Labels(&[
        ("alert", "alert"),
        ("critical", "critical"),
        ("error", "error"),
        ("warning", "warning"),
        ("metric", "metric"),
        ("notice", "notice"),
        ("info", "info"),
        ("log", "log"),
        ("debug", "debug"),
    ]),
};

pub const LEVELS: Levels = Levels(&[
    ("alert", LogLevel::Alert.severity()),
    ("critical", LogLevel::Critical.severity()),
    ("error", LogLevel::Error.severity()),
    ("warning", LogLevel::Warning.severity()),
    ("metric", LogLevel::Metric.severity()),
    ("notice", LogLevel::Notice.severity()),
    ("info", LogLevel::Info.severity()),
    ("log", LogLevel::Log.severity()),
    ("debug", LogLevel::Debug.severity()),
]);
