//! Environment name source
//!
//! The logger only ever sees an opaque string; this module decides where the
//! default comes from.

/// Variable read when a logger is constructed without an explicit `env`
pub const ENV_VAR: &str = "DEVNULL_ENV";

pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Current environment name, falling back to [`DEFAULT_ENVIRONMENT`]
pub fn current() -> String {
    resolve(std::env::var(ENV_VAR).ok())
}

/// Pick the environment from an optional raw value; blank values fall back
pub fn resolve(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => DEFAULT_ENVIRONMENT.to_string(),
    }
}
