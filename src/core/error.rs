//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error, e.g. a malformed configuration object
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A level key that is not part of the registry
    #[error("Unknown log level: '{0}'")]
    UnknownLevel(String),

    /// A transport reported a failure
    #[error("Transport '{name}' failed: {message}")]
    TransportError { name: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn unknown_level(key: impl Into<String>) -> Self {
        LoggerError::UnknownLevel(key.into())
    }

    /// Create a transport error
    pub fn transport(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TransportError {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::transport("memory", "sink closed");
        assert!(matches!(err, LoggerError::TransportError { .. }));

        let err = LoggerError::unknown_level("verbose");
        assert!(matches!(err, LoggerError::UnknownLevel(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::transport("file", "Disk full");
        assert_eq!(err.to_string(), "Transport 'file' failed: Disk full");

        let err = LoggerError::unknown_level("verbose");
        assert_eq!(err.to_string(), "Unknown log level: 'verbose'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot create file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot create file"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LoggerError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
