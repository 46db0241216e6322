//! File transport implementation

use crate::core::{LogEntry, Logger, LoggerError, Result, Transport};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileTransport {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileTransport {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Constructor for [`Logger::try_use_transport`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use devnull::prelude::*;
    ///
    /// let mut logger = Logger::new();
    /// logger.try_use_transport(FileTransport::construct, "/var/log/app.log")?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn construct<P: Into<PathBuf>>(_logger: &Logger, path: P) -> Result<Self> {
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for FileTransport {
    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer already closed"))?;

        writeln!(writer, "{}", entry.line())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()?;
        self.writer = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileTransport {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_transport_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.log");

        let mut transport = FileTransport::open(&log_path)?;
        transport.write(&LogEntry::new(LogLevel::Warning, "first".to_string()))?;
        transport.write(&LogEntry::new(LogLevel::Info, "second\nline".to_string()))?;
        transport.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["warning: first", "info: second\\nline"]);
        Ok(())
    }

    #[test]
    fn test_write_after_close_fails() -> Result<()> {
        let dir = tempdir()?;
        let mut transport = FileTransport::open(dir.path().join("closed.log"))?;
        transport.close()?;

        let result = transport.write(&LogEntry::new(LogLevel::Info, "late".to_string()));
        assert!(matches!(result, Err(LoggerError::WriterError(_))));
        Ok(())
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempdir().unwrap();
        let result = FileTransport::open(dir.path().join("missing").join("app.log"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
