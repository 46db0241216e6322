//! JSON transport for structured logging

use crate::core::{LogEntry, Logger, Result, Transport};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON file transport
///
/// Writes each log entry as a single-line JSON object (JSONL format).
pub struct JsonTransport {
    writer: BufWriter<File>,
    pretty: bool,
}

impl JsonTransport {
    /// Create a new JSON transport
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, false)
    }

    /// Create a new JSON transport with pretty printing
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, pretty: bool) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            pretty,
        })
    }

    /// Constructor for [`Logger::try_use_transport`]
    pub fn construct<P: AsRef<Path>>(_logger: &Logger, path: P) -> Result<Self> {
        Self::new(path)
    }
}

impl Transport for JsonTransport {
    fn name(&self) -> &str {
        "json"
    }

    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(entry)?
        } else {
            serde_json::to_string(entry)?
        };

        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
