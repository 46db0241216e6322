//! In-memory transport
//!
//! Keeps every delivered entry in a [`MemorySink`] that the caller holds on
//! to. Useful in tests and for surfacing recent log lines in an application.

use crate::core::{LogEntry, Logger, Result, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SinkState {
    entries: Vec<LogEntry>,
    notifications: usize,
    flushes: usize,
    closed: bool,
}

/// Caller side of a [`MemoryTransport`]
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<SinkState>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries received so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.state.lock().entries.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.state
            .lock()
            .entries
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries that also went through the notify channel
    pub fn notifications(&self) -> usize {
        self.state.lock().notifications
    }

    pub fn flushes(&self) -> usize {
        self.state.lock().flushes
    }

    /// Whether the transport has been removed from its logger
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.notifications = 0;
    }
}

pub struct MemoryTransport {
    sink: MemorySink,
}

impl MemoryTransport {
    /// New transport together with the sink it writes into
    pub fn new() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        (Self { sink: sink.clone() }, sink)
    }

    /// Constructor for [`Logger::use_transport`], writing into `sink`
    ///
    /// # Example
    ///
    /// ```
    /// use devnull::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let mut logger = Logger::new();
    /// logger.use_transport(MemoryTransport::construct, sink.clone());
    ///
    /// logger.info("hello");
    /// assert_eq!(sink.messages(), vec!["hello".to_string()]);
    /// ```
    pub fn construct(_logger: &Logger, sink: MemorySink) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> MemorySink {
        self.sink.clone()
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        self.sink.state.lock().entries.push(entry.clone());
        Ok(())
    }

    fn notify(&mut self, _entry: &LogEntry) -> Result<()> {
        self.sink.state.lock().notifications += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.sink.state.lock().flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.sink.state.lock().closed = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
