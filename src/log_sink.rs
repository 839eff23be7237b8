//! The log facility the diagnostic helpers write through.
//!
//! Every helper takes a [`LogSink`] explicitly instead of reaching for a global
//! logger. Concrete sinks:
//! - [`TracingSink`] - forwards to the `tracing` macros (tag as a field)
//! - [`StderrSink`] - plain `[LEVEL] [tag] message` lines on stderr
//! - [`FileSink`](crate::file_sink::FileSink) - timestamped lines appended to a file
//! - [`RecordingSink`] - in-memory capture for tests and inspection
//! - [`FilteredSink`] - drops records below a minimum level

use crate::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// A tag-based, leveled log facility.
///
/// Writes are fire-and-forget: a sink that fails to record a line drops it.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, tag: &str, message: &str);

    fn debug(&self, tag: &str, message: &str) {
        self.write(LogLevel::Debug, tag, message);
    }

    fn info(&self, tag: &str, message: &str) {
        self.write(LogLevel::Info, tag, message);
    }

    fn warn(&self, tag: &str, message: &str) {
        self.write(LogLevel::Warn, tag, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        (**self).write(level, tag, message);
    }
}

/// A single line as received by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// Forwards records to `tracing`, with the tag as a structured field.
///
/// Level filtering is left to whatever subscriber is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(tag = %tag, "{}", message),
            LogLevel::Info => tracing::info!(tag = %tag, "{}", message),
            LogLevel::Warn => tracing::warn!(tag = %tag, "{}", message),
        }
    }
}

/// Writes `[LEVEL] [tag] message` to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        eprintln!("[{}] [{}] {}", level, tag, message);
    }
}

/// Keeps every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Just the message text of every record.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl LogSink for RecordingSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                tag: tag.to_string(),
                message: message.to_string(),
            });
        }
    }
}

/// Passes records at `min_level` or more severe through to `inner`.
pub struct FilteredSink<S> {
    inner: S,
    min_level: LogLevel,
}

impl<S: LogSink> FilteredSink<S> {
    pub fn new(inner: S, min_level: LogLevel) -> Self {
        Self { inner, min_level }
    }

    /// Checks if a record at the given level would be forwarded.
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: LogSink> LogSink for FilteredSink<S> {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        if self.should_log(level) {
            self.inner.write(level, tag, message);
        }
    }
}

#[cfg(test)]
#[path = "tests/log_sink_tests.rs"]
mod tests;
