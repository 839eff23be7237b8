//! A [`LogSink`] that appends to a plain-text log file.
//!
//! ## Log Format
//!
//! ```text
//! [2026-01-15T14:30:00.123Z] [DEBUG] [LoginActivity] logExtras: mEmail=a@b.com
//! [2026-01-15T14:30:00.124Z] [WARN] [LoginActivity] mPassword is null
//! ```

use crate::log_level::LogLevel;
use crate::log_sink::LogSink;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Appends one line per record to a file. Thread-safe.
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for appending, creating it and its parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The log file cannot be opened for writing
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    /// Format: `[YYYY-MM-DDTHH:MM:SS.mmmZ] [LEVEL] [tag] message`
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] [{}] [{}] {}",
                format_timestamp(),
                level,
                tag,
                message
            );
            let _ = file.flush();
        }
    }
}

/// Formats the current UTC time as an ISO 8601 timestamp with milliseconds.
fn format_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
#[path = "tests/file_sink_tests.rs"]
mod tests;
