//! Severities accepted by a [`LogSink`](crate::log_sink::LogSink).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log severity levels, ordered from most to least severe.
///
/// Default is `Debug` so nothing is filtered unless asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// An expected value is missing
    #[serde(alias = "warning")]
    Warn = 0,
    /// Normal diagnostic output
    Info = 1,
    /// Verbose listing output (default)
    #[default]
    Debug = 2,
}

impl LogLevel {
    /// Returns the uppercase string representation for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Whether a record at `self` passes a filter whose minimum is `threshold`.
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self <= threshold
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" | "warning" | "w" => Ok(LogLevel::Warn),
            "info" | "i" => Ok(LogLevel::Info),
            "debug" | "d" => Ok(LogLevel::Debug),
            other => anyhow::bail!("Unknown log level '{}'", other),
        }
    }
}
