//! Logger configuration: which sink to write to and how verbose to be.
//!
//! ```yaml
//! sink: file        # tracing | stderr | file
//! level: info       # debug | info | warn
//! file: /tmp/activity.log
//! ```
//!
//! [`LogConfig::from_env`] layers, in order: defaults, the config file
//! (`$ACTIVITY_LOG_CONFIG` or `~/.activity-log/config.yaml`), then the
//! `ACTIVITY_LOG_SINK`, `ACTIVITY_LOG_LEVEL` and `ACTIVITY_LOG_FILE` variables.

use crate::file_sink::FileSink;
use crate::log_level::LogLevel;
use crate::log_sink::{FilteredSink, LogSink, StderrSink, TracingSink};
use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

pub const CONFIG_ENV: &str = "ACTIVITY_LOG_CONFIG";
pub const SINK_ENV: &str = "ACTIVITY_LOG_SINK";
pub const LEVEL_ENV: &str = "ACTIVITY_LOG_LEVEL";
pub const FILE_ENV: &str = "ACTIVITY_LOG_FILE";

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Tracing,
    Stderr,
    File,
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(SinkKind::Tracing),
            "stderr" => Ok(SinkKind::Stderr),
            "file" => Ok(SinkKind::File),
            other => anyhow::bail!("Unknown sink '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub sink: SinkKind,

    #[serde(default)]
    pub level: LogLevel,

    /// Target of the file sink. Defaults to `~/.activity-log/logs/activity.log`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the config file if one exists, then environment overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            Some(path) => Self::load(Path::new(&path))?,
            None => {
                let path = paths::default_config_path()?;
                if path.exists() {
                    Self::load(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies `ACTIVITY_LOG_*` variables. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(SINK_ENV) {
            match raw.parse() {
                Ok(sink) => self.sink = sink,
                Err(e) => tracing::warn!("Ignoring {}: {}", SINK_ENV, e),
            }
        }
        if let Ok(raw) = std::env::var(LEVEL_ENV) {
            match raw.parse() {
                Ok(level) => self.level = level,
                Err(e) => tracing::warn!("Ignoring {}: {}", LEVEL_ENV, e),
            }
        }
        if let Some(file) = std::env::var_os(FILE_ENV).filter(|v| !v.is_empty()) {
            self.file = Some(PathBuf::from(file));
            self.sink = SinkKind::File;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.file.is_some() && self.sink != SinkKind::File {
            anyhow::bail!(
                "'file' is only valid with 'sink: file' (sink is '{:?}')",
                self.sink
            );
        }
        Ok(())
    }

    /// Constructs the configured sink, filtered at `level`.
    pub fn build_sink(&self) -> Result<Arc<dyn LogSink>> {
        let sink: Arc<dyn LogSink> = match self.sink {
            SinkKind::Tracing => Arc::new(FilteredSink::new(TracingSink, self.level)),
            SinkKind::Stderr => Arc::new(FilteredSink::new(StderrSink, self.level)),
            SinkKind::File => {
                let path = match &self.file {
                    Some(path) => path.clone(),
                    None => paths::default_log_path()?,
                };
                Arc::new(FilteredSink::new(FileSink::open(&path)?, self.level))
            }
        };
        Ok(sink)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
