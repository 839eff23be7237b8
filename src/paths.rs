//! Home-based default locations under `~/.activity-log/`:
//! - `config.yaml` - Optional logger configuration
//! - `logs/activity.log` - Default file sink target

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// The name of the activity log directory.
const ACTIVITY_LOG_DIR: &str = ".activity-log";

/// Overrides the home directory (used by tests and sandboxed hosts).
pub const HOME_ENV: &str = "ACTIVITY_LOG_HOME";

/// Returns the activity log home directory: `$ACTIVITY_LOG_HOME` or `~/.activity-log/`
///
/// Does not create the directory.
pub fn activity_log_home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not determine home directory for activity logs")?;
    Ok(home.join(ACTIVITY_LOG_DIR))
}

/// Returns the default config file path: `~/.activity-log/config.yaml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(activity_log_home_dir()?.join("config.yaml"))
}

/// Returns the default log file path: `~/.activity-log/logs/activity.log`
///
/// Creates the logs directory if it doesn't exist.
pub fn default_log_path() -> Result<PathBuf> {
    let logs = activity_log_home_dir()?.join("logs");
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs.join("activity.log"))
}
