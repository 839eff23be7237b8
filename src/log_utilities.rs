//! Debug helpers for screens that receive their parameters as extras.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use activity_log_utils::{log_extras, log_warning_if_null_else_info, TracingSink};
//!
//! const LOGIN_ACTIVITY_TAG: &str = "LoginActivity";
//!
//! log_extras(&TracingSink, LOGIN_ACTIVITY_TAG, Some(&extras));
//! log_warning_if_null_else_info(&TracingSink, LOGIN_ACTIVITY_TAG, "mEmail", email.as_deref());
//! ```
//!
//! Neither helper returns an error or panics: a value that cannot be shown is
//! logged as `logExtras: cannot show value for: <name>` and listing continues.

use crate::config::LogConfig;
use crate::extras::{ExtraValue, ExtrasBag};
use crate::log_sink::LogSink;
use anyhow::Result;
use std::sync::Arc;

const NO_EXTRAS_MESSAGE: &str = "Bundle is null, no extras received";
const LISTING_BANNER: &str = "logExtras starting to list each extra:";

/// Logs every extra in `extras` at debug level, one line per entry.
///
/// `None` produces a single line saying no extras were received.
pub fn log_extras(sink: &dyn LogSink, tag: &str, extras: Option<&dyn ExtrasBag>) {
    let Some(extras) = extras else {
        sink.debug(tag, NO_EXTRAS_MESSAGE);
        return;
    };

    sink.debug(tag, LISTING_BANNER);
    for name in extras.keys() {
        let msg = match extras.get(name) {
            Some(ExtraValue::Str(_)) => {
                format!("logExtras: {}={}", name, extras.get_string(name).unwrap_or_default())
            }
            Some(ExtraValue::Int(_)) => format!("logExtras: {}={}", name, extras.get_int(name)),
            other => describe_extra(name, other),
        };
        sink.debug(tag, &msg);
    }
}

/// Logs `name=value` at info level, or `name is null` at warning level.
pub fn log_warning_if_null_else_info(sink: &dyn LogSink, tag: &str, name: &str, value: Option<&str>) {
    match value {
        Some(value) => sink.info(tag, &format!("{}={}", name, value)),
        None => sink.warn(tag, &format!("{} is null", name)),
    }
}

/// The line `log_extras` writes for a single entry.
///
/// `None` (a key with no value behind it) is treated like a null value.
pub fn describe_extra(name: &str, value: Option<&ExtraValue>) -> String {
    match value.map(ExtraValue::to_display_string) {
        Some(Ok(shown)) => format!("logExtras: {}={}", name, shown),
        _ => format!("logExtras: cannot show value for: {}", name),
    }
}

/// Both helpers bound to one shared sink.
#[derive(Clone)]
pub struct ActivityLogger {
    sink: Arc<dyn LogSink>,
}

impl ActivityLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Builds the sink described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured sink cannot be opened.
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        Ok(Self::new(config.build_sink()?))
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    pub fn log_extras(&self, tag: &str, extras: Option<&dyn ExtrasBag>) {
        log_extras(self.sink.as_ref(), tag, extras);
    }

    pub fn log_warning_if_null_else_info(&self, tag: &str, name: &str, value: Option<&str>) {
        log_warning_if_null_else_info(self.sink.as_ref(), tag, name, value);
    }
}

#[cfg(test)]
#[path = "tests/log_utilities_tests.rs"]
mod tests;
