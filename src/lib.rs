//! Diagnostic helpers for screens that receive parameters as extras.
//!
//! - [`log_extras`] lists every entry of a parameter bag at debug level
//! - [`log_warning_if_null_else_info`] logs a value we expect to be set
//!
//! Both write through an explicit [`LogSink`], never fail, and never panic.

pub mod config;
pub mod extras;
pub mod file_sink;
pub mod log_level;
pub mod log_sink;
pub mod log_utilities;
pub mod paths;

pub use config::{LogConfig, SinkKind};
pub use extras::{ExtraObject, ExtraValue, Extras, ExtrasBag};
pub use file_sink::FileSink;
pub use log_level::LogLevel;
pub use log_sink::{FilteredSink, LogRecord, LogSink, RecordingSink, StderrSink, TracingSink};
pub use log_utilities::{
    describe_extra, log_extras, log_warning_if_null_else_info, ActivityLogger,
};
