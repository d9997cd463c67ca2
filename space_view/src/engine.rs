/// Diagnostics - global logger registry
///
/// The process-wide sink behind the `view_*` macros. The camera itself
/// keeps no global state; only log routing is global, so a host
/// application redirects messages once at startup.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

fn replace(new_logger: Box<dyn Logger>) {
    // A poisoned lock still holds a usable logger; overwrite it anyway
    let mut guard = logger().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = new_logger;
}

fn dispatch(
    severity: LogSeverity,
    source: &str,
    message: String,
    location: Option<(&'static str, u32)>,
) {
    let Ok(sink) = logger().read() else {
        return;
    };
    if !sink.enabled(severity) {
        return;
    }
    sink.log(&LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: source.to_string(),
        message,
        file: location.map(|(file, _)| file),
        line: location.map(|(_, line)| line),
    });
}

/// Global logger registry
///
/// # Example
///
/// ```no_run
/// use space_view::spaceview::{Diagnostics, log::{Logger, LogEntry}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Diagnostics::set_logger(FileLogger);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        replace(Box::new(logger));
    }

    /// Back to a `DefaultLogger` with default filtering
    pub fn reset_logger() {
        replace(Box::new(DefaultLogger::new()));
    }

    /// Whether the current logger accepts `severity`
    pub fn enabled(severity: LogSeverity) -> bool {
        logger().read().is_ok_and(|sink| sink.enabled(severity))
    }

    /// Entry point of view_trace!/view_debug!/view_info!/view_warn!
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        dispatch(severity, source, message, None);
    }

    /// Entry point of view_error!: same as `log` plus file:line
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        dispatch(severity, source, message, Some((file, line)));
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
