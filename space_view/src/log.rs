//! Internal logging system for Space View
//!
//! - `Logger` trait for custom sinks, with an optional severity filter
//! - `LogSeverity` levels from Trace to Error
//! - `DefaultLogger`: colored console output, warnings and errors on stderr
//! - File and line information for detailed ERROR logs
//!
//! The camera runs once per rendered frame, so per-frame messages are
//! emitted at Trace and lifecycle messages at Debug.

use colored::*;
use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use space_view::spaceview::log::{Logger, LogEntry, LogSeverity};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
///
///     fn enabled(&self, severity: LogSeverity) -> bool {
///         severity >= LogSeverity::Info
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);

    /// Whether entries of `severity` should reach `log` at all
    fn enabled(&self, _severity: LogSeverity) -> bool {
        true
    }
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    pub timestamp: SystemTime,

    /// Source tag (e.g., "spaceview::Camera", "spaceview::FrameGraph")
    pub source: String,

    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail (visible counts, culling decisions)
    Trace,

    /// Lifecycle information (camera frame created / destroyed)
    Debug,

    Info,

    /// Recoverable oddities (camera frame torn down on drop)
    Warn,

    /// Collaborator failures, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Console logger
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
///
/// Entries below `min_severity` are dropped. Trace is off by default.
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self::with_min_severity(LogSeverity::Debug)
    }

    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Render an entry as one console line.
    pub fn format_line(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let mut line = format!(
            "[{}] [{}] [{}] {}",
            timestamp,
            severity,
            entry.source.bright_blue(),
            entry.message
        );
        if let (Some(file), Some(l)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, l));
        }
        line
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format_line(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn enabled(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

// ===== LOGGING MACROS =====

/// Route a formatted message to the global logger at `severity`.
///
/// The format arguments are only evaluated when the logger accepts
/// `severity`.
#[doc(hidden)]
#[macro_export]
macro_rules! view_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        if $crate::spaceview::Diagnostics::enabled($crate::spaceview::log::LogSeverity::$severity) {
            $crate::spaceview::Diagnostics::log(
                $crate::spaceview::log::LogSeverity::$severity,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a TRACE message (per-frame detail)
#[macro_export]
macro_rules! view_trace {
    ($source:expr, $($arg:tt)*) => { $crate::view_log!(Trace, $source, $($arg)*) };
}

/// Log a DEBUG message
///
/// ```ignore
/// view_debug!("spaceview::CameraContext", "Camera frame {:?} created", id);
/// ```
#[macro_export]
macro_rules! view_debug {
    ($source:expr, $($arg:tt)*) => { $crate::view_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! view_info {
    ($source:expr, $($arg:tt)*) => { $crate::view_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! view_warn {
    ($source:expr, $($arg:tt)*) => { $crate::view_log!(Warn, $source, $($arg)*) };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! view_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::spaceview::Diagnostics::enabled($crate::spaceview::log::LogSeverity::Error) {
            $crate::spaceview::Diagnostics::log_detailed(
                $crate::spaceview::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
