//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "spaceview::Camera".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_with_file_line() {
    let e = entry(LogSeverity::Error, Some("camera.rs"), Some(42));
    assert_eq!(e.severity, LogSeverity::Error);
    assert_eq!(e.source, "spaceview::Camera");
    assert_eq!(e.file, Some("camera.rs"));
    assert_eq!(e.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let e1 = entry(LogSeverity::Warn, None, None);
    let e2 = e1.clone();
    assert_eq!(e1.severity, e2.severity);
    assert_eq!(e1.message, e2.message);
    assert!(e2.file.is_none());
}

#[test]
fn test_log_severity_label_and_display() {
    assert_eq!(LogSeverity::Info.label(), "INFO ");
    assert_eq!(LogSeverity::Error.label(), "ERROR");
    assert_eq!(LogSeverity::Warn.to_string(), "WARN");
    assert_eq!(LogSeverity::Trace.to_string(), "TRACE");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger::with_min_severity(LogSeverity::Trace);

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both branches: with and without file:line
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_default_logger_filters_trace() {
    let logger = DefaultLogger::default();
    assert_eq!(logger.min_severity(), LogSeverity::Debug);
    assert!(!logger.enabled(LogSeverity::Trace));
    assert!(logger.enabled(LogSeverity::Debug));
    assert!(logger.enabled(LogSeverity::Error));

    let quiet = DefaultLogger::with_min_severity(LogSeverity::Warn);
    assert!(!quiet.enabled(LogSeverity::Info));
    assert!(quiet.enabled(LogSeverity::Warn));
}

#[test]
fn test_format_line_location() {
    let plain = DefaultLogger::format_line(&entry(LogSeverity::Info, None, None));
    assert!(plain.contains("Info message"));
    assert!(!plain.contains("test.rs"));

    let detailed = DefaultLogger::format_line(&entry(LogSeverity::Error, Some("test.rs"), Some(7)));
    assert!(detailed.ends_with("(test.rs:7)"));
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
