//! Unit tests for log.rs

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, FacadeLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "storm::CommandQueue".to_string(),
        message: "3 items dispatched".to_string(),
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
fn test_log_severity_to_log_level() {
    assert_eq!(LogSeverity::Trace.to_log_level(), log::Level::Trace);
    assert_eq!(LogSeverity::Debug.to_log_level(), log::Level::Debug);
    assert_eq!(LogSeverity::Info.to_log_level(), log::Level::Info);
    assert_eq!(LogSeverity::Warn.to_log_level(), log::Level::Warn);
    assert_eq!(LogSeverity::Error.to_log_level(), log::Level::Error);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_without_file_line() {
    let e = entry(LogSeverity::Info, None, None);

    assert_eq!(e.severity, LogSeverity::Info);
    assert_eq!(e.source, "storm::CommandQueue");
    assert!(e.file.is_none());
    assert!(e.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let e1 = entry(LogSeverity::Error, Some("command_queue.rs"), Some(42));
    let e2 = e1.clone();

    assert_eq!(e1.severity, e2.severity);
    assert_eq!(e1.message, e2.message);
    assert_eq!(e2.file, Some("command_queue.rs"));
    assert_eq!(e2.line, Some(42));
}

// ============================================================================
// LOGGER IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
    ] {
        logger.log(&entry(severity, None, None));
    }
    logger.log(&entry(LogSeverity::Error, Some("frustum.rs"), Some(7)));
}

#[test]
fn test_facade_logger_without_backend_is_silent() {
    // No `log` backend installed: entries are dropped without panicking
    FacadeLogger.log(&entry(LogSeverity::Warn, None, None));
    FacadeLogger.log(&entry(LogSeverity::Error, Some("frustum.rs"), Some(7)));
}

#[test]
fn test_logger_is_object_safe() {
    let loggers: Vec<Box<dyn Logger>> = vec![Box::new(DefaultLogger), Box::new(FacadeLogger)];
    assert_eq!(loggers.len(), 2);
}
