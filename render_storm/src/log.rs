//! Internal logging system for RenderStorm
//!
//! - Customizable logger via the `Logger` trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Optional forwarding into the `log` facade (`FacadeLogger`)
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use render_storm::storm::log::{Logger, LogEntry};
///
/// struct FrameLogger;
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push into an in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "storm::CommandQueue")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-item, per-frame detail (culling decisions)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    /// Matching level of the `log` crate facade.
    pub fn to_log_level(self) -> log::Level {
        match self {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

/// Logger that forwards every entry to the `log` crate facade.
///
/// Lets a host that already installed `env_logger` (or any other `log`
/// backend) receive RenderStorm output with its own filtering. The entry
/// source becomes the log target.
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn log(&self, entry: &LogEntry) {
        let level = entry.severity.to_log_level();
        let metadata = log::Metadata::builder()
            .level(level)
            .target(&entry.source)
            .build();
        if !log::logger().enabled(&metadata) {
            return;
        }

        log::logger().log(
            &log::Record::builder()
                .level(level)
                .target(&entry.source)
                .file(entry.file)
                .line(entry.line)
                .args(format_args!("{}", entry.message))
                .build(),
        );
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! storm_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::storm::Engine::is_enabled($crate::storm::log::LogSeverity::Trace) {
            $crate::storm::Engine::log(
                $crate::storm::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// # use render_storm::storm_debug;
/// storm_debug!("storm::CommandQueue", "Frustum rebuilt for {} items", 12);
/// ```
#[macro_export]
macro_rules! storm_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::storm::Engine::is_enabled($crate::storm::log::LogSeverity::Debug) {
            $crate::storm::Engine::log(
                $crate::storm::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! storm_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::storm::Engine::is_enabled($crate::storm::log::LogSeverity::Info) {
            $crate::storm::Engine::log(
                $crate::storm::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! storm_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::storm::Engine::is_enabled($crate::storm::log::LogSeverity::Warn) {
            $crate::storm::Engine::log(
                $crate::storm::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use render_storm::storm_error;
/// storm_error!("storm::CommandQueue", "Item '{}' failed: {}", "Terrain", "device lost");
/// ```
#[macro_export]
macro_rules! storm_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::storm::Engine::log_detailed(
            $crate::storm::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
