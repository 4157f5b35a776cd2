// src/logger.rs

//! `log` backend that writes records to the COM1 serial port.

use crate::constants::MAX_LOG_LEVEL;
use core::fmt;
use log::{Log, Metadata, Record};

/// Logger errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerError {
    /// A global logger was already installed
    AlreadyInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
        }
    }
}

/// Serial-backed implementation of [`log::Log`]
#[derive(Debug)]
pub struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            crate::serial::_print(format_args!("{}\n", Line(record)));
        }
    }

    fn flush(&self) {}
}

/// `[LEVEL] target: message`
struct Line<'a, 'b>(&'a Record<'b>);

impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<5}] {}: {}", self.0.level(), self.0.target(), self.0.args())
    }
}

/// Install the serial logger as the global `log` backend.
pub fn init() -> Result<(), LoggerError> {
    log::set_logger(&LOGGER).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(MAX_LOG_LEVEL);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_line_format() {
        let line = Line(
            &Record::builder()
                .level(Level::Warn)
                .target("hello_kernel::boot")
                .args(format_args!("row {}", 30))
                .build(),
        )
        .to_string();
        assert_eq!(line, "[WARN ] hello_kernel::boot: row 30");
    }

    #[test]
    fn test_trace_is_filtered() {
        let metadata = Metadata::builder().level(Level::Trace).build();
        assert!(!SerialLogger.enabled(&metadata));
        let metadata = Metadata::builder().level(Level::Error).build();
        assert!(SerialLogger.enabled(&metadata));
    }
}
