// src/serial/error.rs

//! Error types for serial port operations

use core::fmt;

/// Serial port errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// The transmit holding register never became empty
    Timeout,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialError::Timeout => write!(f, "Serial port transmit timeout"),
        }
    }
}
