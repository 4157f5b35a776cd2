// src/errors/unified.rs

//! Unified error types for the kernel
//!
//! Each subsystem keeps its own error enum; [`KernelError`] wraps them so the
//! boot path can propagate any of them with `?`.

use crate::logger::LoggerError;
use crate::serial::SerialError;
use crate::vga_buffer::VgaError;
use core::fmt;

/// Top-level kernel error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// VGA subsystem error
    Vga(VgaError),
    /// Serial subsystem error
    Serial(SerialError),
    /// Logger installation error
    Logger(LoggerError),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Vga(e) => write!(f, "VGA error: {}", e),
            KernelError::Serial(e) => write!(f, "Serial error: {}", e),
            KernelError::Logger(e) => write!(f, "Logger error: {}", e),
        }
    }
}

impl From<VgaError> for KernelError {
    fn from(err: VgaError) -> Self {
        KernelError::Vga(err)
    }
}

impl From<SerialError> for KernelError {
    fn from(err: SerialError) -> Self {
        KernelError::Serial(err)
    }
}

impl From<LoggerError> for KernelError {
    fn from(err: LoggerError) -> Self {
        KernelError::Logger(err)
    }
}

/// Result type alias for kernel operations
pub type Result<T> = core::result::Result<T, KernelError>;

/// Helper trait for error context
pub trait ErrorContext {
    /// Get a detailed description of the error
    fn context(&self) -> &'static str;
}

impl ErrorContext for KernelError {
    fn context(&self) -> &'static str {
        match self {
            KernelError::Vga(e) => e.context(),
            KernelError::Serial(_) => "Error occurred in serial port subsystem",
            KernelError::Logger(_) => "Error occurred while installing the logger",
        }
    }
}

impl ErrorContext for VgaError {
    fn context(&self) -> &'static str {
        match self {
            VgaError::InvalidRow => "Start row must be within the 25 visible rows",
            VgaError::InvalidPosition => "Attempted to access a byte outside the VGA buffer",
            VgaError::BufferOverflow => "Message does not fit in the rest of the VGA buffer",
        }
    }
}
