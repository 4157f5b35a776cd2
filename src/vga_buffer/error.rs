// src/vga_buffer/error.rs

//! Error types for VGA text buffer operations

use core::fmt;

/// Errors that can occur when interacting with the VGA subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VgaError {
    /// The requested start row is outside the visible screen area.
    InvalidRow,
    /// A byte offset outside the buffer was accessed.
    InvalidPosition,
    /// The message would run past the end of the buffer.
    BufferOverflow,
}

impl VgaError {
    /// Convert the error into a human-readable static message.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRow => "invalid row",
            Self::InvalidPosition => "invalid position",
            Self::BufferOverflow => "buffer overflow",
        }
    }
}

impl fmt::Display for VgaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vga_error_display() {
        assert_eq!(format!("{}", VgaError::BufferOverflow), "buffer overflow");
        assert_eq!(VgaError::InvalidRow.as_str(), "invalid row");
    }
}
