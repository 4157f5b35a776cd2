// src/vga_buffer/backend.rs

//! Low-level VGA buffer access abstractions.
//!
//! The [`TextBuffer`] trait lets the writer target any backing store with
//! the text-mode layout, from the hardware buffer at `0xB8000` to an
//! in-memory copy for testing.

use super::color::ColorCode;
use super::constants::{BUFFER_SIZE, BYTES_PER_CHAR, VGA_BUFFER_ADDR};
use super::VgaError;
use core::ptr::NonNull;

/// Abstraction over the VGA character buffer memory.
///
/// Offsets are byte offsets: even bytes hold characters, odd bytes hold
/// attributes.
pub trait TextBuffer {
    /// Total number of addressable bytes.
    fn capacity(&self) -> usize {
        BUFFER_SIZE
    }

    /// Read the byte at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::InvalidPosition`] when `offset` is outside the
    /// buffer.
    fn read_byte(&self, offset: usize) -> Result<u8, VgaError>;

    /// Write `value` to the byte at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::InvalidPosition`] when `offset` is outside the
    /// buffer.
    fn write_byte(&mut self, offset: usize, value: u8) -> Result<(), VgaError>;

    /// Write a character/attribute pair to the cell starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::InvalidPosition`] if either byte of the cell lies
    /// outside the buffer. Nothing is written in that case.
    fn write_cell(&mut self, offset: usize, character: u8, attribute: ColorCode) -> Result<(), VgaError> {
        let end = offset
            .checked_add(BYTES_PER_CHAR)
            .ok_or(VgaError::InvalidPosition)?;
        if end > self.capacity() {
            return Err(VgaError::InvalidPosition);
        }
        self.write_byte(offset, character)?;
        self.write_byte(offset + 1, attribute.as_u8())
    }

    /// Read the character/attribute pair of the cell starting at `offset`.
    fn read_cell(&self, offset: usize) -> Result<(u8, ColorCode), VgaError> {
        let character = self.read_byte(offset)?;
        let attribute = self.read_byte(offset.checked_add(1).ok_or(VgaError::InvalidPosition)?)?;
        Ok((character, ColorCode::from_u8(attribute)))
    }
}

/// Concrete backend that talks to the legacy text-mode buffer at 0xB8000.
#[derive(Debug)]
pub struct TextModeBuffer {
    ptr: NonNull<u8>,
}

// SAFETY: the buffer is a fixed hardware region; all access goes through
// `&mut self` and the global writer serialises it behind a mutex.
unsafe impl Send for TextModeBuffer {}

impl TextModeBuffer {
    /// Construct a backend for the canonical VGA text buffer.
    ///
    /// # Safety
    ///
    /// The VGA text buffer must be identity-mapped and writable at
    /// `VGA_BUFFER_ADDR`, and no other `TextModeBuffer` may be used
    /// concurrently.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self {
            // SAFETY: 0xB8000 is a non-null constant.
            ptr: unsafe { NonNull::new_unchecked(VGA_BUFFER_ADDR as *mut u8) },
        }
    }

    #[inline]
    const fn is_valid_offset(offset: usize) -> bool {
        offset < BUFFER_SIZE
    }
}

impl TextBuffer for TextModeBuffer {
    fn read_byte(&self, offset: usize) -> Result<u8, VgaError> {
        if !Self::is_valid_offset(offset) {
            return Err(VgaError::InvalidPosition);
        }

        // SAFETY: offset is inside the 4000-byte region guaranteed by `new`.
        Ok(unsafe { core::ptr::read_volatile(self.ptr.as_ptr().add(offset)) })
    }

    fn write_byte(&mut self, offset: usize, value: u8) -> Result<(), VgaError> {
        if !Self::is_valid_offset(offset) {
            return Err(VgaError::InvalidPosition);
        }

        // SAFETY: offset is inside the 4000-byte region guaranteed by `new`.
        unsafe {
            core::ptr::write_volatile(self.ptr.as_ptr().add(offset), value);
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory buffer with the text-mode layout, used for testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl MemoryBuffer {
    /// Create a zero-filled buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Create a buffer with every byte set to `value`.
    #[must_use]
    pub const fn filled(value: u8) -> Self {
        Self {
            bytes: [value; BUFFER_SIZE],
        }
    }

    /// View the raw buffer contents.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn read_byte(&self, offset: usize) -> Result<u8, VgaError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(VgaError::InvalidPosition)
    }

    fn write_byte(&mut self, offset: usize, value: u8) -> Result<(), VgaError> {
        self.bytes
            .get_mut(offset)
            .map(|byte| {
                *byte = value;
            })
            .ok_or(VgaError::InvalidPosition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga_buffer::color::VgaColor;

    #[test]
    fn test_memory_buffer_bounds() {
        let mut buffer = MemoryBuffer::new();
        assert_eq!(buffer.capacity(), 4000);
        assert!(buffer.write_byte(BUFFER_SIZE - 1, 0xAA).is_ok());
        assert_eq!(buffer.read_byte(BUFFER_SIZE - 1), Ok(0xAA));
        assert_eq!(buffer.write_byte(BUFFER_SIZE, 0xAA), Err(VgaError::InvalidPosition));
        assert_eq!(buffer.read_byte(BUFFER_SIZE), Err(VgaError::InvalidPosition));
    }

    #[test]
    fn test_write_cell_layout() {
        let mut buffer = MemoryBuffer::new();
        let color = ColorCode::new(VgaColor::LightGreen, VgaColor::Black);
        buffer.write_cell(10, b'Z', color).unwrap();
        assert_eq!(buffer.as_bytes()[10], b'Z');
        assert_eq!(buffer.as_bytes()[11], 0x0A);
        assert_eq!(buffer.read_cell(10), Ok((b'Z', color)));
    }

    #[test]
    fn test_write_cell_straddling_end_is_rejected_whole() {
        let mut buffer = MemoryBuffer::new();
        assert_eq!(
            buffer.write_cell(BUFFER_SIZE - 1, b'X', ColorCode::normal()),
            Err(VgaError::InvalidPosition)
        );
        assert_eq!(buffer.as_bytes()[BUFFER_SIZE - 1], 0);
        assert_eq!(
            buffer.write_cell(usize::MAX, b'X', ColorCode::normal()),
            Err(VgaError::InvalidPosition)
        );
    }
}
