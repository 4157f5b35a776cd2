// src/vga_buffer/constants.rs

//! Constants for VGA text buffer operations

/// VGA text buffer physical memory address
pub const VGA_BUFFER_ADDR: usize = 0xb8000;

/// Screen dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Bytes per character (1 byte ASCII + 1 byte color attribute)
pub const BYTES_PER_CHAR: usize = 2;

/// Bytes per row (80 characters * 2 bytes each)
pub const BYTES_PER_ROW: usize = VGA_WIDTH * BYTES_PER_CHAR;

/// Total number of cells in the VGA buffer
pub const CELL_COUNT: usize = VGA_WIDTH * VGA_HEIGHT;

/// Total buffer size in bytes
pub const BUFFER_SIZE: usize = VGA_HEIGHT * BYTES_PER_ROW;

/// Character used to blank a cell
pub const BLANK_CHAR: u8 = b' ';

/// Message terminator; traversal stops at the first occurrence
pub const TERMINATOR: u8 = 0;

/// Byte offset of the first cell of `row`
#[inline]
pub const fn row_offset(row: usize) -> usize {
    row * BYTES_PER_ROW
}
