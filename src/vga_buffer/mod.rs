// src/vga_buffer/mod.rs

//! VGA text mode driver with interrupt-safe Mutex protection
//!
//! The screen is an 80x25 grid of 2-byte cells (character, attribute) at
//! physical address `0xB8000`. This module provides:
//! - [`TextBuffer`], the byte-level access seam, with the hardware
//!   [`TextModeBuffer`] and the in-memory [`MemoryBuffer`]
//! - [`TextWriter`], which clears the screen and writes messages at a row
//! - a global writer over the hardware buffer, locked with interrupts off

mod backend;
mod color;
pub mod constants;
mod error;
mod writer;

pub use backend::{MemoryBuffer, TextBuffer, TextModeBuffer};
pub use color::{ColorCode, VgaColor};
pub use error::VgaError;
pub use writer::{Layout, TextWriter};

use spin::Mutex;
use x86_64::instructions::interrupts;

/// Global VGA writer protected by Mutex
///
/// # Locking Order
///
/// To prevent deadlocks, acquire SERIAL1 (in serial) before VGA_WRITER if
/// both are needed.
// SAFETY: the bootloader identity-maps the VGA text buffer and this is the
// only handle to it.
static VGA_WRITER: Mutex<TextWriter<TextModeBuffer>> =
    Mutex::new(TextWriter::new(unsafe { TextModeBuffer::new() }));

/// Execute a function with the VGA writer, protected from interrupts
pub fn with_writer<F, R>(f: F) -> R
where
    F: FnOnce(&mut TextWriter<TextModeBuffer>) -> R,
{
    interrupts::without_interrupts(|| f(&mut VGA_WRITER.lock()))
}

/// Clear the screen
pub fn clear() -> Result<(), VgaError> {
    with_writer(|writer| writer.clear())
}

/// Write `message` at `row` on the screen
pub fn write_at(message: &str, row: usize) -> Result<usize, VgaError> {
    with_writer(|writer| writer.write_at(message, row))
}
