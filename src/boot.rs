// src/boot.rs

//! Boot screen: blank the console and print the greeting.

use crate::constants::{GREETING, GREETING_ROW};
use crate::errors::Result;
use crate::vga_buffer::{self, TextBuffer, TextWriter, VgaError};

/// Clear `writer`'s buffer, then write the greeting at its row.
///
/// Returns the number of greeting cells written.
pub fn greet<B: TextBuffer>(writer: &mut TextWriter<B>) -> core::result::Result<usize, VgaError> {
    writer.clear()?;
    writer.write_at(GREETING, GREETING_ROW)
}

/// Show the boot screen on the hardware console.
pub fn run() -> Result<()> {
    let cells = vga_buffer::with_writer(|writer| greet(writer))?;
    log::info!("greeting written: {cells} cells at row {GREETING_ROW}");
    Ok(())
}
