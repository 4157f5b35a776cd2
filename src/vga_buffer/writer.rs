// src/vga_buffer/writer.rs

//! Text writer with validate-then-write buffer access.
//!
//! A message is first laid out against the buffer geometry. Only when every
//! cell it produces fits inside the buffer is anything written, so a rejected
//! call leaves the screen exactly as it was.

use super::backend::TextBuffer;
use super::color::ColorCode;
use super::constants::*;
use super::VgaError;
use crate::constants::DEFAULT_ATTRIBUTE;
use core::ffi::CStr;

/// Cell placements produced by walking a message from a start row.
///
/// Yields `(byte_offset, character)` for every byte that occupies a cell.
/// Newlines move to the start of the next row and yield nothing; the first
/// NUL byte ends the message.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    message: &'a [u8],
    row: usize,
    offset: usize,
}

impl<'a> Layout<'a> {
    /// Start laying out `message` at the first cell of `row`.
    pub const fn new(message: &'a [u8], row: usize) -> Self {
        Self {
            message,
            row,
            offset: row_offset(row),
        }
    }

    /// Row the cursor is currently on.
    pub const fn row(&self) -> usize {
        self.row
    }
}

impl Iterator for Layout<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (&byte, rest) = self.message.split_first()?;
            match byte {
                TERMINATOR => {
                    self.message = &[];
                    return None;
                }
                b'\n' => {
                    self.message = rest;
                    self.row += 1;
                    self.offset = row_offset(self.row);
                }
                byte => {
                    self.message = rest;
                    let offset = self.offset;
                    self.offset += BYTES_PER_CHAR;
                    return Some((offset, byte));
                }
            }
        }
    }
}

/// Writes messages into a text buffer at a given row.
#[derive(Debug)]
pub struct TextWriter<B: TextBuffer> {
    buffer: B,
    attribute: ColorCode,
}

impl<B: TextBuffer> TextWriter<B> {
    /// Create a writer using the default light-gray-on-black attribute.
    pub const fn new(buffer: B) -> Self {
        Self::with_attribute(buffer, DEFAULT_ATTRIBUTE)
    }

    /// Create a writer that uses `attribute` for every cell it writes.
    pub const fn with_attribute(buffer: B, attribute: ColorCode) -> Self {
        Self { buffer, attribute }
    }

    /// Attribute applied to cleared and written cells.
    pub const fn attribute(&self) -> ColorCode {
        self.attribute
    }

    pub fn set_attribute(&mut self, attribute: ColorCode) {
        self.attribute = attribute;
    }

    /// Borrow the underlying buffer.
    pub const fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Consume the writer and return the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Blank every cell with a space in the current attribute.
    pub fn clear(&mut self) -> Result<(), VgaError> {
        let capacity = self.buffer.capacity();
        let mut offset = 0;
        while offset + BYTES_PER_CHAR <= capacity {
            self.buffer.write_cell(offset, BLANK_CHAR, self.attribute)?;
            offset += BYTES_PER_CHAR;
        }
        log::trace!("cleared {} cells", offset / BYTES_PER_CHAR);
        Ok(())
    }

    /// Write `message` starting at the first column of `row`.
    ///
    /// Returns the number of cells written. See [`Self::write_bytes_at`].
    pub fn write_at(&mut self, message: &str, row: usize) -> Result<usize, VgaError> {
        self.write_bytes_at(message.as_bytes(), row)
    }

    /// Write a NUL-terminated message starting at the first column of `row`.
    pub fn write_cstr_at(&mut self, message: &CStr, row: usize) -> Result<usize, VgaError> {
        self.write_bytes_at(message.to_bytes(), row)
    }

    /// Write raw message bytes starting at the first column of `row`.
    ///
    /// Bytes are copied verbatim; `\n` moves to the start of the next row and
    /// a NUL byte ends the message early. Text longer than a row continues on
    /// the following row.
    ///
    /// # Errors
    ///
    /// - [`VgaError::InvalidRow`] if `row` is not on screen.
    /// - [`VgaError::BufferOverflow`] if any cell would land past the end of
    ///   the buffer. The buffer is not modified.
    pub fn write_bytes_at(&mut self, message: &[u8], row: usize) -> Result<usize, VgaError> {
        if row >= VGA_HEIGHT {
            log::warn!("rejected write at row {row}: screen has {VGA_HEIGHT} rows");
            return Err(VgaError::InvalidRow);
        }

        let capacity = self.buffer.capacity();
        let layout = Layout::new(message, row);
        let mut cells = 0;
        for (offset, _) in layout.clone() {
            if offset + BYTES_PER_CHAR > capacity {
                log::warn!("rejected write at row {row}: cell at byte {offset} is off screen");
                return Err(VgaError::BufferOverflow);
            }
            cells += 1;
        }

        for (offset, character) in layout {
            self.buffer.write_cell(offset, character, self.attribute)?;
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga_buffer::backend::MemoryBuffer;
    use crate::vga_buffer::color::VgaColor;

    fn writer() -> TextWriter<MemoryBuffer> {
        TextWriter::new(MemoryBuffer::new())
    }

    #[test]
    fn test_layout_skips_newlines_and_stops_at_nul() {
        let cells: Vec<_> = Layout::new(b"A\nB\0C", 0).collect();
        assert_eq!(cells, vec![(0, b'A'), (160, b'B')]);
    }

    #[test]
    fn test_layout_tracks_row() {
        let mut layout = Layout::new(b"\n\nX", 3);
        assert_eq!(layout.next(), Some((row_offset(5), b'X')));
        assert_eq!(layout.row(), 5);
    }

    #[test]
    fn test_layout_wraps_linearly_past_column_80() {
        let message = [b'x'; VGA_WIDTH + 1];
        let last = Layout::new(&message, 0).last();
        assert_eq!(last, Some((row_offset(1), b'x')));
    }

    #[test]
    fn test_clear_blanks_every_cell() {
        let mut writer = TextWriter::new(MemoryBuffer::filled(0xFF));
        writer.clear().unwrap();
        for cell in writer.buffer().as_bytes().chunks_exact(BYTES_PER_CHAR) {
            assert_eq!(cell, &[b' ', 0x07]);
        }
    }

    #[test]
    fn test_clear_uses_writer_attribute() {
        let color = ColorCode::new(VgaColor::White, VgaColor::Blue);
        let mut writer = TextWriter::with_attribute(MemoryBuffer::new(), color);
        writer.clear().unwrap();
        assert_eq!(writer.buffer().as_bytes()[1], 0x1F);
        assert_eq!(writer.buffer().as_bytes()[BUFFER_SIZE - 1], 0x1F);
    }

    #[test]
    fn test_write_reports_cell_count() {
        let mut writer = writer();
        assert_eq!(writer.write_at("Hi\nthere", 0), Ok(7));
        assert_eq!(writer.write_at("", 4), Ok(0));
    }

    #[test]
    fn test_write_rejects_row_past_screen() {
        let mut writer = writer();
        assert_eq!(writer.write_at("x", VGA_HEIGHT), Err(VgaError::InvalidRow));
        assert_eq!(writer.write_at("", VGA_HEIGHT), Err(VgaError::InvalidRow));
        assert_eq!(writer.buffer(), &MemoryBuffer::new());
    }

    #[test]
    fn test_write_overflow_leaves_buffer_untouched() {
        let mut writer = writer();
        assert_eq!(writer.write_at("ok\n\nlost", VGA_HEIGHT - 2), Err(VgaError::BufferOverflow));
        assert_eq!(writer.buffer(), &MemoryBuffer::new());
    }

    #[test]
    fn test_write_fills_last_row_exactly() {
        let mut writer = writer();
        let row = [b'#'; VGA_WIDTH];
        assert_eq!(writer.write_bytes_at(&row, VGA_HEIGHT - 1), Ok(VGA_WIDTH));
        assert_eq!(writer.buffer().as_bytes()[BUFFER_SIZE - 2], b'#');

        let too_long = [b'#'; VGA_WIDTH + 1];
        assert_eq!(
            writer.write_bytes_at(&too_long, VGA_HEIGHT - 1),
            Err(VgaError::BufferOverflow)
        );
    }

    #[test]
    fn test_trailing_newline_on_last_row_is_allowed() {
        let mut writer = writer();
        assert_eq!(writer.write_at("end\n", VGA_HEIGHT - 1), Ok(3));
    }

    #[test]
    fn test_write_cstr_stops_at_terminator() {
        let mut writer = writer();
        let message = CStr::from_bytes_with_nul(b"OK\0").unwrap();
        assert_eq!(writer.write_cstr_at(message, 1), Ok(2));
        let bytes = writer.buffer().as_bytes();
        assert_eq!(&bytes[160..164], &[b'O', 0x07, b'K', 0x07]);
        assert_eq!(bytes[164], 0);
    }

    #[test]
    fn test_set_attribute_applies_to_later_writes() {
        let mut writer = writer();
        writer.write_at("a", 0).unwrap();
        writer.set_attribute(ColorCode::new(VgaColor::Red, VgaColor::Black));
        writer.write_at("b", 1).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes.as_bytes()[1], 0x07);
        assert_eq!(bytes.as_bytes()[161], 0x04);
    }
}
