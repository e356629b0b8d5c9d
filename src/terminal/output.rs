//! `OutputBuffer`: one frame of escape sequences and text, flushed in one write.

use std::io::Write;

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
pub const INVERSE_ON: &[u8] = b"\x1b[7m";
pub const ATTRS_OFF: &[u8] = b"\x1b[m";
pub const CURSOR_TO_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";
pub const QUERY_CURSOR_POSITION: &[u8] = b"\x1b[6n";

/// Growable byte buffer a frame is composed into.
///
/// Nothing reaches the terminal until [`OutputBuffer::flush_to`], so a
/// frame is never shown half drawn.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn hide_cursor(&mut self) {
        self.write_raw(HIDE_CURSOR);
    }

    #[inline]
    pub fn show_cursor(&mut self) {
        self.write_raw(SHOW_CURSOR);
    }

    #[inline]
    pub fn cursor_home(&mut self) {
        self.write_raw(CURSOR_HOME);
    }

    #[inline]
    pub fn clear_line(&mut self) {
        self.write_raw(CLEAR_LINE);
    }

    #[inline]
    pub fn inverse_on(&mut self) {
        self.write_raw(INVERSE_ON);
    }

    #[inline]
    pub fn attrs_off(&mut self) {
        self.write_raw(ATTRS_OFF);
    }

    /// Move the cursor to the zero-based screen cell (`row`, `col`).
    pub fn cursor_goto(&mut self, row: usize, col: usize) {
        self.write_str(&format!("\x1b[{};{}H", row + 1, col + 1));
    }

    /// Write the whole frame with a single `write_all`, then flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_goto_is_one_based() {
        let mut out = OutputBuffer::new();
        out.cursor_goto(0, 0);
        out.cursor_goto(4, 11);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[5;12H");
    }

    #[test]
    fn test_flush_writes_everything_once() {
        let mut out = OutputBuffer::new();
        out.hide_cursor();
        out.write_str("~");
        out.clear_line();

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[?25l~\x1b[K");
    }
}
