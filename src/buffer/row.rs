//! A single line of text and its tab-expanded render cache.

/// One line of the buffer.
///
/// `chars` holds the raw bytes without a trailing newline. `render` is the
/// same line with every tab expanded to spaces up to the next tab stop; it is
/// rebuilt by every mutating method before that method returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(chars: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let mut row = Self {
            chars: chars.into(),
            render: Vec::new(),
        };
        row.update(tab_stop);
        row
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Rebuild the render cache from `chars`.
    fn update(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.chars.iter().filter(|&&b| b == b'\t').count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (tab_stop - 1));

        for &byte in &self.chars {
            if byte == b'\t' {
                render.push(b' ');
                while render.len() % tab_stop != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(byte);
            }
        }

        self.render = render;
    }

    /// Insert `byte` at `at`; an `at` past the end appends.
    pub fn insert_byte(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update(tab_stop);
    }

    /// Remove the byte at `at`. Returns `false` when `at` is out of range.
    pub fn delete_byte(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update(tab_stop);
        true
    }

    pub fn append(&mut self, text: &[u8], tab_stop: usize) {
        self.chars.extend_from_slice(text);
        self.update(tab_stop);
    }

    /// Cut the row at `at`, returning everything from `at` onward.
    pub fn split_off(&mut self, at: usize, tab_stop: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update(tab_stop);
        tail
    }

    /// Render column of the character-index column `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| advance(rx, byte, tab_stop))
    }

    /// First character index whose right edge passes render column `rx`,
    /// or the row length when `rx` is at or past the end of the render.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &byte) in self.chars.iter().enumerate() {
            cur_rx = advance(cur_rx, byte, tab_stop);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }
}

/// Render column after drawing `byte` starting at `rx`.
fn advance(rx: usize, byte: u8, tab_stop: usize) -> usize {
    if byte == b'\t' {
        rx + (tab_stop - 1) - (rx % tab_stop) + 1
    } else {
        rx + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_expands_to_next_stop() {
        let row = Row::new(b"ab\tc".to_vec(), 8);
        assert_eq!(row.render(), b"ab      c");
        assert_eq!(row.cx_to_rx(3, 8), 8);
        assert_eq!(row.rx_to_cx(5, 8), 2);
    }

    #[test]
    fn test_split_off_keeps_render_in_sync() {
        let mut row = Row::new(b"one\ttwo".to_vec(), 4);
        let tail = row.split_off(3, 4);
        assert_eq!(tail, b"\ttwo");
        assert_eq!(row.render(), b"one");
    }
}
